pub mod parts_list;
pub mod stock_list;
pub mod table_page;
