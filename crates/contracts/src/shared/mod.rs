pub mod notifications;
pub mod table_filters;
