use leptos::prelude::*;
use serde_json::Value;

use super::table_page::{Columns, TablePage};
use crate::shared::table_filters::actions::row_ids;
use crate::shared::table_filters::{
    ActionGroup, FilterBarOptions, FilterSet, PrintTarget, RemoteTable, TableAction,
};

const COLUMNS: Columns = &[
    ("part_name", "Part"),
    ("location_name", "Location"),
    ("quantity", "Quantity"),
    ("batch", "Batch"),
    ("status_text", "Status"),
];

fn count_stock(rows: &[Value]) {
    log::info!("Counting stock items {:?}", row_ids(rows, "pk"));
}

fn scan_to_location(rows: &[Value]) {
    log::info!("Scanning {} stock items into a location", rows.len());
}

fn stock_options() -> FilterBarOptions {
    FilterBarOptions {
        download: true,
        report: Some(PrintTarget::new("/api/report/test/print/", "items")),
        labels: Some(PrintTarget::new("/api/label/stock/print/", "items")),
        singular_name: "stock item".to_string(),
        plural_name: "stock items".to_string(),
        custom_actions: vec![ActionGroup {
            label: "Stock".to_string(),
            title: "Stock actions".to_string(),
            icon: String::new(),
            actions: vec![TableAction::new("Count stock", count_stock).with_permission("stock.change")],
        }],
        barcode_actions: vec![TableAction::new("Scan to location", scan_to_location)
            .with_icon("barcode")
            .with_permission("stock.change")],
    }
}

#[component]
pub fn StockList() -> impl IntoView {
    // always ask for the nested names the columns show
    let table = RemoteTable::new("stock", "/api/stock/").with_overrides(FilterSet::from_iter([
        ("part_detail", "true"),
        ("location_detail", "true"),
    ]));

    view! {
        <TablePage title="Stock" table=table columns=COLUMNS options=stock_options() />
    }
}
