use leptos::prelude::*;
use serde_json::Value;

use super::table_page::{Columns, TablePage};
use crate::shared::table_filters::actions::row_ids;
use crate::shared::table_filters::{ActionGroup, FilterBarOptions, PrintTarget, RemoteTable, TableAction};

const COLUMNS: Columns = &[
    ("name", "Part"),
    ("IPN", "IPN"),
    ("description", "Description"),
    ("category_name", "Category"),
    ("in_stock", "Stock"),
];

fn order_parts(rows: &[Value]) {
    log::info!("Ordering parts {:?}", row_ids(rows, "pk"));
}

fn parts_options() -> FilterBarOptions {
    FilterBarOptions {
        download: true,
        labels: Some(PrintTarget::new("/api/label/part/print/", "parts")),
        singular_name: "part".to_string(),
        plural_name: "parts".to_string(),
        custom_actions: vec![ActionGroup {
            label: "Parts".to_string(),
            title: "Part actions".to_string(),
            icon: String::new(),
            actions: vec![TableAction::new("Order parts", order_parts)
                .with_title("Order selected parts")
                .with_permission("purchase_order.add")],
        }],
        ..Default::default()
    }
}

#[component]
pub fn PartsList() -> impl IntoView {
    let table = RemoteTable::new("parts", "/api/part/");

    view! {
        <TablePage title="Parts" table=table columns=COLUMNS options=parts_options() />
    }
}
