//! Built-in filter catalogue for the inventory tables.

use super::definition::{ChoiceOptions, FilterDefinition, FilterOption, FilterOptions};
use super::registry::{AvailableFilters, FilterRegistry};

/// Stock item status codes, as stored in the `status` filter
pub fn stock_status_codes() -> FilterOptions {
    [
        ("10", "OK"),
        ("50", "Attention needed"),
        ("55", "Damaged"),
        ("60", "Destroyed"),
        ("65", "Rejected"),
        ("70", "Lost"),
        ("75", "Quarantined"),
        ("85", "Returned"),
    ]
    .into_iter()
    .map(|(key, label)| (key.to_string(), FilterOption::new(key, label)))
    .collect()
}

fn order_status_codes() -> ChoiceOptions {
    ChoiceOptions::from_iter([
        ("10", "Pending"),
        ("15", "In progress"),
        ("20", "Shipped"),
        ("40", "Cancelled"),
        ("50", "Lost"),
        ("60", "Returned"),
    ])
}

fn part_filters() -> AvailableFilters {
    [
        (
            "cascade",
            FilterDefinition::boolean("Include subcategories")
                .with_description("Include parts in subcategories"),
        ),
        (
            "active",
            FilterDefinition::boolean("Active").with_description("Show active parts"),
        ),
        (
            "is_template",
            FilterDefinition::boolean("Template").with_description("Show template parts"),
        ),
        (
            "assembly",
            FilterDefinition::boolean("Assembly").with_description("Show assembled parts"),
        ),
        (
            "component",
            FilterDefinition::boolean("Component").with_description("Show component parts"),
        ),
        (
            "trackable",
            FilterDefinition::boolean("Trackable").with_description("Show trackable parts"),
        ),
        (
            "has_stock",
            FilterDefinition::choice(
                "Stock available",
                ChoiceOptions::from_iter([("1", "In Stock"), ("0", "No Stock")]),
            ),
        ),
        (
            "low_stock",
            FilterDefinition::boolean("Low stock").with_description("Show parts below minimum stock"),
        ),
        (
            "has_ipn",
            FilterDefinition::boolean("Has IPN").with_description("Part has internal part number"),
        ),
    ]
    .into_iter()
    .map(|(k, d)| (k.to_string(), d))
    .collect()
}

fn stock_filters() -> AvailableFilters {
    [
        (
            "cascade",
            FilterDefinition::boolean("Include sublocations")
                .with_description("Include stock in sublocations"),
        ),
        (
            "in_stock",
            FilterDefinition::boolean("In stock").with_description("Show items which are in stock"),
        ),
        (
            "status",
            FilterDefinition::choice("Stock status", ChoiceOptions::provider(stock_status_codes)),
        ),
        (
            "serialized",
            FilterDefinition::boolean("Has serial number"),
        ),
        ("serial", FilterDefinition::text("Serial number")),
        (
            "batch",
            FilterDefinition::text("Batch").with_description("Batch code"),
        ),
        (
            "expired",
            FilterDefinition::boolean("Expired").with_description("Show stock items which have expired"),
        ),
        (
            "updated_after",
            FilterDefinition::date("Updated after"),
        ),
    ]
    .into_iter()
    .map(|(k, d)| (k.to_string(), d))
    .collect()
}

fn bom_filters() -> AvailableFilters {
    [
        ("sub_part_trackable", FilterDefinition::boolean("Trackable part")),
        ("sub_part_assembly", FilterDefinition::boolean("Assembled part")),
        ("available_stock", FilterDefinition::boolean("Has available stock")),
        ("allow_variants", FilterDefinition::boolean("Allow variant stock")),
        ("optional", FilterDefinition::boolean("Optional")),
        ("consumable", FilterDefinition::boolean("Consumable")),
    ]
    .into_iter()
    .map(|(k, d)| (k.to_string(), d))
    .collect()
}

fn order_filters() -> AvailableFilters {
    [
        ("status", FilterDefinition::choice("Order status", order_status_codes())),
        (
            "outstanding",
            FilterDefinition::boolean("Outstanding").with_description("Show orders which are not complete"),
        ),
        ("overdue", FilterDefinition::boolean("Overdue")),
        ("target_date_before", FilterDefinition::date("Target date before")),
        ("target_date_after", FilterDefinition::date("Target date after")),
    ]
    .into_iter()
    .map(|(k, d)| (k.to_string(), d))
    .collect()
}

fn category_filters() -> AvailableFilters {
    [
        (
            "cascade",
            FilterDefinition::boolean("Include subcategories"),
        ),
        ("starred", FilterDefinition::boolean("Subscribed")),
    ]
    .into_iter()
    .map(|(k, d)| (k.to_string(), d))
    .collect()
}

fn company_filters() -> AvailableFilters {
    [
        ("is_manufacturer", FilterDefinition::boolean("Manufacturer")),
        ("is_supplier", FilterDefinition::boolean("Supplier")),
        ("is_customer", FilterDefinition::boolean("Customer")),
    ]
    .into_iter()
    .map(|(k, d)| (k.to_string(), d))
    .collect()
}

fn build_filters() -> AvailableFilters {
    [
        ("active", FilterDefinition::boolean("Build is active")),
        ("overdue", FilterDefinition::boolean("Overdue")),
        ("reference", FilterDefinition::text("Reference")),
    ]
    .into_iter()
    .map(|(k, d)| (k.to_string(), d))
    .collect()
}

/// Filters of the inventory tables, keyed by table.
#[derive(Debug, Clone, Copy, Default)]
pub struct InventoryFilterRegistry;

impl FilterRegistry for InventoryFilterRegistry {
    fn available_filters(&self, table_key: &str) -> AvailableFilters {
        match table_key.to_lowercase().as_str() {
            "parts" => part_filters(),
            "stock" => stock_filters(),
            "bom" => bom_filters(),
            "category" => category_filters(),
            "company" => company_filters(),
            "build" => build_filters(),
            "salesorder" | "purchaseorder" => order_filters(),
            _ => AvailableFilters::new(),
        }
    }
}
