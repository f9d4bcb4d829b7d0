//! Per-table filter bars: persisted filter sets, registry-driven filter widgets
//! and the action buttons around a data table.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::shared::table_filters::{mount_filter_bar, FilterBarSetup, InventoryFilterRegistry};
//!
//! Effect::new(move |_| {
//!     let setup = FilterBarSetup::new("parts", table.clone(), Arc::new(InventoryFilterRegistry));
//!     let _ = mount_filter_bar("#filter-list-parts", setup);
//! });
//! ```

pub mod actions;
pub mod definition;
pub mod filter_set;
pub mod input;
pub mod inventory_filters;
pub mod query;
pub mod registry;
pub mod state;
pub mod storage;
pub mod store;
pub mod table;
pub mod toolbar;
pub mod view;

pub use definition::{ChoiceOptions, FilterDefinition, FilterKind};
pub use filter_set::FilterSet;
pub use inventory_filters::InventoryFilterRegistry;
pub use registry::{fetch_filter_metadata, FilterRegistry, StaticFilterRegistry};
pub use store::FilterStore;
pub use table::{ReloadableTable, RemoteTable};
pub use toolbar::{ActionGroup, FeatureFlags, FilterBarOptions, PrintTarget, TableAction};
pub use view::{mount_filter_bar, FilterBar, FilterBarSetup};
