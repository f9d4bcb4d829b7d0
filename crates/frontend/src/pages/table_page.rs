use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::config::{config, RegistrySource};
use crate::shared::table_filters::actions::cell_text;
use crate::shared::table_filters::{
    fetch_filter_metadata, mount_filter_bar, FilterBarOptions, FilterBarSetup, FilterRegistry,
    InventoryFilterRegistry, ReloadableTable, RemoteTable,
};

/// Permissions of the signed-in user, checked by custom table actions
pub const GRANTED_PERMISSIONS: &[&str] = &["part.view", "stock.view", "stock.change", "purchase_order.add"];

/// (row field, column title)
pub type Columns = &'static [(&'static str, &'static str)];

fn mount(selector: &str, table: RemoteTable, registry: Arc<dyn FilterRegistry>, options: FilterBarOptions) {
    let table_key = table.table_key().to_string();
    let setup = FilterBarSetup::new(&table_key, Arc::new(table), registry)
        .with_options(options)
        .with_permission_check(|permission| GRANTED_PERMISSIONS.contains(&permission));
    // a missing container is already logged by the filter bar
    let _ = mount_filter_bar(selector, setup);
}

/// A data table with its filter bar, loaded from a list endpoint.
#[component]
pub fn TablePage(
    #[prop(into)] title: String,
    table: RemoteTable,
    columns: Columns,
    #[prop(optional)] options: FilterBarOptions,
) -> impl IntoView {
    let container_id = format!("filter-list-{}", table.table_key());
    let selector = format!("#{}", container_id);
    let rows = table.rows;
    let loading = table.loading;
    let error = table.error;

    // the container exists once the page is rendered
    Effect::new(move |_| {
        let table = table.clone();
        let options = options.clone();
        let selector = selector.clone();
        table.reload(None);

        match config().registry.source {
            RegistrySource::Builtin => {
                mount(&selector, table, Arc::new(InventoryFilterRegistry), options);
            }
            RegistrySource::Remote => spawn_local(async move {
                let registry = fetch_filter_metadata(&config().registry.endpoint, table.table_key()).await;
                mount(&selector, table, Arc::new(registry), options);
            }),
        }
    });

    view! {
        <section class="table-page">
            <h2 class="table-page__title">{title}</h2>
            <div id=container_id class="table-page__filters"></div>
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            {move || loading.get().then(|| view! { <div class="table-page__loading">"Loading..."</div> })}
            <table class="data-table">
                <thead>
                    <tr>
                        {columns.iter().map(|(_, title)| view! { <th>{*title}</th> }).collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {move || rows.get().into_iter().map(|row| view! {
                        <tr>
                            {columns.iter().map(|(field, _)| view! {
                                <td>{cell_text(row.get(*field))}</td>
                            }).collect_view()}
                        </tr>
                    }).collect_view()}
                </tbody>
            </table>
        </section>
    }
}
