//! Leptos rendering of the filter bar.
//!
//! The bar is rebuilt from its [`FilterBarState`] on every change; handlers of a
//! previous render are dropped together with its DOM.

use std::sync::Arc;

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use super::actions::{download_rows, print_rows};
use super::input::{render_input, FilterInput};
use super::registry::FilterRegistry;
use super::state::{AddFilterDraft, FilterBarState, FilterTagView};
use super::store::FilterStore;
use super::table::ReloadableTable;
use super::toolbar::{
    toolbar_buttons, visible_actions, FeatureFlags, FilterBarOptions, PermissionCheck,
    TableAction, ToolbarButton,
};
use crate::shared::components::ui::button::button_class;
use crate::shared::components::ui::{Button, Input, Select};
use crate::shared::config::config;
use crate::shared::error::FilterError;
use crate::shared::icons::icon;

/// Everything a filter bar needs from the table that owns it
#[derive(Clone)]
pub struct FilterBarSetup {
    pub table_key: String,
    pub table: Arc<dyn ReloadableTable>,
    pub registry: Arc<dyn FilterRegistry>,
    pub options: FilterBarOptions,
    pub flags: FeatureFlags,
    pub permission_check: Option<PermissionCheck>,
}

impl FilterBarSetup {
    pub fn new(
        table_key: &str,
        table: Arc<dyn ReloadableTable>,
        registry: Arc<dyn FilterRegistry>,
    ) -> Self {
        Self {
            table_key: table_key.to_lowercase(),
            table,
            registry,
            options: FilterBarOptions::default(),
            flags: FeatureFlags::default(),
            permission_check: None,
        }
    }

    pub fn with_options(mut self, options: FilterBarOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_flags(mut self, flags: FeatureFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn with_permission_check(mut self, check: impl Fn(&str) -> bool + Send + Sync + 'static) -> Self {
        self.permission_check = Some(Arc::new(check));
        self
    }
}

type Setup = StoredValue<FilterBarSetup>;
type Store = StoredValue<FilterStore>;

fn report_action(result: Result<(), FilterError>) {
    if let Err(e) = result {
        log::warn!("{}", e);
    }
}

/// Render a filter bar into the element matching `selector`.
///
/// A missing container is logged and nothing is rendered.
pub fn mount_filter_bar(selector: &str, setup: FilterBarSetup) -> Result<(), FilterError> {
    let container = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector(selector).ok().flatten())
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());

    let Some(container) = container else {
        log::error!(
            "Filter bar for '{}' not rendered: no element matches '{}'",
            setup.table_key,
            selector
        );
        return Err(FilterError::ContainerNotFound(selector.to_string()));
    };

    container.set_inner_html("");
    leptos::mount::mount_to(container, move || view! { <FilterBar setup=setup /> }).forget();
    Ok(())
}

#[component]
pub fn FilterBar(setup: FilterBarSetup) -> impl IntoView {
    let store = FilterStore::session();
    let state = RwSignal::new(FilterBarState::load(&store, &setup.table_key));
    let setup = StoredValue::new(setup);
    let store = StoredValue::new(store);

    view! {
        <div class="filter-list">
            {move || render_bar(state, setup, store)}
        </div>
    }
}

fn render_bar(state: RwSignal<FilterBarState>, setup: Setup, store: Store) -> AnyView {
    let current = state.get();
    let labels = &config().labels;
    let available = setup.with_value(|s| s.registry.available_filters(&s.table_key));
    let buttons = setup.with_value(|s| {
        toolbar_buttons(&s.options, &s.flags, s.permission_check.as_ref())
    });

    let tags = current.tags(&available, labels);
    let show_add = current.show_add_controls(&available);
    let show_clear = current.show_clear(&available);

    let add_form = current.draft().filter(|_| show_add).map(|draft| {
        let input = available
            .get(&draft.field)
            .map(|def| render_input(def, Some(&draft.value), labels));
        add_filter_form(draft.clone(), current.addable_filters(&available), input, state, setup, store)
    });

    let toggle_add = Callback::new(move |_: MouseEvent| state.update(|s| s.toggle_add()));
    let clear = Callback::new(move |_: MouseEvent| {
        let filters = state.try_update(|s| store.with_value(|st| s.clear_filters(st)));
        setup.with_value(|s| s.table.reload(filters));
    });

    view! {
        <div class="filter-list__buttons">
            {buttons.into_iter().map(|b| toolbar_button(b, setup)).collect_view()}
            {show_add.then(|| view! {
                <Button variant="ghost" class="filter-list__add" title="Add new filter" on_click=toggle_add>
                    {icon("filter")}
                </Button>
            })}
            {show_clear.then(|| view! {
                <Button variant="ghost" class="filter-list__clear" title="Clear all filters" on_click=clear>
                    {icon("x")}
                </Button>
            })}
        </div>
        <div class="filter-list__tags">
            {tags.into_iter().map(|tag| {
                let key = tag.key.clone();
                let on_remove = Callback::new(move |_: ()| {
                    let filters = state.try_update(|s| store.with_value(|st| s.remove_filter(st, &key)));
                    setup.with_value(|s| s.table.reload(filters));
                });
                view! { <FilterTag tag=tag on_remove=on_remove /> }
            }).collect_view()}
        </div>
        {add_form}
    }
    .into_any()
}

#[component]
fn FilterTag(tag: FilterTagView, on_remove: Callback<()>) -> impl IntoView {
    view! {
        <div class="filter-tag" title=tag.description>
            <span class="filter-tag__label">{tag.label}</span>
            " = "
            <span class="filter-tag__value">{tag.value_label}</span>
            <span
                class="filter-tag__remove"
                title="Remove filter"
                on:click=move |e| {
                    e.stop_propagation();
                    on_remove.run(());
                }
            >
                {icon("x")}
            </span>
        </div>
    }
}

fn add_filter_form(
    draft: AddFilterDraft,
    addable: Vec<(String, String)>,
    input: Option<FilterInput>,
    state: RwSignal<FilterBarState>,
    setup: Setup,
    store: Store,
) -> impl IntoView {
    let select_field = Callback::new(move |field: String| {
        let available = setup.with_value(|s| s.registry.available_filters(&s.table_key));
        state.update(|s| s.select_field(&field, &available, &config().labels));
    });
    let confirm = Callback::new(move |_: MouseEvent| {
        let filters = state
            .try_update(|s| store.with_value(|st| s.confirm_add(st)))
            .flatten();
        if let Some(filters) = filters {
            setup.with_value(|s| s.table.reload(Some(filters)));
        }
    });

    view! {
        <div class="filter-list__add-form">
            <Select
                value=draft.field
                options=addable
                placeholder="Select filter"
                on_change=select_field
            />
            {input.map(|input| filter_input(input, state))}
            <Button size="sm" on_click=confirm>
                {icon("plus")}
                " Add"
            </Button>
        </div>
    }
}

/// Value edits are stored without re-rendering the bar.
fn filter_input(input: FilterInput, state: RwSignal<FilterBarState>) -> AnyView {
    let set_value = Callback::new(move |value: String| {
        state.update_untracked(|s| s.set_draft_value(value));
    });

    match input {
        FilterInput::Text { value } => view! {
            <Input value=value on_change=set_value />
        }
        .into_any(),
        FilterInput::Date { value } => view! {
            <Input input_type="date" value=value on_change=set_value />
        }
        .into_any(),
        FilterInput::Select { options, selected } => {
            let options: Vec<(String, String)> =
                options.into_iter().map(|o| (o.value, o.label)).collect();
            view! {
                <Select value=selected.unwrap_or_default() options=options on_change=set_value />
            }
            .into_any()
        }
    }
}

fn toolbar_button(button: ToolbarButton, setup: Setup) -> AnyView {
    match button {
        ToolbarButton::Reload => view! {
            <Button
                variant="ghost"
                title="Refresh table"
                on_click=Callback::new(move |_: MouseEvent| setup.with_value(|s| s.table.reload(None)))
            >
                {icon("reload")}
            </Button>
        }
        .into_any(),
        ToolbarButton::Download => view! {
            <Button
                variant="ghost"
                title="Download table data"
                on_click=Callback::new(move |_: MouseEvent| setup.with_value(|s| {
                    report_action(download_rows(&s.table_key, &s.table.rows()))
                }))
            >
                {icon("download")}
            </Button>
        }
        .into_any(),
        ToolbarButton::PrintLabels => {
            let title = setup.with_value(|s| format!("Print labels for selected {}", s.options.plural_name));
            view! {
                <Button
                    variant="ghost"
                    title=title
                    on_click=Callback::new(move |_: MouseEvent| setup.with_value(|s| {
                        if let Some(target) = &s.options.labels {
                            report_action(print_rows(target, &s.table.selected_rows()));
                        }
                    }))
                >
                    {icon("tag")}
                </Button>
            }
            .into_any()
        }
        ToolbarButton::PrintReport => {
            let title = setup.with_value(|s| format!("Print report for selected {}", s.options.plural_name));
            view! {
                <Button
                    variant="ghost"
                    title=title
                    on_click=Callback::new(move |_: MouseEvent| setup.with_value(|s| {
                        if let Some(target) = &s.options.report {
                            report_action(print_rows(target, &s.table.selected_rows()));
                        }
                    }))
                >
                    {icon("print")}
                </Button>
            }
            .into_any()
        }
        ToolbarButton::CustomGroup(idx) => {
            let group = setup.with_value(|s| {
                s.options.custom_actions.get(idx).map(|g| {
                    let actions: Vec<TableAction> = visible_actions(&g.actions, s.permission_check.as_ref())
                        .into_iter()
                        .cloned()
                        .collect();
                    (g.label.clone(), g.title.clone(), g.icon.clone(), actions)
                })
            });
            match group {
                Some((label, title, group_icon, actions)) => {
                    action_menu(label, title, group_icon, actions, setup).into_any()
                }
                None => ().into_any(),
            }
        }
        ToolbarButton::Barcode => {
            let actions = setup.with_value(|s| {
                visible_actions(&s.options.barcode_actions, s.permission_check.as_ref())
                    .into_iter()
                    .cloned()
                    .collect::<Vec<_>>()
            });
            action_menu(
                String::new(),
                "Barcode actions".to_string(),
                "barcode".to_string(),
                actions,
                setup,
            )
            .into_any()
        }
    }
}

fn action_menu(
    label: String,
    title: String,
    group_icon: String,
    actions: Vec<TableAction>,
    setup: Setup,
) -> impl IntoView {
    let group_icon = if group_icon.is_empty() { "menu".to_string() } else { group_icon };

    view! {
        <details class="filter-list__group" title=title>
            <summary class=button_class(Some("ghost"), None, "")>
                {icon(&group_icon)}
                {(!label.is_empty()).then(|| view! { <span>" "{label}</span> })}
            </summary>
            <ul class="dropdown-menu">
                {actions.into_iter().map(|action| {
                    let label = action.label.clone();
                    let title = action.title.clone();
                    view! {
                        <li>
                            <a
                                href="#"
                                title=title
                                on:click=move |ev| {
                                    ev.prevent_default();
                                    let rows = setup.with_value(|s| s.table.selected_rows());
                                    action.run(&rows);
                                }
                            >
                                {label}
                            </a>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </details>
    }
}
