use leptos::prelude::*;

use crate::pages::parts_list::PartsList;
use crate::pages::stock_list::StockList;
use crate::shared::notifications::NotificationIndicator;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <header class="top-header">
            <span class="top-header__title">"Inventory"</span>
            <NotificationIndicator />
        </header>
        <main class="content">
            <PartsList />
            <StockList />
        </main>
    }
}
