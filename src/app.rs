//! Root application component with the tab shell and context providers.

use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};
use leptos_meta::{Title, provide_meta_context};

use crate::components::navigation::{BRAND, Navigation};
use crate::pages::{
    dashboard::DashboardPage, inventory::InventoryPage, marketing::MarketingPage, offers::OffersPage, sales::SalesPage,
};
use crate::state::ui::{Tab, UiState};

/// Root application component.
///
/// Provides the shared `UiState` and mounts the page for the active tab.
/// No active tab renders an empty main area.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    provide_context(ui);

    // Menu toggles must not remount the page.
    let active_tab = Memo::new(move |_| ui.get().active_tab);

    view! {
        <Title text=BRAND/>
        <div class="app">
            <Navigation/>
            <main class="app__main">{move || active_tab.get().map(tab_page)}</main>
        </div>
    }
}

fn tab_page(tab: Tab) -> AnyView {
    match tab {
        Tab::Dashboard => view! { <DashboardPage/> }.into_any(),
        Tab::Offers => view! { <OffersPage/> }.into_any(),
        Tab::Sales => view! { <SalesPage/> }.into_any(),
        Tab::Inventory => view! { <InventoryPage/> }.into_any(),
        Tab::Marketing => view! { <MarketingPage/> }.into_any(),
    }
}
