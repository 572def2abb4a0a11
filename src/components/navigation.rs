//! App navigation: desktop sidebar, mobile slide-in menu, and bottom bar.
//!
//! All three surfaces write the same `UiState` context, so the active tab
//! highlight stays in sync between them.

use leptos::prelude::*;

use crate::state::ui::{Tab, UiState};

pub const BRAND: &str = "SMB Growth Agent";

#[component]
pub fn Navigation() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let menu_open = move || ui.get().mobile_menu_open;
    let toggle_menu = move |_| ui.update(UiState::toggle_mobile_menu);

    view! {
        <button class="btn nav-toggle" aria-label="Toggle menu" on:click=toggle_menu>
            {move || if menu_open() { "\u{2715}" } else { "\u{2630}" }}
        </button>

        <aside class="nav-sidebar">
            <h1 class="nav__brand">{BRAND}</h1>
            <nav class="nav__list">
                {Tab::ALL.into_iter().map(|tab| view! { <NavItem tab=tab/> }).collect_view()}
            </nav>
        </aside>

        <Show when=menu_open>
            <div class="nav-overlay" on:click=toggle_menu></div>
            <aside class="nav-drawer">
                <h1 class="nav__brand">{BRAND}</h1>
                <nav class="nav__list">
                    {Tab::ALL.into_iter().map(|tab| view! { <NavItem tab=tab/> }).collect_view()}
                </nav>
            </aside>
        </Show>

        <nav class="nav-bottom">
            {Tab::ALL.into_iter().map(|tab| view! { <NavItem tab=tab compact=true/> }).collect_view()}
        </nav>
    }
}

#[component]
fn NavItem(tab: Tab, #[prop(optional)] compact: bool) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <button
            class="nav__item"
            class:nav__item--compact=compact
            class:nav__item--active=move || ui.get().is_active(tab)
            on:click=move |_| ui.update(|u| u.open(tab))
        >
            <span class="nav__icon" aria-hidden="true">{tab.icon()}</span>
            <span class="nav__label">{tab.label()}</span>
        </button>
    }
}
