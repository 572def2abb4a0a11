//! Headline figure card used by the sales and inventory summaries.

use leptos::prelude::*;

#[component]
pub fn SummaryCard(
    title: &'static str,
    icon: &'static str,
    /// Extra modifier class, e.g. `summary-card--alert`.
    #[prop(optional)]
    tone: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=format!("card summary-card {tone}")>
            <div class="summary-card__header">
                <span class="summary-card__title">{title}</span>
                <span class="summary-card__icon" aria-hidden="true">{icon}</span>
            </div>
            <div class="summary-card__body">{children()}</div>
        </div>
    }
}
