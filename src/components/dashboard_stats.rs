//! Headline stat cards on the overview.

use leptos::prelude::*;

use crate::state::dashboard::{STAT_CARDS, Trend};
use crate::util::format::format_change;

#[component]
pub fn DashboardStats() -> impl IntoView {
    view! {
        <div class="stats-grid">
            {STAT_CARDS
                .iter()
                .map(|card| {
                    let up = card.trend() == Trend::Up;
                    view! {
                        <div class="card stat-card">
                            <div class="stat-card__header">
                                <span class="stat-card__title">{card.title}</span>
                                <span class="stat-card__icon" aria-hidden="true">{card.icon}</span>
                            </div>
                            <div class="stat-card__value">{card.value}</div>
                            <p
                                class="stat-card__change"
                                class:stat-card__change--up=up
                                class:stat-card__change--down=!up
                            >
                                <span aria-hidden="true">{if up { "\u{2197} " } else { "\u{2198} " }}</span>
                                {format_change(card.change_percent)}
                            </p>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
