//! Weekly sales bar chart.

use leptos::prelude::*;

use crate::state::dashboard::{WEEKLY_SALES, bar_width_percent, max_sales};
use crate::util::format::format_thousands;

#[component]
pub fn SalesChart() -> impl IntoView {
    let max = max_sales(&WEEKLY_SALES);

    view! {
        <div class="card sales-chart">
            <h3 class="card__title">"Weekly Sales Overview"</h3>
            <div class="sales-chart__rows">
                {WEEKLY_SALES
                    .iter()
                    .map(|day| {
                        let width = format!("width: {:.1}%", bar_width_percent(day.sales, max));
                        view! {
                            <div class="sales-chart__row">
                                <span class="sales-chart__day">{day.day}</span>
                                <div class="sales-chart__track">
                                    <div class="sales-chart__bar" style=width></div>
                                </div>
                                <span class="sales-chart__value">{format_thousands(day.sales)}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
