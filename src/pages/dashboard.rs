//! Overview page: headline stats, weekly chart, and quick actions.

use leptos::prelude::*;

use crate::components::dashboard_stats::DashboardStats;
use crate::components::sales_chart::SalesChart;
use crate::state::dashboard::QUICK_ACTIONS;
use crate::state::ui::UiState;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <section class="page">
            <header class="page__header">
                <h1 class="page__title">"Dashboard"</h1>
                <p class="page__subtitle">"Overview of your business performance and key metrics"</p>
            </header>

            <DashboardStats/>

            <div class="dashboard__grid">
                <SalesChart/>
                <div class="quick-actions">
                    <h3 class="quick-actions__title">"Quick Actions"</h3>
                    <div class="quick-actions__grid">
                        {QUICK_ACTIONS
                            .iter()
                            .map(|action| {
                                let target = action.target;
                                view! {
                                    <button class="quick-action" on:click=move |_| ui.update(|u| u.open(target))>
                                        <h4 class="quick-action__title">{action.title}</h4>
                                        <p class="quick-action__subtitle">{action.subtitle}</p>
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
