//! Inventory page: stock summary, restock alerts, and per-item adjustment.

use leptos::prelude::*;

use crate::components::badge::Badge;
use crate::components::summary_card::SummaryCard;
use crate::state::inventory::{InventoryItem, InventoryState};
use crate::util::clock;
use crate::util::format::format_currency;

#[component]
pub fn InventoryPage() -> impl IntoView {
    let state = RwSignal::new(InventoryState::seeded(clock::now_ms()));

    let adjust = move |id: &str, delta: i32| {
        state.update(|s| {
            let was_low = s.items.iter().find(|i| i.id == id).is_some_and(InventoryItem::is_low);
            if let Some(item) = s.adjust_stock(id, delta) {
                if item.is_low() && !was_low {
                    log::warn!("{} is low on stock: {} left (min {})", item.name, item.current_stock, item.min_stock);
                }
            }
        });
    };
    let reorder = move |id: &str| {
        state.with_untracked(|s| {
            if let Some(item) = s.items.iter().find(|i| i.id == id) {
                log::info!("reorder requested: {} from {}", item.name, item.supplier);
            }
        });
    };

    view! {
        <section class="page">
            <header class="page__header">
                <h2 class="page__title">"Inventory Management"</h2>
                <p class="page__subtitle">"Track stock levels and get restocking alerts"</p>
            </header>

            <div class="summary-grid">
                <SummaryCard title="Total Items" icon="\u{1F4E6}">
                    <div class="summary-card__value">{move || state.with(|s| s.items.len())}</div>
                    <p class="summary-card__caption">"Active products"</p>
                </SummaryCard>
                <SummaryCard title="Low Stock Alerts" icon="\u{26A0}" tone="summary-card--alert">
                    <div class="summary-card__value">{move || state.with(|s| s.low_stock().len())}</div>
                    <p class="summary-card__caption">"Need restocking"</p>
                </SummaryCard>
                <SummaryCard title="Inventory Value" icon="\u{1F6D2}">
                    <div class="summary-card__value">{move || format_currency(state.with(InventoryState::total_value))}</div>
                    <p class="summary-card__caption">"Current stock value"</p>
                </SummaryCard>
            </div>

            <Show when=move || state.with(|s| !s.low_stock().is_empty())>
                <div class="card card--alert">
                    <h3 class="card__title card__title--alert">"\u{26A0} Restocking Required"</h3>
                    <ul class="restock-list">
                        {move || {
                            state.with(|s| {
                                s.low_stock()
                                    .into_iter()
                                    .map(|item| {
                                        let id = item.id.clone();
                                        view! {
                                            <li class="restock-list__row">
                                                <div>
                                                    <p class="restock-list__name">{item.name.clone()}</p>
                                                    <p class="restock-list__detail">
                                                        {format!("Only {} left (Min: {})", item.current_stock, item.min_stock)}
                                                    </p>
                                                </div>
                                                <button class="btn btn--destructive" on:click=move |_| reorder(&id)>
                                                    "Reorder"
                                                </button>
                                            </li>
                                        }
                                    })
                                    .collect_view()
                            })
                        }}
                    </ul>
                </div>
            </Show>

            <div class="card-grid card-grid--two">
                {move || {
                    state
                        .get()
                        .items
                        .into_iter()
                        .map(|item| {
                            let status = item.status();
                            let at_zero = item.current_stock == 0;
                            let InventoryItem { id, name, category, current_stock, min_stock, price, supplier, .. } = item;
                            let (id_down, id_up) = (id.clone(), id.clone());
                            view! {
                                <div class="card inventory-card">
                                    <div class="inventory-card__header">
                                        <div>
                                            <h3 class="card__title">{name}</h3>
                                            <p class="card__subtitle">{category}</p>
                                        </div>
                                        <Badge variant=status.variant()>{status.label()}</Badge>
                                    </div>
                                    <dl class="inventory-card__facts">
                                        <div>
                                            <dt>"Current Stock"</dt>
                                            <dd>{format!("{current_stock} units")}</dd>
                                        </div>
                                        <div>
                                            <dt>"Unit Price"</dt>
                                            <dd>{format_currency(price)}</dd>
                                        </div>
                                        <div>
                                            <dt>"Min Stock"</dt>
                                            <dd>{format!("{min_stock} units")}</dd>
                                        </div>
                                        <div>
                                            <dt>"Supplier"</dt>
                                            <dd>{supplier}</dd>
                                        </div>
                                    </dl>
                                    <div class="inventory-card__actions">
                                        <div class="stepper">
                                            <button
                                                class="btn btn--outline"
                                                aria-label="Remove one"
                                                disabled=at_zero
                                                on:click=move |_| adjust(&id_down, -1)
                                            >
                                                "\u{2212}"
                                            </button>
                                            <span class="stepper__value">{current_stock}</span>
                                            <button
                                                class="btn btn--outline"
                                                aria-label="Add one"
                                                on:click=move |_| adjust(&id_up, 1)
                                            >
                                                "+"
                                            </button>
                                        </div>
                                        <button class="btn btn--outline" on:click=move |_| reorder(&id)>
                                            "Reorder"
                                        </button>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </section>
    }
}
