//! Daily sales tracker page.

use leptos::prelude::*;

use crate::components::badge::Badge;
use crate::components::summary_card::SummaryCard;
use crate::state::sales::{ORDER_VALUE_TARGET, PaymentMethod, SalesState, WALK_IN_CUSTOMER};
use crate::util::clock;
use crate::util::format::{format_currency, format_time};

#[component]
pub fn SalesPage() -> impl IntoView {
    let state = RwSignal::new(SalesState::seeded(clock::now_ms()));
    let utc_offset = clock::utc_offset_minutes();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let id = uuid::Uuid::new_v4().to_string();
        let now = clock::now_ms();
        state.update(|s| match s.submit(id, now) {
            Ok(sale) => log::info!("recorded sale {} ({} items)", format_currency(sale.amount), sale.items),
            Err(err) => log::warn!("sale not recorded: {err}"),
        });
    };

    view! {
        <section class="page">
            <header class="page__header page__header--split">
                <div>
                    <h2 class="page__title">"Daily Sales Tracker"</h2>
                    <p class="page__subtitle">"Track and manage your daily sales"</p>
                </div>
                <button class="btn btn--primary" on:click=move |_| state.update(SalesState::toggle_form)>
                    "+ Add Sale"
                </button>
            </header>

            <div class="summary-grid">
                <SummaryCard title="Todays Revenue" icon="$">
                    <div class="summary-card__value">{move || format_currency(state.get().total_revenue())}</div>
                    <p class="summary-card__caption">
                        {move || format!("{} transactions", state.get().transaction_count())}
                    </p>
                </SummaryCard>
                <SummaryCard title="Items Sold" icon="\u{1F4E6}">
                    <div class="summary-card__value">{move || state.get().items_sold()}</div>
                    <p class="summary-card__caption">
                        {move || format!("Avg: {} per sale", state.get().average_items_label())}
                    </p>
                </SummaryCard>
                <SummaryCard title="Avg Order Value" icon="\u{1F4C5}">
                    <div class="summary-card__value">{move || format_currency(state.get().average_order_value())}</div>
                    <p class="summary-card__caption">{format!("Target: {}", format_currency(ORDER_VALUE_TARGET))}</p>
                </SummaryCard>
            </div>

            <Show when=move || state.get().show_form>
                <div class="card">
                    <h3 class="card__title">"Add New Sale"</h3>
                    <form class="form" on:submit=on_submit>
                        <div class="form__grid">
                            <label class="form__field">
                                <span class="form__label">"Sale Amount ($)"</span>
                                <input
                                    class="input"
                                    type="number"
                                    step="0.01"
                                    placeholder="0.00"
                                    required
                                    prop:value=move || state.get().form.amount
                                    on:input=move |ev| state.update(|s| s.form.amount = event_target_value(&ev))
                                />
                            </label>
                            <label class="form__field">
                                <span class="form__label">"Number of Items"</span>
                                <input
                                    class="input"
                                    type="number"
                                    placeholder="1"
                                    required
                                    prop:value=move || state.get().form.items
                                    on:input=move |ev| state.update(|s| s.form.items = event_target_value(&ev))
                                />
                            </label>
                            <label class="form__field">
                                <span class="form__label">"Customer Name (Optional)"</span>
                                <input
                                    class="input"
                                    type="text"
                                    placeholder=WALK_IN_CUSTOMER
                                    prop:value=move || state.get().form.customer
                                    on:input=move |ev| state.update(|s| s.form.customer = event_target_value(&ev))
                                />
                            </label>
                            <label class="form__field">
                                <span class="form__label">"Payment Method"</span>
                                <select
                                    class="input"
                                    prop:value=move || state.get().form.payment.id()
                                    on:change=move |ev| {
                                        if let Some(method) = PaymentMethod::from_id(&event_target_value(&ev)) {
                                            state.update(|s| s.form.payment = method);
                                        }
                                    }
                                >
                                    {PaymentMethod::ALL
                                        .into_iter()
                                        .map(|method| view! { <option value=method.id()>{method.label()}</option> })
                                        .collect_view()}
                                </select>
                            </label>
                        </div>
                        <Show when=move || state.get().form_error.is_some()>
                            <p class="form__error" role="alert">{move || state.get().form_error.unwrap_or_default()}</p>
                        </Show>
                        <div class="form__actions">
                            <button class="btn btn--primary" type="submit">"Add Sale"</button>
                            <button
                                class="btn btn--outline"
                                type="button"
                                on:click=move |_| state.update(SalesState::cancel_form)
                            >
                                "Cancel"
                            </button>
                        </div>
                    </form>
                </div>
            </Show>

            <div class="card">
                <h3 class="card__title">"Recent Sales"</h3>
                <ul class="sales-list">
                    {move || {
                        state
                            .get()
                            .sales
                            .into_iter()
                            .map(|sale| {
                                view! {
                                    <li class="sales-list__row">
                                        <span class="sales-list__icon" aria-hidden="true">"\u{1F552}"</span>
                                        <div class="sales-list__who">
                                            <p class="sales-list__customer">{sale.customer}</p>
                                            <p class="sales-list__meta">
                                                {format!(
                                                    "{} items \u{2022} {}",
                                                    sale.items,
                                                    format_time(sale.time_ms, utc_offset),
                                                )}
                                            </p>
                                        </div>
                                        <div class="sales-list__amount">
                                            <p class="sales-list__total">{format_currency(sale.amount)}</p>
                                            <Badge>{sale.payment.id()}</Badge>
                                        </div>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </div>
        </section>
    }
}
