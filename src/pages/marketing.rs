//! Marketing tips page with a detail dialog per tip.

use leptos::prelude::*;

use crate::components::badge::Badge;
use crate::state::marketing::{MARKETING_TIPS, MarketingState, MarketingTip};

#[component]
pub fn MarketingPage() -> impl IntoView {
    let state = RwSignal::new(MarketingState::default());
    let on_close = Callback::new(move |()| state.update(MarketingState::close));

    view! {
        <section class="page">
            <header class="page__header">
                <h2 class="page__title">"Local Marketing Tips"</h2>
                <p class="page__subtitle">"Actionable marketing strategies to grow your local business"</p>
            </header>

            <div class="card-grid card-grid--three">
                {MARKETING_TIPS
                    .iter()
                    .map(|tip| {
                        view! {
                            <div
                                class="card tip-card"
                                role="button"
                                tabindex="0"
                                on:click=move |_| state.update(|s| s.open(tip.id))
                            >
                                <div class="tip-card__header">
                                    <span class="tip-card__icon" aria-hidden="true">{tip.icon}</span>
                                    <span class=format!("badge {}", tip.platform.modifier())>{tip.platform.label()}</span>
                                </div>
                                <h3 class="card__title">{tip.title}</h3>
                                <p class="card__subtitle">{tip.description}</p>
                                <dl class="tip-card__facts">
                                    <div>
                                        <dt>"Difficulty:"</dt>
                                        <dd>{tip.difficulty.label()}</dd>
                                    </div>
                                    <div>
                                        <dt>"Time:"</dt>
                                        <dd>{tip.time_to_implement}</dd>
                                    </div>
                                    <div>
                                        <dt>"Impact:"</dt>
                                        <dd>
                                            <Badge variant=tip.impact.variant()>{tip.impact.label()}</Badge>
                                        </dd>
                                    </div>
                                </dl>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            {move || state.get().selected().map(|tip| view! { <TipDialog tip=tip on_close=on_close/> })}
        </section>
    }
}

/// Full tip with numbered steps and tools. Backdrop click, the close button,
/// and Escape all close it.
#[component]
fn TipDialog(tip: &'static MarketingTip, on_close: Callback<()>) -> impl IntoView {
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div
                class="dialog dialog--tip"
                role="dialog"
                aria-modal="true"
                tabindex="0"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                <header class="dialog__header">
                    <span class="tip-card__icon" aria-hidden="true">{tip.icon}</span>
                    <div class="dialog__heading">
                        <h2 class="dialog__title">{tip.title}</h2>
                        <p class="dialog__subtitle">{tip.description}</p>
                    </div>
                    <button class="btn btn--ghost dialog__close" aria-label="Close" on:click=move |_| on_close.run(())>
                        "\u{00D7}"
                    </button>
                </header>

                <div class="dialog__badges">
                    <span class=format!("badge {}", tip.platform.modifier())>{tip.platform.label()}</span>
                    <Badge>{tip.difficulty.label()}</Badge>
                    <Badge>{tip.time_to_implement}</Badge>
                    <Badge variant=tip.impact.variant()>{format!("{} Impact", tip.impact.label())}</Badge>
                </div>

                <h4 class="dialog__section">"Implementation Steps:"</h4>
                <ol class="tip-steps">
                    {tip
                        .steps
                        .iter()
                        .enumerate()
                        .map(|(index, step)| {
                            view! {
                                <li class="tip-steps__item">
                                    <span class="tip-steps__number">{index + 1}</span>
                                    <span>{*step}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>

                <h4 class="dialog__section">"Tools Needed:"</h4>
                <div class="dialog__badges">
                    {tip.tools.iter().map(|tool| view! { <Badge variant="secondary">{*tool}</Badge> }).collect_view()}
                </div>
            </div>
        </div>
    }
}
