//! Offer templates page with copy-to-clipboard and share.

use leptos::prelude::*;

use crate::components::badge::Badge;
use crate::state::offers::{OFFER_TEMPLATES, OfferTemplate, OffersState};
use crate::util::clipboard;

#[component]
pub fn OffersPage() -> impl IntoView {
    let state = RwSignal::new(OffersState::default());

    view! {
        <section class="page">
            <header class="page__header">
                <h2 class="page__title">"Customer Offer Templates"</h2>
                <p class="page__subtitle">"Ready-to-use promotional templates for your business"</p>
            </header>
            <div class="card-grid card-grid--two">
                {OFFER_TEMPLATES.iter().map(|offer| view! { <OfferCard offer=offer state=state/> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn OfferCard(offer: &'static OfferTemplate, state: RwSignal<OffersState>) -> impl IntoView {
    let on_copy = move |_| copy_offer(offer, state);
    let on_share = move |_| {
        if !clipboard::share(offer.title, offer.template) {
            log::debug!("share sheet unavailable for offer {}", offer.id);
        }
    };

    view! {
        <div class="card offer-card">
            <div class="offer-card__header">
                <span class="offer-card__icon" aria-hidden="true">{offer.icon}</span>
                <div class="offer-card__heading">
                    <h3 class="card__title">{offer.title}</h3>
                    <p class="card__subtitle">{offer.description}</p>
                </div>
                <Badge variant="secondary">{offer.discount}</Badge>
            </div>
            <p class="offer-card__template">{offer.template}</p>
            <div class="offer-card__actions">
                <button class="btn btn--outline offer-card__copy" on:click=on_copy>
                    {move || state.get().copy_label(offer.id)}
                </button>
                <button class="btn btn--outline" on:click=on_share title="Share" aria-label="Share">
                    "\u{2934}"
                </button>
            </div>
        </div>
    }
}

/// Copy the template text, then show "Copied!" on this card for
/// [`COPIED_RESET_MS`](crate::state::offers::COPIED_RESET_MS).
fn copy_offer(offer: &'static OfferTemplate, state: RwSignal<OffersState>) {
    #[cfg(feature = "csr")]
    {
        use crate::state::offers::COPIED_RESET_MS;

        leptos::task::spawn_local(async move {
            match clipboard::write_text(offer.template).await {
                Ok(()) => {
                    state.update(|s| s.mark_copied(offer.id));
                    gloo_timers::future::sleep(std::time::Duration::from_millis(COPIED_RESET_MS)).await;
                    // The page may have been unmounted while waiting.
                    if state.try_update(|s| s.clear_copied(offer.id)).is_none() {
                        log::debug!("offers page closed before copy reset");
                    }
                }
                Err(err) => log::error!("Failed to copy text: {err}"),
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (offer, state);
    }
}
