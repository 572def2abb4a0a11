//! Ready-to-use customer offer templates and copy feedback state.

#[cfg(test)]
#[path = "offers_test.rs"]
mod offers_test;

/// How long a card shows "Copied!" after a successful copy.
pub const COPIED_RESET_MS: u64 = 2000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OfferKind {
    Percentage,
    Fixed,
    Bogo,
    Loyalty,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OfferTemplate {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub discount: &'static str,
    pub kind: OfferKind,
    pub category: &'static str,
    pub icon: &'static str,
    /// Message text copied to the clipboard.
    pub template: &'static str,
}

pub const OFFER_TEMPLATES: [OfferTemplate; 4] = [
    OfferTemplate {
        id: "1",
        title: "New Customer Welcome",
        description: "First-time buyer incentive",
        discount: "20% OFF",
        kind: OfferKind::Percentage,
        category: "New Customer",
        icon: "\u{1F465}",
        template: "Welcome to [Store Name]! Get 20% off your first purchase with code WELCOME20. Valid until [Date].",
    },
    OfferTemplate {
        id: "2",
        title: "Weekend Flash Sale",
        description: "Limited time weekend offer",
        discount: "$10 OFF",
        kind: OfferKind::Fixed,
        category: "Flash Sale",
        icon: "\u{26A1}",
        template: "\u{26A1} WEEKEND FLASH SALE! Get $10 off orders over $50. Use code WEEKEND10. Hurry, ends Sunday!",
    },
    OfferTemplate {
        id: "3",
        title: "Buy One Get One",
        description: "Popular BOGO promotion",
        discount: "BOGO 50%",
        kind: OfferKind::Bogo,
        category: "BOGO",
        icon: "\u{1F381}",
        template: "\u{1F381} Buy One, Get One 50% Off! Mix & match your favorites. No code needed. Limited time only!",
    },
    OfferTemplate {
        id: "4",
        title: "Loyalty Reward",
        description: "Returning customer appreciation",
        discount: "15% OFF",
        kind: OfferKind::Loyalty,
        category: "Loyalty",
        icon: "%",
        template: "Thank you for being a valued customer! Enjoy 15% off your next purchase with code LOYAL15.",
    },
];

#[must_use]
pub fn offer_by_id(id: &str) -> Option<&'static OfferTemplate> {
    OFFER_TEMPLATES.iter().find(|o| o.id == id)
}

/// Which card, if any, currently shows the "Copied!" confirmation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OffersState {
    pub copied_id: Option<&'static str>,
}

impl OffersState {
    pub fn mark_copied(&mut self, id: &'static str) {
        self.copied_id = Some(id);
    }

    /// Clear the confirmation set for `id`. A later copy of another card is
    /// left alone.
    pub fn clear_copied(&mut self, id: &str) {
        if self.copied_id == Some(id) {
            self.copied_id = None;
        }
    }

    #[must_use]
    pub fn copy_label(&self, id: &str) -> &'static str {
        if self.copied_id == Some(id) { "Copied!" } else { "Copy" }
    }
}
