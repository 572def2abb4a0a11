//! App shell state: the mounted view and the mobile navigation menu.
//!
//! DESIGN
//! ======
//! Views are addressed by string identifiers so navigation items and quick
//! actions can name them directly. An identifier that matches no [`Tab`]
//! leaves nothing mounted rather than falling back to a default view.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Shell state: which view is mounted and whether the mobile menu is open.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiState {
    /// `None` when the last selected identifier was not a known view.
    pub active_tab: Option<Tab>,
    pub mobile_menu_open: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            active_tab: Some(Tab::Dashboard),
            mobile_menu_open: false,
        }
    }
}

impl UiState {
    /// Select a view by its raw identifier. Unknown identifiers clear the view.
    pub fn select(&mut self, id: &str) {
        self.active_tab = Tab::from_id(id);
        self.mobile_menu_open = false;
    }

    pub fn open(&mut self, tab: Tab) {
        self.active_tab = Some(tab);
        self.mobile_menu_open = false;
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    #[must_use]
    pub fn is_active(&self, tab: Tab) -> bool {
        self.active_tab == Some(tab)
    }
}

/// The five dashboard views.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tab {
    Dashboard,
    Offers,
    Sales,
    Inventory,
    Marketing,
}

impl Tab {
    /// Navigation order.
    pub const ALL: [Tab; 5] = [Tab::Dashboard, Tab::Offers, Tab::Sales, Tab::Inventory, Tab::Marketing];

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Offers => "offers",
            Self::Sales => "sales",
            Self::Inventory => "inventory",
            Self::Marketing => "marketing",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Offers => "Offers",
            Self::Sales => "Sales",
            Self::Inventory => "Inventory",
            Self::Marketing => "Marketing",
        }
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Dashboard => "\u{25A6}",
            Self::Offers => "\u{1F381}",
            Self::Sales => "\u{1F4C8}",
            Self::Inventory => "\u{1F4E6}",
            Self::Marketing => "\u{1F4E3}",
        }
    }

    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.id() == id)
    }
}
