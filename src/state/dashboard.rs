//! Overview data: headline stat cards, weekly sales, and quick actions.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use crate::state::ui::Tab;

/// Direction of a month-over-month change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

/// One headline metric.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: &'static str,
    pub change_percent: f64,
    pub icon: &'static str,
}

impl StatCard {
    #[must_use]
    pub fn trend(&self) -> Trend {
        if self.change_percent < 0.0 { Trend::Down } else { Trend::Up }
    }
}

pub const STAT_CARDS: [StatCard; 4] = [
    StatCard {
        title: "Total Revenue",
        value: "$12,456",
        change_percent: 12.5,
        icon: "$",
    },
    StatCard {
        title: "Active Customers",
        value: "324",
        change_percent: 8.2,
        icon: "\u{1F465}",
    },
    StatCard {
        title: "Orders Today",
        value: "45",
        change_percent: -3.1,
        icon: "\u{1F6CD}",
    },
    StatCard {
        title: "Avg. Order Value",
        value: "$87.50",
        change_percent: 15.3,
        icon: "\u{2197}",
    },
];

/// Sales total for one day of the week.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DaySales {
    pub day: &'static str,
    pub sales: u32,
}

pub const WEEKLY_SALES: [DaySales; 7] = [
    DaySales { day: "Mon", sales: 4200 },
    DaySales { day: "Tue", sales: 3800 },
    DaySales { day: "Wed", sales: 5100 },
    DaySales { day: "Thu", sales: 4600 },
    DaySales { day: "Fri", sales: 6200 },
    DaySales { day: "Sat", sales: 5800 },
    DaySales { day: "Sun", sales: 4900 },
];

#[must_use]
pub fn max_sales(days: &[DaySales]) -> u32 {
    days.iter().map(|d| d.sales).max().unwrap_or(0)
}

/// Bar width in percent of the best day. Zero when every day is zero.
#[must_use]
pub fn bar_width_percent(sales: u32, max: u32) -> f64 {
    if max == 0 {
        return 0.0;
    }
    f64::from(sales) / f64::from(max) * 100.0
}

/// Shortcut button on the overview that jumps to another view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuickAction {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub target: Tab,
}

pub const QUICK_ACTIONS: [QuickAction; 4] = [
    QuickAction {
        title: "Add Sale",
        subtitle: "Record new transaction",
        target: Tab::Sales,
    },
    QuickAction {
        title: "Check Inventory",
        subtitle: "View stock levels",
        target: Tab::Inventory,
    },
    QuickAction {
        title: "Create Offer",
        subtitle: "Generate promotions",
        target: Tab::Offers,
    },
    QuickAction {
        title: "Marketing Tips",
        subtitle: "Grow your business",
        target: Tab::Marketing,
    },
];
