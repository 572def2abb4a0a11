//! Inventory manager: stock levels, restock alerts, and stock value.

#[cfg(test)]
#[path = "inventory_test.rs"]
mod inventory_test;

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// Stock level classification shown as a badge on each item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StockStatus {
    Low,
    Normal,
    High,
}

impl StockStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low Stock",
            Self::Normal => "Normal",
            Self::High => "Well Stocked",
        }
    }

    /// Badge variant.
    #[must_use]
    pub fn variant(self) -> &'static str {
        match self {
            Self::Low => "destructive",
            Self::Normal => "outline",
            Self::High => "secondary",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct InventoryItem {
    pub id: String,
    pub name: String,
    pub category: String,
    pub current_stock: u32,
    pub min_stock: u32,
    pub max_stock: u32,
    pub price: f64,
    /// Epoch milliseconds.
    pub last_restocked_ms: i64,
    pub supplier: String,
}

impl InventoryItem {
    /// `Low` at or below the minimum, `High` at or above 80% of the maximum.
    #[must_use]
    pub fn status(&self) -> StockStatus {
        if self.current_stock <= self.min_stock {
            StockStatus::Low
        } else if f64::from(self.current_stock) >= f64::from(self.max_stock) * 0.8 {
            StockStatus::High
        } else {
            StockStatus::Normal
        }
    }

    #[must_use]
    pub fn is_low(&self) -> bool {
        self.status() == StockStatus::Low
    }

    /// Value of the units on hand.
    #[must_use]
    pub fn stock_value(&self) -> f64 {
        f64::from(self.current_stock) * self.price
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct InventoryState {
    pub items: Vec<InventoryItem>,
}

impl InventoryState {
    /// The four sample products, restock dates relative to `now_ms`.
    #[must_use]
    pub fn seeded(now_ms: i64) -> Self {
        let item = |id: &str, name: &str, category: &str, stock: [u32; 3], price, days_ago: i64, supplier: &str| {
            InventoryItem {
                id: id.to_owned(),
                name: name.to_owned(),
                category: category.to_owned(),
                current_stock: stock[0],
                min_stock: stock[1],
                max_stock: stock[2],
                price,
                last_restocked_ms: now_ms - days_ago * DAY_MS,
                supplier: supplier.to_owned(),
            }
        };
        Self {
            items: vec![
                item("1", "Coffee Beans - Premium Blend", "Beverages", [8, 10, 50], 24.99, 5, "Local Coffee Co."),
                item("2", "Organic Milk", "Dairy", [15, 12, 30], 4.50, 2, "Fresh Farms"),
                item("3", "Croissants - Pack of 6", "Bakery", [3, 5, 20], 8.99, 1, "Morning Bakery"),
                item("4", "Energy Bars - Mixed Pack", "Snacks", [25, 15, 40], 12.99, 7, "Healthy Snacks Ltd"),
            ],
        }
    }

    #[must_use]
    pub fn low_stock(&self) -> Vec<&InventoryItem> {
        self.items.iter().filter(|i| i.is_low()).collect()
    }

    #[must_use]
    pub fn total_value(&self) -> f64 {
        self.items.iter().map(InventoryItem::stock_value).sum()
    }

    /// Add `delta` units to an item, clamping at zero.
    ///
    /// Returns the updated item, or `None` for an unknown id.
    pub fn adjust_stock(&mut self, id: &str, delta: i32) -> Option<&InventoryItem> {
        let item = self.items.iter_mut().find(|i| i.id == id)?;
        item.current_stock = item.current_stock.saturating_add_signed(delta);
        Some(item)
    }
}
