//! Daily sales tracker: the in-memory sales list, its aggregates, and the
//! add-sale form.

#[cfg(test)]
#[path = "sales_test.rs"]
mod sales_test;

/// Customer name used when the form leaves it blank.
pub const WALK_IN_CUSTOMER: &str = "Walk-in Customer";

/// Average order value the shop aims for.
pub const ORDER_VALUE_TARGET: f64 = 50.0;

/// Largest amount a single sale may record.
pub const MAX_SALE_AMOUNT: f64 = 1_000_000_000.0;

const HOUR_MS: i64 = 60 * 60 * 1000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PaymentMethod {
    #[default]
    Card,
    Cash,
    Digital,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [PaymentMethod::Card, PaymentMethod::Cash, PaymentMethod::Digital];

    /// Form value.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Card => "Card",
            Self::Cash => "Cash",
            Self::Digital => "Digital",
        }
    }

    /// Option text in the payment picker.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Card => "Card",
            Self::Cash => "Cash",
            Self::Digital => "Digital Wallet",
        }
    }

    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.id() == id)
    }
}

/// A recorded sale.
#[derive(Clone, Debug, PartialEq)]
pub struct Sale {
    pub id: String,
    pub amount: f64,
    pub items: u32,
    pub customer: String,
    /// Epoch milliseconds.
    pub time_ms: i64,
    pub payment: PaymentMethod,
}

/// Error returned by [`SaleForm::parse`].
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum SaleFormError {
    #[error("sale amount is required")]
    MissingAmount,
    #[error("invalid sale amount: {0:?}")]
    InvalidAmount(String),
    #[error("number of items is required")]
    MissingItems,
    #[error("invalid number of items: {0:?}")]
    InvalidItems(String),
}

/// Raw add-sale form inputs, as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SaleForm {
    pub amount: String,
    pub items: String,
    pub customer: String,
    pub payment: PaymentMethod,
}

impl SaleForm {
    /// Validate the inputs into a [`Sale`].
    ///
    /// # Errors
    ///
    /// Returns [`SaleFormError`] when the amount is missing or not a number
    /// between zero and [`MAX_SALE_AMOUNT`], or the item count is missing or
    /// not a whole number.
    pub fn parse(&self, id: String, now_ms: i64) -> Result<Sale, SaleFormError> {
        let amount_raw = self.amount.trim();
        if amount_raw.is_empty() {
            return Err(SaleFormError::MissingAmount);
        }
        let amount = amount_raw
            .parse::<f64>()
            .ok()
            .filter(|a| (0.0..=MAX_SALE_AMOUNT).contains(a))
            .ok_or_else(|| SaleFormError::InvalidAmount(amount_raw.to_owned()))?;

        let items_raw = self.items.trim();
        if items_raw.is_empty() {
            return Err(SaleFormError::MissingItems);
        }
        let items = items_raw
            .parse::<u32>()
            .map_err(|_| SaleFormError::InvalidItems(items_raw.to_owned()))?;

        let customer = match self.customer.trim() {
            "" => WALK_IN_CUSTOMER.to_owned(),
            name => name.to_owned(),
        };

        Ok(Sale {
            id,
            amount,
            items,
            customer,
            time_ms: now_ms,
            payment: self.payment,
        })
    }
}

/// Sales tracker state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SalesState {
    /// Newest first.
    pub sales: Vec<Sale>,
    pub form: SaleForm,
    pub show_form: bool,
    pub form_error: Option<String>,
}

impl SalesState {
    /// The three sample sales, timestamped relative to `now_ms`.
    #[must_use]
    pub fn seeded(now_ms: i64) -> Self {
        let sale = |id: &str, amount, items, customer: &str, hours_ago: i64, payment| Sale {
            id: id.to_owned(),
            amount,
            items,
            customer: customer.to_owned(),
            time_ms: now_ms - hours_ago * HOUR_MS,
            payment,
        };
        Self {
            sales: vec![
                sale("1", 45.99, 3, "John Doe", 2, PaymentMethod::Card),
                sale("2", 23.50, 1, "Sarah Wilson", 4, PaymentMethod::Cash),
                sale("3", 78.25, 5, "Mike Johnson", 6, PaymentMethod::Card),
            ],
            ..Self::default()
        }
    }

    #[must_use]
    pub fn total_revenue(&self) -> f64 {
        self.sales.iter().map(|s| s.amount).sum()
    }

    #[must_use]
    pub fn items_sold(&self) -> u64 {
        self.sales.iter().map(|s| u64::from(s.items)).sum()
    }

    #[must_use]
    pub fn transaction_count(&self) -> usize {
        self.sales.len()
    }

    /// Mean items per sale, `0.0` with no sales.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn average_items(&self) -> f64 {
        if self.sales.is_empty() {
            return 0.0;
        }
        self.items_sold() as f64 / self.sales.len() as f64
    }

    /// Caption text: one decimal, or a bare `0` with no sales.
    #[must_use]
    pub fn average_items_label(&self) -> String {
        if self.sales.is_empty() {
            "0".to_owned()
        } else {
            format!("{:.1}", self.average_items())
        }
    }

    /// Mean sale amount, `0.0` with no sales.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn average_order_value(&self) -> f64 {
        if self.sales.is_empty() {
            return 0.0;
        }
        self.total_revenue() / self.sales.len() as f64
    }

    pub fn toggle_form(&mut self) {
        self.show_form = !self.show_form;
        self.form_error = None;
    }

    pub fn cancel_form(&mut self) {
        self.show_form = false;
        self.form_error = None;
    }

    /// Validate the form and prepend the new sale. On success the form is
    /// reset and hidden; on failure it stays open with `form_error` set.
    ///
    /// # Errors
    ///
    /// Returns the [`SaleFormError`] from [`SaleForm::parse`].
    pub fn submit(&mut self, id: String, now_ms: i64) -> Result<&Sale, SaleFormError> {
        match self.form.parse(id, now_ms) {
            Ok(sale) => {
                self.sales.insert(0, sale);
                self.form = SaleForm::default();
                self.show_form = false;
                self.form_error = None;
                Ok(&self.sales[0])
            }
            Err(err) => {
                self.form_error = Some(err.to_string());
                Err(err)
            }
        }
    }
}
