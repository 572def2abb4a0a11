use super::*;

const NOW: i64 = 1_700_000_000_000;

fn form(amount: &str, items: &str, customer: &str) -> SaleForm {
    SaleForm {
        amount: amount.to_owned(),
        items: items.to_owned(),
        customer: customer.to_owned(),
        payment: PaymentMethod::Cash,
    }
}

// =============================================================
// PaymentMethod
// =============================================================

#[test]
fn payment_method_default_is_card() {
    assert_eq!(PaymentMethod::default(), PaymentMethod::Card);
}

#[test]
fn payment_method_digital_label_differs_from_id() {
    assert_eq!(PaymentMethod::Digital.id(), "Digital");
    assert_eq!(PaymentMethod::Digital.label(), "Digital Wallet");
    assert_eq!(PaymentMethod::from_id("Digital"), Some(PaymentMethod::Digital));
    assert_eq!(PaymentMethod::from_id("Digital Wallet"), None);
}

// =============================================================
// SaleForm::parse
// =============================================================

#[test]
fn parse_valid_form() {
    let sale = form(" 19.90 ", "2", " Ana ").parse("s-1".to_owned(), NOW).unwrap();
    assert_eq!(sale.id, "s-1");
    assert!((sale.amount - 19.9).abs() < f64::EPSILON);
    assert_eq!(sale.items, 2);
    assert_eq!(sale.customer, "Ana");
    assert_eq!(sale.time_ms, NOW);
    assert_eq!(sale.payment, PaymentMethod::Cash);
}

#[test]
fn blank_customer_becomes_walk_in() {
    let sale = form("5", "1", "   ").parse("s-2".to_owned(), NOW).unwrap();
    assert_eq!(sale.customer, "Walk-in Customer");
}

#[test]
fn parse_rejects_bad_amounts() {
    assert_eq!(form("", "1", "").parse(String::new(), NOW), Err(SaleFormError::MissingAmount));
    assert_eq!(
        form("abc", "1", "").parse(String::new(), NOW),
        Err(SaleFormError::InvalidAmount("abc".to_owned()))
    );
    assert_eq!(
        form("-4", "1", "").parse(String::new(), NOW),
        Err(SaleFormError::InvalidAmount("-4".to_owned()))
    );
    assert_eq!(
        form("inf", "1", "").parse(String::new(), NOW),
        Err(SaleFormError::InvalidAmount("inf".to_owned()))
    );
}

#[test]
fn parse_caps_the_amount() {
    assert!(form("1000000000", "1", "").parse(String::new(), NOW).is_ok());
    assert_eq!(
        form("1e308", "1", "").parse(String::new(), NOW),
        Err(SaleFormError::InvalidAmount("1e308".to_owned()))
    );
}

#[test]
fn parse_rejects_bad_item_counts() {
    assert_eq!(form("5", "", "").parse(String::new(), NOW), Err(SaleFormError::MissingItems));
    assert_eq!(
        form("5", "1.5", "").parse(String::new(), NOW),
        Err(SaleFormError::InvalidItems("1.5".to_owned()))
    );
    assert_eq!(
        form("5", "-1", "").parse(String::new(), NOW),
        Err(SaleFormError::InvalidItems("-1".to_owned()))
    );
}

// =============================================================
// SalesState aggregates
// =============================================================

#[test]
fn seeded_sales_are_newest_first() {
    let state = SalesState::seeded(NOW);
    let customers: Vec<&str> = state.sales.iter().map(|s| s.customer.as_str()).collect();
    assert_eq!(customers, ["John Doe", "Sarah Wilson", "Mike Johnson"]);
    assert_eq!(state.sales[0].time_ms, NOW - 2 * 60 * 60 * 1000);
    assert!(!state.show_form);
}

#[test]
fn seeded_aggregates() {
    let state = SalesState::seeded(NOW);
    assert!((state.total_revenue() - 147.74).abs() < 1e-9);
    assert_eq!(state.items_sold(), 9);
    assert_eq!(state.transaction_count(), 3);
    assert!((state.average_items() - 3.0).abs() < f64::EPSILON);
    assert_eq!(state.average_items_label(), "3.0");
    assert!((state.average_order_value() - 49.246_666_666_666_67).abs() < 1e-9);
}

#[test]
fn empty_aggregates_are_zero() {
    let state = SalesState::default();
    assert!(state.total_revenue().abs() < f64::EPSILON);
    assert!(state.average_order_value().abs() < f64::EPSILON);
    assert_eq!(state.average_items_label(), "0");
}

// =============================================================
// SalesState form flow
// =============================================================

#[test]
fn submit_prepends_and_resets_form() {
    let mut state = SalesState::seeded(NOW);
    state.toggle_form();
    state.form = form("10", "4", "");

    let sale = state.submit("new".to_owned(), NOW).unwrap();
    assert_eq!(sale.customer, "Walk-in Customer");

    assert_eq!(state.sales.len(), 4);
    assert_eq!(state.sales[0].id, "new");
    assert_eq!(state.form, SaleForm::default());
    assert!(!state.show_form);
    assert_eq!(state.items_sold(), 13);
}

#[test]
fn totals_survive_maximal_sales() {
    let mut state = SalesState::seeded(NOW);
    for id in ["big-1", "big-2"] {
        state.form = form("1000000000", "4294967295", "");
        assert!(state.submit(id.to_owned(), NOW).is_ok());
    }

    assert_eq!(state.items_sold(), 2 * u64::from(u32::MAX) + 9);
    assert!(state.total_revenue().is_finite());
    assert!(state.average_items() > 1.0e9);
}

#[test]
fn failed_submit_keeps_form_open_with_error() {
    let mut state = SalesState::seeded(NOW);
    state.toggle_form();
    state.form = form("ten", "1", "");

    assert!(state.submit("x".to_owned(), NOW).is_err());
    assert_eq!(state.sales.len(), 3);
    assert!(state.show_form);
    assert_eq!(state.form_error.as_deref(), Some("invalid sale amount: \"ten\""));
    assert_eq!(state.form.amount, "ten");

    state.cancel_form();
    assert!(!state.show_form);
    assert_eq!(state.form_error, None);
}
