use super::*;

// =============================================================
// format_currency
// =============================================================

#[test]
fn currency_has_two_decimals_and_grouping() {
    assert_eq!(format_currency(0.0), "$0.00");
    assert_eq!(format_currency(4.5), "$4.50");
    assert_eq!(format_currency(147.74), "$147.74");
    assert_eq!(format_currency(12_456.0), "$12,456.00");
    assert_eq!(format_currency(1_234_567.891), "$1,234,567.89");
}

#[test]
fn currency_handles_negative_and_non_finite() {
    assert_eq!(format_currency(-5.0), "-$5.00");
    assert_eq!(format_currency(-0.001), "$0.00");
    assert_eq!(format_currency(f64::NAN), "$0.00");
}

// =============================================================
// format_time
// =============================================================

#[test]
fn time_uses_twelve_hour_clock() {
    assert_eq!(format_time(0, 0), "12:00 AM");
    assert_eq!(format_time(14 * 3_600_000 + 5 * 60_000, 0), "2:05 PM");
    assert_eq!(format_time(12 * 3_600_000, 0), "12:00 PM");
    assert_eq!(format_time(23 * 3_600_000 + 59 * 60_000, 0), "11:59 PM");
}

#[test]
fn time_applies_utc_offset() {
    assert_eq!(format_time(0, -300), "7:00 PM");
    assert_eq!(format_time(0, 330), "5:30 AM");
}

// =============================================================
// Chart and stat captions
// =============================================================

#[test]
fn thousands_label_has_one_decimal() {
    assert_eq!(format_thousands(4200), "$4.2k");
    assert_eq!(format_thousands(6200), "$6.2k");
    assert_eq!(format_thousands(940), "$0.9k");
}

#[test]
fn change_caption_drops_sign() {
    assert_eq!(format_change(12.5), "12.5% from last month");
    assert_eq!(format_change(-3.1), "3.1% from last month");
}
