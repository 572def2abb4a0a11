//! Display formatting for money, times, and chart labels.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Format a dollar amount as `$1,234.56` (`-$5.00` for negatives).
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return "$0.00".to_owned();
    }
    let cents = (amount.abs() * 100.0).round() as u64;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}${}.{:02}", group_thousands(cents / 100), cents % 100)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format an epoch-millisecond timestamp as a 12-hour wall clock time
/// (`2:05 PM`), shifted by `utc_offset_minutes`.
#[must_use]
pub fn format_time(epoch_ms: i64, utc_offset_minutes: i32) -> String {
    let local_minutes = epoch_ms.div_euclid(60_000) + i64::from(utc_offset_minutes);
    let minute_of_day = local_minutes.rem_euclid(24 * 60);
    let (hour, minute) = (minute_of_day / 60, minute_of_day % 60);
    let suffix = if hour < 12 { "AM" } else { "PM" };
    let hour12 = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{hour12}:{minute:02} {suffix}")
}

/// Chart label for a daily sales figure: `4200` -> `$4.2k`.
#[must_use]
pub fn format_thousands(sales: u32) -> String {
    format!("${:.1}k", f64::from(sales) / 1000.0)
}

/// Month-over-month change caption; the sign is carried by the trend styling.
#[must_use]
pub fn format_change(change_percent: f64) -> String {
    format!("{}% from last month", change_percent.abs())
}
