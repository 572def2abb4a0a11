use super::*;

#[test]
fn stat_trend_follows_change_sign() {
    let trends: Vec<Trend> = STAT_CARDS.iter().map(StatCard::trend).collect();
    assert_eq!(trends, [Trend::Up, Trend::Up, Trend::Down, Trend::Up]);
}

#[test]
fn best_day_is_friday() {
    assert_eq!(max_sales(&WEEKLY_SALES), 6200);
    assert_eq!(max_sales(&[]), 0);
}

#[test]
fn bar_width_is_relative_to_best_day() {
    let max = max_sales(&WEEKLY_SALES);
    assert!((bar_width_percent(6200, max) - 100.0).abs() < f64::EPSILON);
    assert!((bar_width_percent(3100, max) - 50.0).abs() < 1e-9);
    assert!(bar_width_percent(0, 0).abs() < f64::EPSILON);
}

#[test]
fn quick_actions_cover_every_other_view() {
    let mut targets: Vec<Tab> = QUICK_ACTIONS.iter().map(|a| a.target).collect();
    targets.sort_by_key(|t| t.id());
    assert_eq!(targets, [Tab::Inventory, Tab::Marketing, Tab::Offers, Tab::Sales]);
}
