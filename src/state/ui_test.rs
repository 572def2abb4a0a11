use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_shows_dashboard() {
    let state = UiState::default();
    assert_eq!(state.active_tab, Some(Tab::Dashboard));
    assert!(!state.mobile_menu_open);
}

// =============================================================
// Tab selection
// =============================================================

#[test]
fn select_known_ids_activates_exactly_one_tab() {
    let mut state = UiState::default();
    for tab in Tab::ALL {
        state.select(tab.id());
        let active: Vec<Tab> = Tab::ALL.into_iter().filter(|t| state.is_active(*t)).collect();
        assert_eq!(active, vec![tab]);
    }
}

#[test]
fn select_unknown_id_clears_active_tab() {
    let mut state = UiState::default();
    state.select("reports");
    assert_eq!(state.active_tab, None);
    assert!(Tab::ALL.into_iter().all(|t| !state.is_active(t)));

    state.select("");
    assert_eq!(state.active_tab, None);
}

#[test]
fn select_closes_mobile_menu() {
    let mut state = UiState::default();
    state.toggle_mobile_menu();
    assert!(state.mobile_menu_open);
    state.select("sales");
    assert!(!state.mobile_menu_open);
    assert_eq!(state.active_tab, Some(Tab::Sales));
}

#[test]
fn open_sets_tab_directly() {
    let mut state = UiState::default();
    state.open(Tab::Marketing);
    assert!(state.is_active(Tab::Marketing));
}

// =============================================================
// Tab
// =============================================================

#[test]
fn tab_ids_round_trip_and_are_case_sensitive() {
    for tab in Tab::ALL {
        assert_eq!(Tab::from_id(tab.id()), Some(tab));
    }
    assert_eq!(Tab::from_id("Dashboard"), None);
}

#[test]
fn tab_labels_match_navigation() {
    let labels: Vec<&str> = Tab::ALL.into_iter().map(Tab::label).collect();
    assert_eq!(labels, ["Dashboard", "Offers", "Sales", "Inventory", "Marketing"]);
}
