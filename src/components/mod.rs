//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the dashboard shell and shared presentation pieces.
//! Only the navigation reads shared state (the `UiState` context); the rest
//! take plain props.

pub mod badge;
pub mod dashboard_stats;
pub mod navigation;
pub mod sales_chart;
pub mod summary_card;
