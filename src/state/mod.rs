//! Client-side view state.
//!
//! DESIGN
//! ======
//! State is split by view (`sales`, `inventory`, etc.) so each page owns a
//! small focused model. Pages wrap their model in an `RwSignal` local to the
//! page; only `ui` is shared through context.

pub mod dashboard;
pub mod inventory;
pub mod marketing;
pub mod offers;
pub mod sales;
pub mod ui;
