//! One page per dashboard tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` mounts exactly one page for the active tab. Each page seeds and owns
//! its view state in a local `RwSignal`, so switching tabs drops that state.

pub mod dashboard;
pub mod inventory;
pub mod marketing;
pub mod offers;
pub mod sales;
