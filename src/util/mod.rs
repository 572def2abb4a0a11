//! Utility helpers shared across dashboard views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability.

pub mod clipboard;
pub mod clock;
pub mod format;
