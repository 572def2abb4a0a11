//! Diagnostic relay for pages embedded in a host frame.
//!
//! Mirrors every log/warn/error, uncaught error, and unhandled rejection to
//! the embedding parent as a structured [`RelayMessage`], while the page's
//! own console output stays exactly as it was.
//!
//! This crate is UI-framework agnostic and has no browser dependency; the
//! browser side supplies a [`Transport`] (`postMessage`) and a [`Console`]
//! (the original console) when it installs the relay.

pub mod event;
pub mod logger;
pub mod relay;

pub use event::{Arg, DiagnosticEvent, ErrorInfo, ErrorReport, Level, MESSAGE_TYPE, REJECTION_PREFIX, RelayMessage, Source};
pub use logger::{RelayLogger, install_logger, relay_level};
pub use relay::{
    Console, DELIVERY_FAILURE_PREFIX, Delivered, Outcome, Relay, RelayConfig, RelayError, TargetOrigin, Transport,
    TransportError, install, installed,
};
