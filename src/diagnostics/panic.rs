//! Panics as uncaught errors.
//!
//! A panic is relayed like a window `error` event: the payload is the
//! message, the panic location supplies url/line/column, and the error slot
//! is named `panic`. The hook chains to whatever hook was installed before
//! it, so the panic still prints normally.
//!
//! On wasm a panic ends in an `unreachable` trap, which the browser reports
//! again as an uncaught `RuntimeError`. The hook marks [`PANIC_TRAP`] so the
//! error listener can drop that second report.

#[cfg(test)]
#[path = "panic_test.rs"]
mod panic_test;

use std::any::Any;
use std::panic::{Location, PanicHookInfo};
use std::sync::atomic::{AtomicBool, Ordering};

use relay::{ErrorInfo, ErrorReport, Relay};

pub const PANIC_ERROR_NAME: &str = "panic";

/// Text of a panic payload. `panic!` payloads are `&str` or `String`.
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_owned()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "Box<dyn Any>".to_owned()
    }
}

pub fn panic_report(message: String, location: Option<&Location<'_>>) -> ErrorReport {
    let (url, line, column) = location.map_or_else(
        || (String::new(), 0, 0),
        |loc| (loc.file().to_owned(), loc.line(), loc.column()),
    );
    ErrorReport {
        error: Some(ErrorInfo::new(PANIC_ERROR_NAME, message.clone())),
        message,
        url,
        line,
        column,
    }
}

/// Text the browser puts in the error raised by a wasm `unreachable` trap.
const TRAP_MARKER: &str = "unreachable";

/// One-shot latch pairing a relayed panic with the trap that follows it.
#[derive(Debug, Default)]
pub struct TrapFilter(AtomicBool);

impl TrapFilter {
    #[must_use]
    pub const fn new() -> Self {
        Self(AtomicBool::new(false))
    }

    pub fn mark(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// True for the first trap error after [`mark`](Self::mark). Other
    /// messages leave the mark in place.
    pub fn is_panic_trap(&self, message: &str) -> bool {
        message.contains(TRAP_MARKER) && self.0.swap(false, Ordering::AcqRel)
    }
}

pub static PANIC_TRAP: TrapFilter = TrapFilter::new();

/// Install a panic hook that runs the previous hook inside `quiet`, then
/// relays. `quiet` keeps the previous hook's own console output from being
/// relayed a second time.
pub fn chain_hook(relay: &'static Relay, quiet: fn(&dyn Fn())) {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info: &PanicHookInfo<'_>| {
        quiet(&|| previous(info));
        relay.global_error(panic_report(panic_message(info.payload()), info.location()));
        PANIC_TRAP.mark();
    }));
}
