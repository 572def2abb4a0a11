//! The relay object: transport and console seams, configuration, and the
//! process-wide singleton.
//!
//! DESIGN
//! ======
//! The relay never wraps shared entry points itself. Callers (the `log`
//! adapter, the wrapped host console, the browser error listeners, the panic
//! hook) hand it events, and it talks to the outside world only through two
//! injected seams:
//!
//! - [`Transport`] delivers a [`RelayMessage`] to the embedding parent.
//! - [`Console`] is the original, unrelayed diagnostic output. Delivery
//!   failures are reported here and nowhere else, so a failing transport can
//!   never feed back into the relay.
//!
//! Console calls carry their own echo. The caller holds the raw arguments
//! and the original console function, and the relay only fixes the order:
//! echo first, then relay.

#[cfg(test)]
#[path = "relay_test.rs"]
mod relay_test;

use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};

use log::LevelFilter;

use crate::event::{Arg, DiagnosticEvent, ErrorReport, Level, RelayMessage};

/// First argument of the report written when delivery fails.
pub const DELIVERY_FAILURE_PREFIX: &str = "Failed to postMessage:";

/// Error returned when installing or configuring the relay.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("diagnostic relay is already installed")]
    AlreadyInstalled,
    #[error("failed to install relay logger: {0}")]
    Logger(#[from] log::SetLoggerError),
    #[error("invalid target origin: {0:?}")]
    InvalidOrigin(String),
}

/// Error returned by a [`Transport`] that could not hand off a message.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("failed to encode relay message: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("{0}")]
    Post(String),
}

/// Successful transport result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delivered {
    Sent,
    /// No embedding parent exists; nothing was sent.
    NoParent,
}

/// What happened to a forwarded event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Sent,
    NoParent,
    /// Transport failed; the failure was reported through the console.
    Failed,
    /// Raised while another delivery was in flight; echoed only.
    Suppressed,
}

/// Delivers relay messages to the embedding parent context.
pub trait Transport: Send + Sync {
    /// # Errors
    ///
    /// Returns [`TransportError`] when the message could not be encoded or
    /// handed to the destination.
    fn deliver(&self, message: &RelayMessage, origin: &TargetOrigin) -> Result<Delivered, TransportError>;
}

impl<F> Transport for F
where
    F: Fn(&RelayMessage, &TargetOrigin) -> Result<Delivered, TransportError> + Send + Sync,
{
    fn deliver(&self, message: &RelayMessage, origin: &TargetOrigin) -> Result<Delivered, TransportError> {
        self(message, origin)
    }
}

/// The original, unrelayed diagnostic output.
pub trait Console: Send + Sync {
    fn write(&self, level: Level, args: &[Arg]);
}

impl<F> Console for F
where
    F: Fn(Level, &[Arg]) + Send + Sync,
{
    fn write(&self, level: Level, args: &[Arg]) {
        self(level, args);
    }
}

/// Which parent origins may receive relayed messages.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum TargetOrigin {
    /// Any origin (`"*"`).
    #[default]
    Any,
    /// Exactly this `scheme://host[:port]` origin.
    Exact(String),
}

impl TargetOrigin {
    /// Parse `"*"` or a `scheme://host[:port]` origin.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::InvalidOrigin`] for anything else, including
    /// origins carrying a path, query, or fragment.
    pub fn parse(raw: &str) -> Result<Self, RelayError> {
        let trimmed = raw.trim();
        if trimmed == "*" {
            return Ok(Self::Any);
        }

        let invalid = || RelayError::InvalidOrigin(raw.to_owned());
        let (scheme, rest) = trimmed.split_once("://").ok_or_else(invalid)?;
        let scheme_ok = !scheme.is_empty()
            && scheme
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
        let host_ok = !rest.is_empty() && !rest.contains(['/', '?', '#', ' ']);
        if !scheme_ok || !host_ok {
            return Err(invalid());
        }

        Ok(Self::Exact(format!("{}://{}", scheme.to_ascii_lowercase(), rest.to_ascii_lowercase())))
    }

    /// Value for the `targetOrigin` argument of `postMessage`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Any => "*",
            Self::Exact(origin) => origin,
        }
    }
}

/// Relay settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelayConfig {
    pub target_origin: TargetOrigin,
    /// Most verbose `log` level that is relayed. Quieter records are still echoed.
    pub max_level: LevelFilter,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            target_origin: TargetOrigin::Any,
            max_level: LevelFilter::Info,
        }
    }
}

impl RelayConfig {
    #[must_use]
    pub fn with_target_origin(mut self, origin: TargetOrigin) -> Self {
        self.target_origin = origin;
        self
    }

    #[must_use]
    pub fn with_max_level(mut self, level: LevelFilter) -> Self {
        self.max_level = level;
        self
    }
}

/// Cross-cutting observer that forwards diagnostics to the embedding parent.
pub struct Relay {
    config: RelayConfig,
    transport: Box<dyn Transport>,
    console: Box<dyn Console>,
    delivering: AtomicBool,
}

impl std::fmt::Debug for Relay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Relay")
            .field("config", &self.config)
            .field("delivering", &self.delivering.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}

impl Relay {
    pub fn new(config: RelayConfig, transport: impl Transport + 'static, console: impl Console + 'static) -> Self {
        Self {
            config,
            transport: Box::new(transport),
            console: Box::new(console),
            delivering: AtomicBool::new(false),
        }
    }

    #[must_use]
    pub fn config(&self) -> &RelayConfig {
        &self.config
    }

    /// A console call: run `echo` (the original, unmodified output) first,
    /// then relay `args`. The echo runs even when delivery is suppressed.
    pub fn console(&self, level: Level, args: Vec<Arg>, echo: impl FnOnce()) -> Outcome {
        echo();
        self.forward(&DiagnosticEvent::console(level, args))
    }

    /// An uncaught synchronous error. The host already printed it; relay only.
    pub fn global_error(&self, report: ErrorReport) -> Outcome {
        self.forward(&DiagnosticEvent::global_error(report))
    }

    /// An unhandled rejection. The host already printed it; relay only.
    pub fn unhandled_rejection(&self, reason: Arg) -> Outcome {
        self.forward(&DiagnosticEvent::unhandled_rejection(reason))
    }

    /// Attempt delivery of one event. Never retries.
    pub fn forward(&self, event: &DiagnosticEvent) -> Outcome {
        if self.delivering.swap(true, Ordering::AcqRel) {
            return Outcome::Suppressed;
        }
        let result = self.transport.deliver(&event.to_message(), &self.config.target_origin);
        self.delivering.store(false, Ordering::Release);

        match result {
            Ok(Delivered::Sent) => Outcome::Sent,
            Ok(Delivered::NoParent) => Outcome::NoParent,
            Err(err) => {
                self.console
                    .write(Level::Error, &[Arg::text(DELIVERY_FAILURE_PREFIX), Arg::text(err.to_string())]);
                Outcome::Failed
            }
        }
    }
}

static RELAY: OnceLock<Relay> = OnceLock::new();

/// Install the process-wide relay.
///
/// # Errors
///
/// Returns [`RelayError::AlreadyInstalled`] if a relay was installed before;
/// the existing relay stays in place and `relay` is dropped.
pub fn install(relay: Relay) -> Result<&'static Relay, RelayError> {
    RELAY.set(relay).map_err(|_| RelayError::AlreadyInstalled)?;
    RELAY.get().ok_or(RelayError::AlreadyInstalled)
}

/// The installed relay, if any.
#[must_use]
pub fn installed() -> Option<&'static Relay> {
    RELAY.get()
}
