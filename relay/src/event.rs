//! Diagnostic event model and argument normalization.
//!
//! DESIGN
//! ======
//! Arguments are classified once, when they enter the relay, into the tagged
//! [`Arg`] union. Each tag has exactly one transmission rule, so building the
//! outbound [`RelayMessage`] never needs to inspect values at runtime.

#[cfg(test)]
#[path = "event_test.rs"]
mod event_test;

use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// Discriminator carried by every relayed message.
pub const MESSAGE_TYPE: &str = "iframe-console";

/// Literal first argument of a relayed unhandled rejection.
pub const REJECTION_PREFIX: &str = "Unhandled Promise Rejection:";

/// Severity of a diagnostic event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Log,
    Warn,
    Error,
}

impl Level {
    /// Wire name of the level (`"log"`, `"warn"`, `"error"`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Log => "log",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mechanism that produced an event. Not transmitted; implied by payload shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Source {
    ConsoleCall,
    GlobalError,
    UnhandledRejection,
}

/// Normalized form of an error-like value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    pub message: String,
    pub stack: Option<String>,
    pub name: String,
}

impl ErrorInfo {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            stack: None,
            name: name.into(),
        }
    }

    #[must_use]
    pub fn with_stack(mut self, stack: impl Into<String>) -> Self {
        self.stack = Some(stack.into());
        self
    }

    /// Normalize a Rust error.
    ///
    /// `name` is the short type name, `message` its `Display` output, and
    /// `stack` the `source()` chain, one cause per line.
    pub fn from_error<E: Error>(err: &E) -> Self {
        let mut causes = Vec::new();
        let mut current = err.source();
        while let Some(cause) = current {
            causes.push(format!("caused by: {cause}"));
            current = cause.source();
        }

        Self {
            message: err.to_string(),
            stack: (!causes.is_empty()).then(|| causes.join("\n")),
            name: short_type_name(std::any::type_name::<E>()).to_owned(),
        }
    }
}

/// `std::io::error::Error` -> `Error`, `a::Wrapper<b::C>` -> `Wrapper`.
fn short_type_name(full: &str) -> &str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

/// One argument of a diagnostic call, classified for transmission.
#[derive(Clone, Debug, PartialEq)]
pub enum Arg {
    Null,
    Bool(bool),
    Number(Number),
    Text(String),
    /// Plain serializable structure, sent unchanged.
    Structured(Value),
    /// Error-like value, sent as `{message, stack, name}`.
    Error(ErrorInfo),
    /// String representation of a value that failed the serializability check.
    Opaque(String),
}

impl Arg {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Classify a float. Non-finite values have no JSON form and are coerced
    /// to their string representation.
    #[must_use]
    pub fn float(value: f64) -> Self {
        Number::from_f64(value).map_or_else(|| Self::Opaque(value.to_string()), Self::Number)
    }

    /// Classify any serializable value, falling back to its `Debug` output
    /// when serialization fails.
    pub fn from_serialize<T: Serialize + fmt::Debug + ?Sized>(value: &T) -> Self {
        match serde_json::to_value(value) {
            Ok(json) => Self::from_json(json),
            Err(_) => Self::Opaque(format!("{value:?}")),
        }
    }

    /// Classify an already-decoded JSON value.
    #[must_use]
    pub fn from_json(json: Value) -> Self {
        match json {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => Self::Number(n),
            Value::String(s) => Self::Text(s),
            structured @ (Value::Array(_) | Value::Object(_)) => Self::Structured(structured),
        }
    }

    pub fn from_error<E: Error>(err: &E) -> Self {
        Self::Error(ErrorInfo::from_error(err))
    }

    /// Transmittable JSON form of this argument.
    #[must_use]
    pub fn to_value(&self) -> Value {
        match self {
            Self::Null => Value::Null,
            Self::Bool(b) => Value::Bool(*b),
            Self::Number(n) => Value::Number(n.clone()),
            Self::Text(s) | Self::Opaque(s) => Value::String(s.clone()),
            Self::Structured(v) => v.clone(),
            Self::Error(info) => serde_json::json!({
                "message": info.message,
                "stack": info.stack,
                "name": info.name,
            }),
        }
    }
}

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Self::text(value)
    }
}

impl From<String> for Arg {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for Arg {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<u32> for Arg {
    fn from(value: u32) -> Self {
        Self::Number(value.into())
    }
}

impl From<i64> for Arg {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

impl From<f64> for Arg {
    fn from(value: f64) -> Self {
        Self::float(value)
    }
}

impl From<ErrorInfo> for Arg {
    fn from(value: ErrorInfo) -> Self {
        Self::Error(value)
    }
}

impl From<Option<ErrorInfo>> for Arg {
    fn from(value: Option<ErrorInfo>) -> Self {
        value.map_or(Self::Null, Self::Error)
    }
}

/// An uncaught synchronous error as reported by the global error hook.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorReport {
    pub message: String,
    pub url: String,
    pub line: u32,
    pub column: u32,
    pub error: Option<ErrorInfo>,
}

/// A single observable diagnostic occurrence, ready for transmission.
#[derive(Clone, Debug, PartialEq)]
pub struct DiagnosticEvent {
    pub level: Level,
    pub source: Source,
    pub args: Vec<Arg>,
}

impl DiagnosticEvent {
    #[must_use]
    pub fn console(level: Level, args: Vec<Arg>) -> Self {
        Self {
            level,
            source: Source::ConsoleCall,
            args,
        }
    }

    /// Payload: `[message, url, line, column, error-or-null]`.
    #[must_use]
    pub fn global_error(report: ErrorReport) -> Self {
        Self {
            level: Level::Error,
            source: Source::GlobalError,
            args: vec![
                Arg::Text(report.message),
                Arg::Text(report.url),
                Arg::from(report.line),
                Arg::from(report.column),
                Arg::from(report.error),
            ],
        }
    }

    /// Payload: `["Unhandled Promise Rejection:", reason]`.
    #[must_use]
    pub fn unhandled_rejection(reason: Arg) -> Self {
        Self {
            level: Level::Error,
            source: Source::UnhandledRejection,
            args: vec![Arg::text(REJECTION_PREFIX), reason],
        }
    }

    #[must_use]
    pub fn to_message(&self) -> RelayMessage {
        RelayMessage {
            kind: MESSAGE_TYPE.to_owned(),
            level: self.level,
            args: self.args.iter().map(Arg::to_value).collect(),
        }
    }
}

/// Wire shape posted to the embedding parent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RelayMessage {
    #[serde(rename = "type")]
    pub kind: String,
    pub level: Level,
    pub args: Vec<Value>,
}

impl RelayMessage {
    /// Whether this message carries the relay discriminator.
    #[must_use]
    pub fn is_relay(&self) -> bool {
        self.kind == MESSAGE_TYPE
    }
}
