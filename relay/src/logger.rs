//! `log` facade adapter.
//!
//! The application logs through the `log` macros. [`RelayLogger`] is the
//! global logger: every record is first echoed through the original console
//! logger, unmodified, and then handed to the relay as a console-call event.

#[cfg(test)]
#[path = "logger_test.rs"]
mod logger_test;

use log::{LevelFilter, Log, Metadata, Record};

use crate::event::{Arg, Level};
use crate::relay::{Outcome, Relay, RelayError};

/// Map a `log` level onto a relay severity.
#[must_use]
pub fn relay_level(level: log::Level) -> Level {
    match level {
        log::Level::Error => Level::Error,
        log::Level::Warn => Level::Warn,
        log::Level::Info | log::Level::Debug | log::Level::Trace => Level::Log,
    }
}

/// Global logger that echoes, then relays.
pub struct RelayLogger<E> {
    relay: &'static Relay,
    echo: E,
}

impl<E> RelayLogger<E>
where
    E: Fn(&Record) + Send + Sync,
{
    pub fn new(relay: &'static Relay, echo: E) -> Self {
        Self { relay, echo }
    }

    /// Echo `record`, then relay it if it is within the relay level filter.
    ///
    /// Returns `None` when the record was echoed only.
    pub fn dispatch(&self, record: &Record) -> Option<Outcome> {
        if record.level() > self.relay.config().max_level {
            (self.echo)(record);
            return None;
        }
        let args = vec![Arg::text(record.args().to_string())];
        Some(self.relay.console(relay_level(record.level()), args, || (self.echo)(record)))
    }
}

impl<E> Log for RelayLogger<E>
where
    E: Fn(&Record) + Send + Sync,
{
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        self.dispatch(record);
    }

    fn flush(&self) {}
}

/// Install a [`RelayLogger`] as the global `log` logger.
///
/// `level` bounds what is echoed at all; the relay's own `max_level` bounds
/// what is relayed.
///
/// # Errors
///
/// Returns [`RelayError::Logger`] if a global logger was already set.
pub fn install_logger<E>(relay: &'static Relay, echo: E, level: LevelFilter) -> Result<(), RelayError>
where
    E: Fn(&Record) + Send + Sync + 'static,
{
    log::set_boxed_logger(Box::new(RelayLogger::new(relay, echo)))?;
    log::set_max_level(level);
    Ok(())
}
