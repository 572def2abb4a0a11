//! Browser wiring for the diagnostic relay.
//!
//! SYSTEM CONTEXT
//! ==============
//! The `relay` crate owns event shaping and delivery policy. This module
//! supplies its browser seams (parent-frame transport, original console),
//! reads the page-level configuration, and attaches the four signal sources:
//! the `log` facade, the wrapped `console` methods, window error listeners,
//! and the panic hook.

pub mod config;
pub mod panic;

#[cfg(feature = "csr")]
pub mod browser;

#[cfg(feature = "csr")]
use relay::{Relay, RelayConfig, RelayError};

/// Install the relay and attach every signal source. Call once, before
/// mounting the app.
///
/// # Errors
///
/// Returns [`RelayError`] when a relay or a global logger is already
/// installed. Nothing is attached in that case.
#[cfg(feature = "csr")]
pub fn install() -> Result<&'static Relay, RelayError> {
    let configured = browser::meta_content(config::TARGET_ORIGIN_META);
    let (config, config_error) = match config::config_from_meta(configured.as_deref()) {
        Ok(config) => (config, None),
        Err(err) => (RelayConfig::default(), Some(err)),
    };

    let relay = relay::install(Relay::new(config, browser::ParentFrame, browser::BrowserConsole))?;
    relay::install_logger(relay, browser::echo_record, log::LevelFilter::Debug)?;

    console_error_panic_hook::set_once();
    panic::chain_hook(relay, browser::unrelayed);
    browser::listen(relay);
    if let Err(err) = browser::wrap_console(relay) {
        log::warn!("console output is not relayed: {err:?}");
    }

    if let Some(err) = config_error {
        log::warn!("{err}; relaying to any origin");
    }
    log::debug!("diagnostic relay installed, target origin {}", relay.config().target_origin.as_str());
    Ok(relay)
}
