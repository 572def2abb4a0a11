//! Page-level relay configuration.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use relay::{RelayConfig, RelayError, TargetOrigin};

/// `<meta name="relay-target-origin" content="https://host.example">`
pub const TARGET_ORIGIN_META: &str = "relay-target-origin";

/// Build the relay configuration from the target-origin meta content.
///
/// A missing or blank tag keeps the wildcard default.
///
/// # Errors
///
/// Returns [`RelayError::InvalidOrigin`] when the content is neither `*` nor
/// a `scheme://host[:port]` origin.
pub fn config_from_meta(content: Option<&str>) -> Result<RelayConfig, RelayError> {
    match content.map(str::trim) {
        None | Some("") => Ok(RelayConfig::default()),
        Some(raw) => Ok(RelayConfig::default().with_target_origin(TargetOrigin::parse(raw)?)),
    }
}
