//! Page interaction configuration.
//!
//! The server may embed a JSON block in the page to override timings and
//! endpoints. Every field has a default, so an absent or partial block is
//! always valid input.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Default delay before a copy button reverts its success state.
pub const DEFAULT_COPY_REVERT_MS: u32 = 1_000;
/// Default delay before non-informational alerts are dismissed.
pub const DEFAULT_ALERT_DISMISS_MS: u32 = 5_000;
/// Default failsafe delay before a generate button is re-enabled.
pub const DEFAULT_GENERATE_FAILSAFE_MS: u32 = 5_000;
/// Default interval between countdown refreshes.
pub const DEFAULT_COUNTDOWN_INTERVAL_MS: u32 = 60_000;
/// Default time a toast stays visible.
pub const DEFAULT_TOAST_DURATION_MS: u32 = 5_000;

/// Timer settings, all in milliseconds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Timings {
    /// Copy button success indicator lifetime.
    pub copy_revert_ms: u32,
    /// Delay before alerts auto-dismiss.
    pub alert_dismiss_ms: u32,
    /// Failsafe for generate buttons stuck in the pending state.
    pub generate_failsafe_ms: u32,
    /// Countdown refresh interval.
    pub countdown_interval_ms: u32,
    /// Toast display duration.
    pub toast_duration_ms: u32,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            copy_revert_ms: DEFAULT_COPY_REVERT_MS,
            alert_dismiss_ms: DEFAULT_ALERT_DISMISS_MS,
            generate_failsafe_ms: DEFAULT_GENERATE_FAILSAFE_MS,
            countdown_interval_ms: DEFAULT_COUNTDOWN_INTERVAL_MS,
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
        }
    }
}

/// Server endpoints the page submits to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Endpoints {
    /// Endpoint that generates a fresh address.
    pub generate: String,
    /// Prefix of the per-address deletion endpoint.
    pub delete_email: String,
    /// Prefix of the per-message mark-read endpoint.
    pub mark_read: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            generate: "/generate-email".to_string(),
            delete_email: "/delete-email".to_string(),
            mark_read: "/mark-read".to_string(),
        }
    }
}

impl Endpoints {
    /// Deletion path for the address `id`.
    pub fn delete_email_path(&self, id: &str) -> String {
        join_segment(&self.delete_email, id)
    }

    /// Mark-read path for the message `id`.
    pub fn mark_read_path(&self, id: &str) -> String {
        join_segment(&self.mark_read, id)
    }
}

fn join_segment(prefix: &str, id: &str) -> String {
    format!(
        "{}/{}",
        prefix.trim_end_matches('/'),
        urlencoding::encode(id)
    )
}

/// Complete page configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PageConfig {
    /// Timer settings.
    pub timings: Timings,
    /// Server endpoints.
    pub endpoints: Endpoints,
    /// Mark a message read the first time its content is shown.
    pub mark_read_on_open: bool,
    /// Log level directive (e.g. "info", "debug").
    pub log_level: Option<String>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            timings: Timings::default(),
            endpoints: Endpoints::default(),
            mark_read_on_open: true,
            log_level: None,
        }
    }
}

impl PageConfig {
    /// Parse and validate a configuration block.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        debug!(?config, "Loaded page configuration");
        Ok(config)
    }

    /// Check that timers are non-zero and endpoints are absolute paths.
    pub fn validate(&self) -> Result<()> {
        let t = &self.timings;
        let timers = [
            ("copy_revert_ms", t.copy_revert_ms),
            ("alert_dismiss_ms", t.alert_dismiss_ms),
            ("generate_failsafe_ms", t.generate_failsafe_ms),
            ("countdown_interval_ms", t.countdown_interval_ms),
            ("toast_duration_ms", t.toast_duration_ms),
        ];
        if let Some((name, _)) = timers.iter().find(|(_, ms)| *ms == 0) {
            return Err(Error::Configuration(format!("{name} must be non-zero")));
        }

        let e = &self.endpoints;
        for (name, path) in [
            ("generate", &e.generate),
            ("delete_email", &e.delete_email),
            ("mark_read", &e.mark_read),
        ] {
            if !path.starts_with('/') {
                return Err(Error::Configuration(format!(
                    "endpoint {name} must be an absolute path, got {path:?}"
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = PageConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.timings.copy_revert_ms, 1_000);
        assert_eq!(config.timings.countdown_interval_ms, 60_000);
        assert_eq!(config.endpoints.generate, "/generate-email");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = PageConfig::from_json(r#"{"timings": {"copy_revert_ms": 1500}}"#)
            .expect("Should parse");
        assert_eq!(config.timings.copy_revert_ms, 1_500);
        assert_eq!(config.timings.alert_dismiss_ms, DEFAULT_ALERT_DISMISS_MS);
        assert!(config.mark_read_on_open);
    }

    #[test]
    fn test_empty_object_is_default() {
        let config = PageConfig::from_json("{}").expect("Should parse");
        assert_eq!(config, PageConfig::default());
    }

    #[test]
    fn test_zero_timer_rejected() {
        let result = PageConfig::from_json(r#"{"timings": {"countdown_interval_ms": 0}}"#);
        assert!(matches!(result, Err(Error::Configuration(msg)) if msg.contains("countdown")));
    }

    #[test]
    fn test_relative_endpoint_rejected() {
        let result = PageConfig::from_json(r#"{"endpoints": {"generate": "generate-email"}}"#);
        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[test]
    fn test_mark_read_path() {
        let endpoints = Endpoints::default();
        assert_eq!(endpoints.mark_read_path("31"), "/mark-read/31");
        assert_eq!(endpoints.delete_email_path("a b"), "/delete-email/a%20b");
    }

    #[test]
    fn test_malformed_json_is_serialization_error() {
        let result = PageConfig::from_json("{");
        assert!(matches!(result, Err(Error::Serialization(_))));
    }
}
