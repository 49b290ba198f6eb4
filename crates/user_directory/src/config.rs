//! Dashboard configuration with layered overrides.
//!
//! Defaults reproduce the fixed endpoint the dashboard was built around. The
//! browser app layers build-time values and then a runtime object from the
//! page on top, using [`DirectoryConfig::apply`]. Configuration values are
//! public; do not store secrets here.

use crate::error::ConfigError;
use std::str::FromStr;
use tracing::{debug, level_filters::LevelFilter};
use url::Url;

pub const DEFAULT_USERS_URL: &str = "https://jsonplaceholder.typicode.com/users";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirectoryConfig {
    pub users_url: String,
    /// Abort the fetch after this many milliseconds. `None` waits forever.
    pub request_timeout_ms: Option<u32>,
    pub log_level: LevelFilter,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            users_url: DEFAULT_USERS_URL.to_string(),
            request_timeout_ms: None,
            log_level: LevelFilter::INFO,
        }
    }
}

/// Raw override values as read from the environment or the page.
#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    pub users_url: Option<String>,
    pub request_timeout_ms: Option<String>,
    pub log_level: Option<String>,
}

impl DirectoryConfig {
    /// Applies every valid override and returns the ones that were rejected.
    /// Blank values are skipped silently; invalid values keep the previous
    /// setting.
    pub fn apply(&mut self, overrides: ConfigOverrides) -> Vec<ConfigError> {
        let mut rejected = Vec::new();

        if let Some(value) = overrides.users_url.as_deref().and_then(normalize_value) {
            match parse_users_url(&value) {
                Ok(url) => {
                    debug!(users_url = %url, "users url override applied");
                    self.users_url = url;
                }
                Err(err) => rejected.push(err),
            }
        }

        if let Some(value) = overrides
            .request_timeout_ms
            .as_deref()
            .and_then(normalize_value)
        {
            match parse_timeout(&value) {
                Ok(ms) => self.request_timeout_ms = Some(ms),
                Err(err) => rejected.push(err),
            }
        }

        if let Some(value) = overrides.log_level.as_deref().and_then(normalize_value) {
            match parse_log_level(&value) {
                Ok(level) => self.log_level = level,
                Err(err) => rejected.push(err),
            }
        }

        rejected
    }
}

/// Trims a raw value and drops it if nothing is left.
#[must_use]
pub fn normalize_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Validates `value` as an absolute `http` or `https` URL and returns it as
/// given, without normalizing.
///
/// # Errors
/// Returns an error if `value` is not an absolute `http` or `https` URL.
pub fn parse_users_url(value: &str) -> Result<String, ConfigError> {
    let url = Url::parse(value).map_err(|err| ConfigError::InvalidUrl {
        value: value.to_string(),
        reason: err.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(value.to_string()),
        scheme => Err(ConfigError::UnsupportedScheme(scheme.to_string())),
    }
}

/// # Errors
/// Returns an error unless `value` is a positive integer.
pub fn parse_timeout(value: &str) -> Result<u32, ConfigError> {
    match value.parse::<u32>() {
        Ok(ms) if ms > 0 => Ok(ms),
        _ => Err(ConfigError::InvalidTimeout(value.to_string())),
    }
}

/// # Errors
/// Returns an error if `value` is not a tracing level name such as `debug` or `off`.
pub fn parse_log_level(value: &str) -> Result<LevelFilter, ConfigError> {
    LevelFilter::from_str(value).map_err(|_| ConfigError::InvalidLogLevel(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_value_trims_and_rejects_empty() {
        assert_eq!(normalize_value(""), None);
        assert_eq!(normalize_value("   "), None);
        assert_eq!(
            normalize_value("  https://api.example.com/users "),
            Some("https://api.example.com/users".to_string())
        );
    }

    #[test]
    fn defaults_use_fixed_endpoint_without_timeout() {
        let config = DirectoryConfig::default();
        assert_eq!(config.users_url, DEFAULT_USERS_URL);
        assert_eq!(config.request_timeout_ms, None);
        assert_eq!(config.log_level, LevelFilter::INFO);
    }

    #[test]
    fn apply_ignores_blank_values() {
        let mut config = DirectoryConfig::default();
        let rejected = config.apply(ConfigOverrides {
            users_url: Some("  ".to_string()),
            request_timeout_ms: Some(String::new()),
            log_level: None,
        });

        assert!(rejected.is_empty());
        assert_eq!(config, DirectoryConfig::default());
    }

    #[test]
    fn apply_overwrites_when_valid() {
        let mut config = DirectoryConfig::default();
        let rejected = config.apply(ConfigOverrides {
            users_url: Some("http://localhost:3000/users".to_string()),
            request_timeout_ms: Some(" 2500 ".to_string()),
            log_level: Some("debug".to_string()),
        });

        assert!(rejected.is_empty());
        assert_eq!(config.users_url, "http://localhost:3000/users");
        assert_eq!(config.request_timeout_ms, Some(2500));
        assert_eq!(config.log_level, LevelFilter::DEBUG);
    }

    #[test]
    fn apply_keeps_previous_values_on_invalid_input() {
        let mut config = DirectoryConfig::default();
        let rejected = config.apply(ConfigOverrides {
            users_url: Some("ftp://example.com/users".to_string()),
            request_timeout_ms: Some("0".to_string()),
            log_level: Some("loud".to_string()),
        });

        assert_eq!(
            rejected,
            vec![
                ConfigError::UnsupportedScheme("ftp".to_string()),
                ConfigError::InvalidTimeout("0".to_string()),
                ConfigError::InvalidLogLevel("loud".to_string()),
            ]
        );
        assert_eq!(config, DirectoryConfig::default());
    }

    #[test]
    fn relative_users_url_is_rejected() {
        assert!(matches!(
            parse_users_url("/api/users"),
            Err(ConfigError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn users_url_is_returned_as_given() {
        assert_eq!(
            parse_users_url("https://api.example.com"),
            Ok("https://api.example.com".to_string())
        );
        assert_eq!(
            parse_users_url("http://localhost:3000/users?q=a b"),
            Ok("http://localhost:3000/users?q=a b".to_string())
        );
    }

    #[test]
    fn apply_keeps_trimmed_users_url_verbatim() {
        let mut config = DirectoryConfig::default();
        let rejected = config.apply(ConfigOverrides {
            users_url: Some("  https://api.example.com  ".to_string()),
            ..ConfigOverrides::default()
        });

        assert!(rejected.is_empty());
        assert_eq!(config.users_url, "https://api.example.com");
    }

    #[test]
    fn timeout_rejects_non_numeric() {
        assert!(parse_timeout("soon").is_err());
        assert!(parse_timeout("-5").is_err());
        assert_eq!(parse_timeout("10000"), Ok(10_000));
    }
}
