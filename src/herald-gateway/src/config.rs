//! Configuration for listener and command registration.
//!
//! Supports loading configuration from:
//! - TOML files
//! - Environment variables

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{GatewayError, GatewayResult};

/// Environment variable holding comma-separated search paths.
pub const ENV_SEARCH_PATHS: &str = "HERALD_SEARCH_PATHS";
/// Environment variable toggling discovery error logging.
pub const ENV_LOG_DISCOVERY_ERRORS: &str = "HERALD_LOG_DISCOVERY_ERRORS";
/// Environment variable overriding the log level.
pub const ENV_LOG_LEVEL: &str = "HERALD_LOG_LEVEL";

/// Registration configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeraldConfig {
    /// Character every search path must end with.
    #[serde(default = "default_separator")]
    pub package_separator: char,
    /// Package prefixes scanned during discovery.
    #[serde(default)]
    pub search_paths: Vec<String>,
    /// Whether discovery failures are logged.
    #[serde(default)]
    pub log_discovery_errors: bool,
    /// Logging setup.
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_separator() -> char {
    '.'
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for HeraldConfig {
    fn default() -> Self {
        Self {
            package_separator: default_separator(),
            search_paths: Vec::new(),
            log_discovery_errors: false,
            logging: LoggingConfig::default(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    #[serde(default = "default_level")]
    pub level: String,
    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
        }
    }
}

impl HeraldConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> GatewayResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), "Loaded registration config");
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> GatewayResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `HERALD_SEARCH_PATHS` - comma-separated package prefixes
    /// - `HERALD_LOG_DISCOVERY_ERRORS` - `true`/`false`/`1`/`0`
    /// - `HERALD_LOG_LEVEL` - default log filter
    pub fn from_env() -> GatewayResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> GatewayResult<Self> {
        let mut config = Self::default();

        if let Some(paths) = lookup(ENV_SEARCH_PATHS) {
            config.search_paths = paths
                .split(',')
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(String::from)
                .collect();
        }

        if let Some(flag) = lookup(ENV_LOG_DISCOVERY_ERRORS) {
            config.log_discovery_errors = parse_flag(&flag).ok_or_else(|| {
                GatewayError::Config(format!(
                    "{ENV_LOG_DISCOVERY_ERRORS} must be a boolean, got \"{flag}\""
                ))
            })?;
        }

        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            config.logging.level = level;
        }

        Ok(config)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = HeraldConfig::default();
        assert_eq!(config.package_separator, '.');
        assert!(config.search_paths.is_empty());
        assert!(!config.log_discovery_errors);
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.json);
    }

    #[test]
    fn test_from_toml() {
        let config = HeraldConfig::from_toml_str(
            r#"
search_paths = ["bots.commands.", "bots.events."]
log_discovery_errors = true

[logging]
level = "debug"
json = true
"#,
        )
        .unwrap();

        assert_eq!(config.package_separator, '.');
        assert_eq!(config.search_paths, vec!["bots.commands.", "bots.events."]);
        assert!(config.log_discovery_errors);
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json);
    }

    #[test]
    fn test_from_toml_invalid() {
        let err = HeraldConfig::from_toml_str("search_paths = 3").unwrap_err();
        assert!(matches!(err, GatewayError::Config(_)));
    }

    #[test]
    fn test_from_lookup() {
        let config = HeraldConfig::from_lookup(lookup(&[
            (ENV_SEARCH_PATHS, "a.b., c.d.,,"),
            (ENV_LOG_DISCOVERY_ERRORS, "yes"),
            (ENV_LOG_LEVEL, "trace"),
        ]))
        .unwrap();

        assert_eq!(config.search_paths, vec!["a.b.", "c.d."]);
        assert!(config.log_discovery_errors);
        assert_eq!(config.logging.level, "trace");
    }

    #[test]
    fn test_from_lookup_bad_flag() {
        let result = HeraldConfig::from_lookup(lookup(&[(ENV_LOG_DISCOVERY_ERRORS, "maybe")]));
        assert!(matches!(result, Err(GatewayError::Config(_))));
    }
}
