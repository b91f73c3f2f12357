//! Environment Configuration Helpers
//!
//! Small typed readers over process environment variables. Every service
//! builds its own config struct from these once at startup.

use std::fmt::Display;
use std::str::FromStr;

use thiserror::Error;

/// Configuration loading errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set in environment")]
    Missing(String),

    #[error("{key} has invalid value {value:?}: {reason}")]
    Invalid {
        key: String,
        value: String,
        reason: String,
    },
}

/// Read a variable, treating empty or blank values as unset
pub fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Read a variable that must be present
pub fn required_env(key: &str) -> Result<String, ConfigError> {
    optional_env(key).ok_or_else(|| ConfigError::Missing(key.to_string()))
}

/// Read a variable or fall back to `default`
pub fn env_or(key: &str, default: &str) -> String {
    optional_env(key).unwrap_or_else(|| default.to_string())
}

/// Read and parse a variable, falling back to `default` when unset
pub fn env_parse<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    match optional_env(key) {
        Some(value) => parse_value(key, &value),
        None => Ok(default),
    }
}

/// Read a boolean flag (`true/false`, `1/0`, `yes/no`, `on/off`)
pub fn env_flag(key: &str, default: bool) -> Result<bool, ConfigError> {
    match optional_env(key) {
        Some(value) => parse_flag(&value).ok_or_else(|| ConfigError::Invalid {
            key: key.to_string(),
            value,
            reason: "expected a boolean".to_string(),
        }),
        None => Ok(default),
    }
}

fn parse_value<T>(key: &str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    value.parse().map_err(|e: T::Err| ConfigError::Invalid {
        key: key.to_string(),
        value: value.to_string(),
        reason: e.to_string(),
    })
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag("yes"), Some(true));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag("Off"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value::<u16>("PORT", "5000"), Ok(5000));

        let err = parse_value::<u16>("PORT", "eighty").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { ref key, .. } if key == "PORT"));
    }

    #[test]
    fn test_unset_variables_use_defaults() {
        let key = "PLATFORM_CONFIG_TEST_SURELY_UNSET";
        assert_eq!(optional_env(key), None);
        assert_eq!(env_or(key, "fallback"), "fallback");
        assert_eq!(env_parse(key, 7u32), Ok(7));
        assert_eq!(env_flag(key, true), Ok(true));
        assert_eq!(
            required_env(key),
            Err(ConfigError::Missing(key.to_string()))
        );
    }
}
