use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::llm_client::{DEFAULT_API_BASE, MODEL};

/// Environment variable holding the Gemini API credential.
pub const CREDENTIAL_VAR: &str = "GOOGLE_API_KEY";

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "Google API Key not found. Please check your .env file and ensure the variable is {var}."
    )]
    CredentialMissing { var: &'static str },

    #[error("Environment variable '{var}' has an invalid value '{value}': {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Application configuration loaded from environment variables.
/// Built once at startup; a missing credential stops the process before
/// the listener is bound.
#[derive(Clone)]
pub struct Config {
    pub google_api_key: String,
    pub model: String,
    pub api_base: String,
    pub port: u16,
    pub max_upload_bytes: usize,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. `from_env` passes the
    /// process environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let google_api_key = lookup(CREDENTIAL_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::CredentialMissing {
                var: CREDENTIAL_VAR,
            })?;

        let api_base = lookup("GEMINI_API_BASE")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        Ok(Config {
            google_api_key,
            model: MODEL.to_string(),
            api_base: api_base.trim().trim_end_matches('/').to_string(),
            port: parse_or(&lookup, "PORT", DEFAULT_PORT)?,
            max_upload_bytes: parse_or(&lookup, "MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

// Hand-written so the credential never lands in logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("google_api_key", &"<redacted>")
            .field("model", &self.model)
            .field("api_base", &self.api_base)
            .field("port", &self.port)
            .field("max_upload_bytes", &self.max_upload_bytes)
            .field("rust_log", &self.rust_log)
            .finish()
    }
}

fn parse_or<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: fmt::Display,
{
    match lookup(var) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|e| ConfigError::Invalid {
                var,
                value: value.clone(),
                reason: e.to_string(),
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_missing_credential_names_the_variable() {
        let err = Config::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::CredentialMissing { .. }));
        assert!(err.to_string().contains("GOOGLE_API_KEY"));
        assert!(err.to_string().contains(".env"));
    }

    #[test]
    fn test_whitespace_credential_counts_as_missing() {
        let err = Config::from_lookup(lookup_from(&[("GOOGLE_API_KEY", "   ")])).unwrap_err();
        assert!(matches!(err, ConfigError::CredentialMissing { .. }));
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[("GOOGLE_API_KEY", "test-key")])).unwrap();
        assert_eq!(config.google_api_key, "test-key");
        assert_eq!(config.model, "gemini-2.5-flash");
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.port, 8080);
        assert_eq!(config.max_upload_bytes, 10 * 1024 * 1024);
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("GOOGLE_API_KEY", " key "),
            ("GEMINI_API_BASE", "http://localhost:9000/v1beta/"),
            ("PORT", "3000"),
            ("MAX_UPLOAD_BYTES", "2048"),
            ("RUST_LOG", "debug"),
        ]))
        .unwrap();
        assert_eq!(config.google_api_key, "key");
        assert_eq!(config.api_base, "http://localhost:9000/v1beta");
        assert_eq!(config.port, 3000);
        assert_eq!(config.max_upload_bytes, 2048);
        assert_eq!(config.rust_log, "debug");
    }

    #[test]
    fn test_invalid_port() {
        let err = Config::from_lookup(lookup_from(&[
            ("GOOGLE_API_KEY", "key"),
            ("PORT", "not-a-port"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: "PORT", .. }));
    }

    #[test]
    fn test_debug_redacts_credential() {
        let config = Config::from_lookup(lookup_from(&[("GOOGLE_API_KEY", "secret-123")])).unwrap();
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("secret-123"));
        assert!(rendered.contains("<redacted>"));
    }
}
