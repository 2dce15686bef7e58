//! Process configuration, read once from the environment at startup.

use std::net::SocketAddr;

use pokemonapi_observability::LogFormat;
use thiserror::Error;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid BIND_ADDR {value:?}: {reason}")]
    InvalidBindAddr { value: String, reason: String },
}

/// Runtime settings for the API server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    pub log_format: LogFormat,
    /// Problems that were tolerated while reading the environment. Logged by
    /// the caller once tracing is up.
    pub warnings: Vec<String>,
}

impl ApiConfig {
    /// Read `BIND_ADDR` and `LOG_FORMAT` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup (used by tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::InvalidBindAddr {
                value: raw.clone(),
                reason: e.to_string(),
            })?;

        let mut warnings = Vec::new();
        let log_format = match lookup("LOG_FORMAT") {
            None => LogFormat::default(),
            Some(v) => v.parse().unwrap_or_else(|e: String| {
                warnings.push(format!("{e}; falling back to json"));
                LogFormat::default()
            }),
        };

        Ok(Self {
            bind_addr,
            log_format,
            warnings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = ApiConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg.bind_addr, DEFAULT_BIND_ADDR.parse::<SocketAddr>().unwrap());
        assert_eq!(cfg.log_format, LogFormat::Json);
        assert!(cfg.warnings.is_empty());
    }

    #[test]
    fn reads_overrides() {
        let cfg = ApiConfig::from_lookup(lookup(&[
            ("BIND_ADDR", "127.0.0.1:3000"),
            ("LOG_FORMAT", "pretty"),
        ]))
        .unwrap();
        assert_eq!(cfg.bind_addr, "127.0.0.1:3000".parse::<SocketAddr>().unwrap());
        assert_eq!(cfg.log_format, LogFormat::Pretty);
    }

    #[test]
    fn rejects_bad_bind_addr() {
        let err = ApiConfig::from_lookup(lookup(&[("BIND_ADDR", "localhost")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBindAddr { ref value, .. } if value == "localhost"));
    }

    #[test]
    fn unknown_log_format_falls_back_to_json() {
        let cfg = ApiConfig::from_lookup(lookup(&[("LOG_FORMAT", "xml")])).unwrap();
        assert_eq!(cfg.log_format, LogFormat::Json);
        assert_eq!(cfg.warnings, vec!["unknown log format: xml; falling back to json".to_string()]);
    }
}
