//! Proxy server configuration

use std::time::Duration;

use reqwest::Url;
use shared::DEFAULT_ID_PREFIX;
use thiserror::Error;

/// Default `source` tag stamped on forwarded reservations
pub const DEFAULT_SOURCE_TAG: &str = "limpieza-facil-app";

/// Configuration error, raised at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    MissingVar(&'static str),

    #[error("{name} has an invalid value: {value}")]
    InvalidVar { name: &'static str, value: String },
}

/// Proxy server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP port
    pub http_port: u16,
    /// Listen address
    pub bind_addr: String,
    /// n8n webhook that receives reservations
    pub webhook_url: String,
    /// Timeout for each webhook call
    pub webhook_timeout: Duration,
    /// `source` tag added to forwarded reservations
    pub source_tag: String,
    /// Prefix of generated reservation ids
    pub id_prefix: String,
    /// Environment: development | staging | production
    pub environment: String,
    /// Directory for daily rolling log files
    pub log_dir: Option<String>,
    /// Emit logs as JSON lines
    pub log_json: bool,
}

impl Config {
    /// Configuration with defaults around a webhook URL
    pub fn new(webhook_url: impl Into<String>) -> Self {
        Self {
            http_port: 3000,
            bind_addr: "0.0.0.0".into(),
            webhook_url: webhook_url.into(),
            webhook_timeout: Duration::from_millis(15_000),
            source_tag: DEFAULT_SOURCE_TAG.into(),
            id_prefix: DEFAULT_ID_PREFIX.into(),
            environment: "development".into(),
            log_dir: None,
            log_json: false,
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let webhook_url = var("N8N_WEBHOOK_URL").ok_or(ConfigError::MissingVar("N8N_WEBHOOK_URL"))?;
        if Url::parse(&webhook_url).is_err() {
            return Err(ConfigError::InvalidVar {
                name: "N8N_WEBHOOK_URL",
                value: webhook_url,
            });
        }

        let mut config = Self::new(webhook_url);

        if let Some(port) = var("HTTP_PORT") {
            config.http_port = port.parse().map_err(|_| ConfigError::InvalidVar {
                name: "HTTP_PORT",
                value: port,
            })?;
        }
        if let Some(ms) = var("WEBHOOK_TIMEOUT_MS") {
            let millis: u64 = ms.parse().map_err(|_| ConfigError::InvalidVar {
                name: "WEBHOOK_TIMEOUT_MS",
                value: ms,
            })?;
            config.webhook_timeout = Duration::from_millis(millis);
        }
        if let Some(addr) = var("BIND_ADDR") {
            config.bind_addr = addr;
        }
        if let Some(tag) = var("SOURCE_TAG") {
            config.source_tag = tag;
        }
        if let Some(prefix) = var("RESERVATION_ID_PREFIX") {
            config.id_prefix = prefix;
        }
        if let Some(environment) = var("ENVIRONMENT") {
            config.environment = environment;
        }
        config.log_dir = var("LOG_DIR");
        config.log_json = var("LOG_FORMAT").is_some_and(|f| f.eq_ignore_ascii_case("json"));

        Ok(config)
    }

    /// `bind_addr:http_port`
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.http_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_missing_webhook_url_fails() {
        let err = Config::from_lookup(lookup(&[("HTTP_PORT", "8080")])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar("N8N_WEBHOOK_URL")));

        let err = Config::from_lookup(lookup(&[("N8N_WEBHOOK_URL", "   ")])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar(_)));
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[("N8N_WEBHOOK_URL", " https://n8n.local/webhook/reserva ")])).unwrap();
        assert_eq!(config.webhook_url, "https://n8n.local/webhook/reserva");
        assert_eq!(config.http_port, 3000);
        assert_eq!(config.listen_addr(), "0.0.0.0:3000");
        assert_eq!(config.webhook_timeout, Duration::from_secs(15));
        assert_eq!(config.source_tag, "limpieza-facil-app");
        assert_eq!(config.id_prefix, "RES");
        assert_eq!(config.log_dir, None);
        assert!(!config.log_json);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("N8N_WEBHOOK_URL", "http://localhost:5678/webhook"),
            ("HTTP_PORT", "8080"),
            ("BIND_ADDR", "127.0.0.1"),
            ("WEBHOOK_TIMEOUT_MS", "2500"),
            ("SOURCE_TAG", "kiosk"),
            ("RESERVATION_ID_PREFIX", "BK"),
            ("LOG_FORMAT", "JSON"),
        ]))
        .unwrap();
        assert_eq!(config.listen_addr(), "127.0.0.1:8080");
        assert_eq!(config.webhook_timeout, Duration::from_millis(2500));
        assert_eq!(config.source_tag, "kiosk");
        assert_eq!(config.id_prefix, "BK");
        assert!(config.log_json);
    }

    #[test]
    fn test_invalid_values() {
        let err = Config::from_lookup(lookup(&[("N8N_WEBHOOK_URL", "not a url")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidVar { name: "N8N_WEBHOOK_URL", .. }));

        let err = Config::from_lookup(lookup(&[
            ("N8N_WEBHOOK_URL", "http://localhost:5678/webhook"),
            ("HTTP_PORT", "eighty"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidVar { name: "HTTP_PORT", .. }));
    }
}
