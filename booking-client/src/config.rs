//! Client configuration

use crate::{ClientError, ClientResult};
use shared::DEFAULT_ID_PREFIX;

/// Path of the reservation route on the proxy
pub const DEFAULT_RESERVATION_PATH: &str = "/api/reserva";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client configuration for connecting to the reservation proxy
///
/// The proxy address is always explicit; there is no built-in fallback URL.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Proxy base URL (e.g., "http://localhost:3000")
    pub base_url: String,

    /// Reservation route on the proxy
    pub reservation_path: String,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Prefix for ids synthesized when the proxy acknowledges without one
    pub id_prefix: String,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            reservation_path: DEFAULT_RESERVATION_PATH.to_string(),
            timeout: DEFAULT_TIMEOUT_SECS,
            id_prefix: DEFAULT_ID_PREFIX.to_string(),
        }
    }

    /// Load from `BOOKING_API_URL` (required) and `BOOKING_API_TIMEOUT` (seconds, optional)
    pub fn from_env() -> ClientResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env), reading variables through `lookup`
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ClientResult<Self> {
        let base_url = lookup("BOOKING_API_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ClientError::Config("BOOKING_API_URL must be set".into()))?;

        let mut config = Self::new(base_url);
        if let Some(raw) = lookup("BOOKING_API_TIMEOUT") {
            config.timeout = raw.trim().parse().map_err(|_| {
                ClientError::Config(format!("BOOKING_API_TIMEOUT is not a number: {raw}"))
            })?;
        }
        Ok(config)
    }

    /// Set the reservation route
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.reservation_path = path.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Set the prefix for synthesized reservation ids
    pub fn with_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.id_prefix = prefix.into();
        self
    }

    /// Full URL of the reservation route
    pub fn endpoint(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim().trim_end_matches('/'),
            self.reservation_path.trim_start_matches('/')
        )
    }

    /// Create a reservation client from this configuration
    pub fn build_http_client(&self) -> ClientResult<crate::ReservationClient> {
        crate::ReservationClient::new(self)
    }
}
