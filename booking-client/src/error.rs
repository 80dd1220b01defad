//! Client error types

use shared::ValidationError;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Missing or unusable configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Draft not complete enough to build a payload
    #[error("Incomplete reservation: {0}")]
    Incomplete(#[from] ValidationError),

    /// Request never got a response (DNS, connect, timeout, broken body)
    #[error("Network error: {0}")]
    Network(String),

    /// Proxy answered with a non-2xx status
    #[error("{message}")]
    Upstream {
        status: u16,
        message: String,
        hint: Option<String>,
    },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Transport-level failure, as opposed to a proxy answer
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }

    /// HTTP status of an upstream failure
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Extra guidance returned by the proxy
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::Upstream { hint, .. } => hint.as_deref(),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        let detail = if e.is_timeout() {
            format!("request timed out ({e})")
        } else if e.is_connect() {
            format!("could not connect to the reservation service ({e})")
        } else {
            e.to_string()
        };
        Self::Network(detail)
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
