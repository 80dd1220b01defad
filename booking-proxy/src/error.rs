//! Proxy error type
//!
//! Every failure leaves the proxy as `{ "success": false, "error": ..., "hint": ... }`
//! with a status that says who is at fault: 400 for the caller, the relayed
//! webhook status for webhook rejections, 502 when the webhook cannot be reached.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use shared::{ErrorReply, ValidationError};
use thiserror::Error;

const HINT_BODY: &str = "Envía una reserva en JSON con plan, date, time y customer";
const HINT_CUSTOMER: &str = "Revisa nombre, teléfono, email y dirección del cliente";
const HINT_WEBHOOK: &str = "Verifica la URL de n8n y que el webhook esté activo";
const HINT_NETWORK: &str = "Posible error de red o URL inválida";

#[derive(Debug, Error)]
pub enum ProxyError {
    /// Body is not a reservation
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// Reservation failed the shared validators
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Webhook answered with an error status
    #[error("webhook error {code}: {detail}", code = .status.as_u16())]
    Upstream { status: StatusCode, detail: String },

    /// Webhook could not be reached (DNS, connect, timeout)
    #[error("webhook unreachable: {0}")]
    Unreachable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ProxyError {
    /// Map a reqwest failure on the webhook call
    pub fn from_transport(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Unreachable(format!("timed out ({e})"))
        } else if e.is_connect() || e.is_request() {
            Self::Unreachable(e.to_string())
        } else {
            Self::Internal(e.to_string())
        }
    }

    /// Webhook rejection; an empty body falls back to the status reason
    pub fn upstream(status: StatusCode, body: &str) -> Self {
        let body = body.trim();
        let detail = if body.is_empty() {
            status.canonical_reason().unwrap_or("Unknown").to_string()
        } else {
            body.to_string()
        };
        Self::Upstream { status, detail }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidBody(_) | Self::Validation(_) => StatusCode::BAD_REQUEST,
            // only error statuses are relayed as-is
            Self::Upstream { status, .. } if status.is_client_error() || status.is_server_error() => *status,
            Self::Upstream { .. } | Self::Unreachable(_) => StatusCode::BAD_GATEWAY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn hint(&self) -> &'static str {
        match self {
            Self::InvalidBody(_) => HINT_BODY,
            Self::Validation(_) => HINT_CUSTOMER,
            Self::Upstream { .. } | Self::Internal(_) => HINT_WEBHOOK,
            Self::Unreachable(_) => HINT_NETWORK,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self, "Reservation failed");
        } else {
            tracing::warn!(status = status.as_u16(), error = %self, "Reservation rejected");
        }
        let body = ErrorReply::new(self.to_string()).with_hint(self.hint());
        (status, Json(body)).into_response()
    }
}

pub type ProxyResult<T> = Result<T, ProxyError>;
