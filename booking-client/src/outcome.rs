//! Proxy response normalization
//!
//! Every answer from the proxy goes through [`normalize_response`], which turns
//! a status code and raw body into one [`ProxyOutcome`].

use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use serde_json::Value;
use shared::fallback_reservation_id;

use crate::{ClientError, ClientResult};

/// What a proxy response means for the reservation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProxyOutcome {
    /// 2xx with a reservation id
    Confirmed {
        reservation_id: String,
        message: Option<String>,
    },
    /// 2xx without a usable body; the id was synthesized locally
    Acknowledged { reservation_id: String },
    /// Non-2xx answer
    Rejected {
        status: u16,
        error: String,
        hint: Option<String>,
    },
}

/// Successful submission as seen by the wizard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    pub reservation_id: String,
    pub message: Option<String>,
    /// Id generated client-side because the proxy returned none
    pub synthesized: bool,
}

impl ProxyOutcome {
    pub fn is_success(&self) -> bool {
        !matches!(self, Self::Rejected { .. })
    }

    pub fn into_result(self) -> ClientResult<SubmissionReceipt> {
        match self {
            Self::Confirmed {
                reservation_id,
                message,
            } => Ok(SubmissionReceipt {
                reservation_id,
                message,
                synthesized: false,
            }),
            Self::Acknowledged { reservation_id } => Ok(SubmissionReceipt {
                reservation_id,
                message: None,
                synthesized: true,
            }),
            Self::Rejected {
                status,
                error,
                hint,
            } => Err(ClientError::Upstream {
                status,
                message: error,
                hint,
            }),
        }
    }
}

fn string_field(body: &Value, key: &str) -> Option<String> {
    body.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Non-blank string or number, as text
fn id_field(value: &Value, key: &str) -> Option<String> {
    match value.get(key) {
        Some(Value::Number(id)) => Some(id.to_string()),
        _ => string_field(value, key),
    }
}

/// Classify a proxy response.
///
/// 2xx with a JSON `reservation_id` is confirmed; any other 2xx is acknowledged
/// with a `"<prefix>-<millis>"` id; everything else is rejected, taking the
/// message from `error`, then `message`, then the raw body.
pub fn normalize_response(
    status: StatusCode,
    body: &str,
    id_prefix: &str,
    now: DateTime<Utc>,
) -> ProxyOutcome {
    let parsed: Option<Value> = serde_json::from_str(body.trim()).ok();

    if status.is_success() {
        let confirmed = parsed
            .as_ref()
            .filter(|v| v.is_object())
            .and_then(|v| id_field(v, "reservation_id").map(|id| (id, string_field(v, "message"))));

        return match confirmed {
            Some((reservation_id, message)) => ProxyOutcome::Confirmed {
                reservation_id,
                message,
            },
            None => ProxyOutcome::Acknowledged {
                reservation_id: fallback_reservation_id(id_prefix, now),
            },
        };
    }

    let (error, hint) = match parsed.as_ref().filter(|v| v.is_object()) {
        Some(v) => (
            string_field(v, "error").or_else(|| string_field(v, "message")),
            string_field(v, "hint"),
        ),
        None => (None, None),
    };
    let error = error
        .or_else(|| Some(body.trim().to_string()).filter(|s| !s.is_empty()))
        .unwrap_or_else(|| format!("Error {}", status.as_u16()));

    ProxyOutcome::Rejected {
        status: status.as_u16(),
        error,
        hint,
    }
}
