//! Reply shapes of the reservation proxy
//!
//! Success:
//! ```json
//! { "success": true, "reservation_id": "RES-1760000000000", "message": "...", "...": "upstream fields" }
//! ```
//!
//! Failure:
//! ```json
//! { "success": false, "error": "webhook error 500: boom", "hint": "..." }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Prefix of locally generated reservation ids
pub const DEFAULT_ID_PREFIX: &str = "RES";

/// Message used when the webhook acknowledges without a body
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Reservation processed successfully";

/// `"<PREFIX>-<unix millis>"`
pub fn fallback_reservation_id(prefix: &str, now: DateTime<Utc>) -> String {
    format!("{prefix}-{}", now.timestamp_millis())
}

/// Successful proxy reply
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservationReply {
    pub success: bool,
    pub reservation_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Any other fields the webhook returned
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ReservationReply {
    pub fn new(reservation_id: impl Into<String>) -> Self {
        Self {
            success: true,
            reservation_id: reservation_id.into(),
            message: None,
            extra: Map::new(),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Merge a webhook JSON object into a reply.
    ///
    /// The webhook's fields are kept and `success` is always true. A string
    /// or numeric `reservation_id` is kept as text; any other value (absent,
    /// null, blank, boolean, object, array) is replaced by `fallback_id`.
    pub fn from_upstream(mut fields: Map<String, Value>, fallback_id: String) -> Self {
        let reservation_id = match fields.remove("reservation_id") {
            Some(Value::String(id)) if !id.trim().is_empty() => id,
            Some(Value::Number(id)) => id.to_string(),
            _ => fallback_id,
        };
        let message = match fields.remove("message") {
            Some(Value::String(message)) => Some(message),
            _ => None,
        };
        fields.remove("success");

        Self {
            success: true,
            reservation_id,
            message,
            extra: fields,
        }
    }
}

/// Failed proxy reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReply {
    pub success: bool,
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorReply {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}
