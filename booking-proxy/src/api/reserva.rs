//! Reservation relay
//!
//! `POST /api/reserva` forwards a reservation to the webhook and normalizes
//! whatever the webhook answers into a [`ReservationReply`].

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use chrono::Utc;
use serde_json::Value;
use shared::response::DEFAULT_SUCCESS_MESSAGE;
use shared::validation::validate_payload;
use shared::{ReservationPayload, ReservationReply, fallback_reservation_id};

use crate::error::{ProxyError, ProxyResult};
use crate::state::AppState;
use crate::webhook::WebhookResponse;

pub async fn create_reservation(
    State(state): State<AppState>,
    payload: Result<Json<ReservationPayload>, JsonRejection>,
) -> ProxyResult<Json<ReservationReply>> {
    let Json(payload) = payload.map_err(|e| ProxyError::InvalidBody(e.body_text()))?;
    validate_payload(&payload)?;

    tracing::info!(
        plan = %payload.plan,
        date = %payload.service_date(),
        time = %payload.time,
        "Reservation received"
    );

    let response = state.webhook.forward(&payload).await?;
    let reply = reply_from_webhook(&response, &state.config.id_prefix)?;

    tracing::info!(reservation_id = %reply.reservation_id, "Reservation accepted by webhook");
    Ok(Json(reply))
}

/// 2xx JSON objects are merged into the reply; other 2xx bodies get a
/// generated id and the default message. Error statuses become [`ProxyError::Upstream`].
pub fn reply_from_webhook(response: &WebhookResponse, id_prefix: &str) -> ProxyResult<ReservationReply> {
    if !response.status.is_success() {
        return Err(ProxyError::upstream(response.status, &response.body));
    }

    let fallback_id = fallback_reservation_id(id_prefix, Utc::now());
    let reply = match serde_json::from_str::<Value>(response.body.trim()) {
        Ok(Value::Object(fields)) => ReservationReply::from_upstream(fields, fallback_id),
        _ => ReservationReply::new(fallback_id).with_message(DEFAULT_SUCCESS_MESSAGE),
    };
    Ok(reply)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    fn response(status: StatusCode, body: &str) -> WebhookResponse {
        WebhookResponse {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn test_json_reply_is_merged() {
        let reply = reply_from_webhook(
            &response(StatusCode::OK, r#"{"reservation_id":"RES-9","crew":"B"}"#),
            "RES",
        )
        .unwrap();
        assert_eq!(reply.reservation_id, "RES-9");
        assert_eq!(reply.extra["crew"], "B");
    }

    #[test]
    fn test_numeric_webhook_id_is_kept() {
        let reply = reply_from_webhook(&response(StatusCode::OK, r#"{"reservation_id":4521}"#), "RES").unwrap();
        assert_eq!(reply.reservation_id, "4521");
        assert_eq!(serde_json::to_value(&reply).unwrap()["reservation_id"], "4521");
    }

    #[test]
    fn test_empty_and_text_replies_get_generated_id() {
        for body in ["", "Workflow was started", "[1,2]"] {
            let reply = reply_from_webhook(&response(StatusCode::OK, body), "RES").unwrap();
            assert!(reply.success);
            assert!(reply.reservation_id.starts_with("RES-"));
            assert_eq!(reply.message.as_deref(), Some(DEFAULT_SUCCESS_MESSAGE));
        }
    }

    #[test]
    fn test_error_status_is_upstream_error() {
        let err = reply_from_webhook(&response(StatusCode::NOT_FOUND, "no webhook"), "RES").unwrap_err();
        assert_eq!(err.to_string(), "webhook error 404: no webhook");
    }
}
