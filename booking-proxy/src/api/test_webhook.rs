//! Webhook connectivity check
//!
//! `GET /api/test-webhook` sends a canned reservation and reports what came back.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::Value;

use crate::error::ProxyError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct TestWebhookReport {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<Value>,
}

pub async fn test_webhook(State(state): State<AppState>) -> Response {
    let url = state.webhook.url().to_string();

    match state.webhook.send_test().await {
        Ok(response) if response.status.is_success() => {
            tracing::info!(status = response.status.as_u16(), "Webhook test succeeded");
            let report = TestWebhookReport {
                success: true,
                message: Some("Conexión con n8n exitosa".into()),
                error: None,
                hint: None,
                status: Some(response.status.as_u16()),
                url,
                response: Some(response.body_json()),
            };
            (StatusCode::OK, Json(report)).into_response()
        }
        Ok(response) => {
            let err = ProxyError::upstream(response.status, "");
            tracing::warn!(error = %err, "Webhook test rejected");
            let report = TestWebhookReport {
                success: false,
                message: None,
                error: Some(err.to_string()),
                hint: Some(err.hint().into()),
                status: Some(response.status.as_u16()),
                url,
                response: Some(response.body_json()),
            };
            (err.status_code(), Json(report)).into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, "Webhook test failed");
            let report = TestWebhookReport {
                success: false,
                message: None,
                error: Some(err.to_string()),
                hint: Some(err.hint().into()),
                status: None,
                url,
                response: None,
            };
            (err.status_code(), Json(report)).into_response()
        }
    }
}
