//! n8n webhook client
//!
//! Every reservation is forwarded as the payload plus two fields:
//!
//! ```json
//! { "plan": "...", "date": "...", "time": "...", "customer": { ... },
//!   "timestamp": "2026-10-19T09:30:00Z", "source": "limpieza-facil-app" }
//! ```

use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode, header};
use serde::Serialize;
use serde_json::{Value, json};
use shared::ReservationPayload;

use crate::config::Config;
use crate::error::ProxyError;

/// Upper bound for the health check request
const REACHABILITY_TIMEOUT: Duration = Duration::from_secs(5);

/// Reservation as sent to the webhook
#[derive(Debug, Serialize)]
pub struct ForwardedReservation<'a> {
    #[serde(flatten)]
    pub payload: &'a ReservationPayload,
    pub timestamp: DateTime<Utc>,
    pub source: &'a str,
}

/// Raw webhook answer
#[derive(Debug, Clone)]
pub struct WebhookResponse {
    pub status: StatusCode,
    pub body: String,
}

impl WebhookResponse {
    /// Body as JSON; empty bodies and plain text are wrapped so they can be echoed back
    pub fn body_json(&self) -> Value {
        let text = self.body.trim();
        if text.is_empty() {
            return json!({ "message": "Sin respuesta del servidor" });
        }
        serde_json::from_str(text).unwrap_or_else(|_| json!({ "raw_response": self.body }))
    }
}

/// Whether the webhook answered a plain GET
#[derive(Debug, Clone, Serialize)]
pub struct Reachability {
    pub reachable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Forwards reservations to the configured webhook
#[derive(Debug, Clone)]
pub struct WebhookForwarder {
    client: Client,
    url: String,
    source: String,
}

impl WebhookForwarder {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.webhook_timeout).build()?;
        Ok(Self {
            client,
            url: config.webhook_url.clone(),
            source: config.source_tag.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn post_json<B: Serialize + ?Sized>(&self, body: &B) -> Result<WebhookResponse, ProxyError> {
        let response = self
            .client
            .post(&self.url)
            .header(header::ACCEPT, "application/json")
            .json(body)
            .send()
            .await
            .map_err(ProxyError::from_transport)?;

        let status = response.status();
        let body = response.text().await.map_err(ProxyError::from_transport)?;
        tracing::debug!(status = status.as_u16(), body = %body, "Webhook answered");
        Ok(WebhookResponse { status, body })
    }

    /// Forward one reservation. Non-2xx answers are returned, not turned into errors.
    pub async fn forward(&self, payload: &ReservationPayload) -> Result<WebhookResponse, ProxyError> {
        let forwarded = ForwardedReservation {
            payload,
            timestamp: Utc::now(),
            source: &self.source,
        };
        tracing::info!(url = %self.url, plan = %payload.plan, "Forwarding reservation to webhook");
        self.post_json(&forwarded).await
    }

    /// Send a canned test reservation
    pub async fn send_test(&self) -> Result<WebhookResponse, ProxyError> {
        let now = Utc::now();
        let body = json!({
            "test": true,
            "timestamp": now,
            "message": "Prueba de conexión desde booking-proxy",
            "plan": "test",
            "date": now,
            "time": "10:00",
            "customer": {
                "name": "Test User",
                "phone": "+34600123456",
                "email": "test@example.com",
                "address": "Calle Test 123",
                "specialInstructions": "Esta es una prueba",
                "accessibilityNeeds": false
            },
            "source": self.source,
        });
        tracing::info!(url = %self.url, "Sending test reservation to webhook");
        self.post_json(&body).await
    }

    /// GET the webhook URL; 2xx or 405 (POST-only webhook) count as reachable
    pub async fn check_reachability(&self) -> Reachability {
        match self.client.get(&self.url).timeout(REACHABILITY_TIMEOUT).send().await {
            Ok(response) => {
                let status = response.status();
                Reachability {
                    reachable: status.is_success() || status == StatusCode::METHOD_NOT_ALLOWED,
                    status: Some(status.as_u16()),
                    error: None,
                }
            }
            Err(e) => {
                tracing::warn!(url = %self.url, error = %e, "Webhook unreachable");
                Reachability {
                    reachable: false,
                    status: None,
                    error: Some(e.to_string()),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared::{PlanId, ReservationDraft, TimeSlot};

    #[test]
    fn test_forwarded_shape_adds_timestamp_and_source() {
        let mut draft = ReservationDraft::new();
        draft.plan = Some(PlanId::Standard);
        draft.date = NaiveDate::from_ymd_opt(2026, 10, 20);
        draft.time = TimeSlot::at_hour(10);
        draft.customer.name = "Ana".into();
        draft.customer.phone = "600123456".into();
        draft.customer.address = "Calle Mayor 1".into();
        let payload = draft.to_payload().unwrap();

        let forwarded = ForwardedReservation {
            payload: &payload,
            timestamp: Utc::now(),
            source: "limpieza-facil-app",
        };
        let json = serde_json::to_value(&forwarded).unwrap();
        assert_eq!(json["plan"], "standard");
        assert_eq!(json["customer"]["name"], "Ana");
        assert_eq!(json["source"], "limpieza-facil-app");
        assert!(json["timestamp"].is_string());
    }

    #[test]
    fn test_body_json_fallbacks() {
        let response = |body: &str| WebhookResponse {
            status: StatusCode::OK,
            body: body.into(),
        };
        assert_eq!(response("").body_json()["message"], "Sin respuesta del servidor");
        assert_eq!(response("accepted").body_json()["raw_response"], "accepted");
        assert_eq!(response(r#"{"ok":1}"#).body_json()["ok"], 1);
    }
}
