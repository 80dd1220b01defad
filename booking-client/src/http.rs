// booking-client/src/http.rs
// Reservation submission over HTTP

use crate::outcome::normalize_response;
use crate::{ClientConfig, ClientError, ClientResult, SubmissionReceipt};
use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use shared::ReservationPayload;
use std::time::Duration;

/// Submission seam used by the wizard
#[async_trait]
pub trait ReservationGateway: Send + Sync {
    /// Send a finished reservation. One attempt per call.
    async fn submit_reservation(&self, payload: &ReservationPayload) -> ClientResult<SubmissionReceipt>;
}

/// Network client for the reservation proxy
#[derive(Debug, Clone)]
pub struct ReservationClient {
    client: Client,
    endpoint: String,
    id_prefix: String,
}

impl ReservationClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        if config.base_url.trim().is_empty() {
            return Err(ClientError::Config("base_url is empty".into()));
        }
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;
        Ok(Self {
            client,
            endpoint: config.endpoint(),
            id_prefix: config.id_prefix.clone(),
        })
    }

    /// Full URL the reservations are posted to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ReservationGateway for ReservationClient {
    async fn submit_reservation(&self, payload: &ReservationPayload) -> ClientResult<SubmissionReceipt> {
        tracing::info!(
            endpoint = %self.endpoint,
            plan = %payload.plan,
            time = %payload.time,
            "Submitting reservation"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        let outcome = normalize_response(status, &body, &self.id_prefix, Utc::now());
        if outcome.is_success() {
            tracing::info!(status = status.as_u16(), outcome = ?outcome, "Reservation accepted");
        } else {
            tracing::warn!(status = status.as_u16(), outcome = ?outcome, "Reservation rejected");
        }
        outcome.into_result()
    }
}
