//! Application state for booking-proxy

use std::sync::Arc;

use crate::config::Config;
use crate::webhook::WebhookForwarder;

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub webhook: WebhookForwarder,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, reqwest::Error> {
        let webhook = WebhookForwarder::new(&config)?;
        Ok(Self {
            config: Arc::new(config),
            webhook,
        })
    }
}
