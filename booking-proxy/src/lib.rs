//! booking-proxy: reservation relay in front of the n8n webhook
//!
//! Accepts finished reservations from the booking client, re-checks the
//! customer data, forwards them to the webhook and answers with a normalized
//! `{ success, reservation_id | error, ... }` body.

pub mod api;
pub mod config;
pub mod error;
pub mod logger;
pub mod state;
pub mod webhook;

pub use config::{Config, ConfigError};
pub use error::{ProxyError, ProxyResult};
pub use state::AppState;
