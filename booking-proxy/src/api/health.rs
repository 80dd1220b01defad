//! Health check endpoint

use axum::Json;
use axum::extract::State;
use serde_json::{Value, json};

use crate::state::AppState;

/// Service status plus a webhook reachability check. Always 200; a dead
/// webhook shows up as `"status": "degraded"`.
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let reachability = state.webhook.check_reachability().await;
    let status = if reachability.reachable { "ok" } else { "degraded" };

    Json(json!({
        "status": status,
        "service": "booking-proxy",
        "version": env!("CARGO_PKG_VERSION"),
        "environment": state.config.environment,
        "webhook": {
            "url": state.webhook.url(),
            "reachability": reachability,
        },
    }))
}
