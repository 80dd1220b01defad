//! API routes for booking-proxy

pub mod health;
pub mod reserva;
pub mod test_webhook;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use http::{Method, header};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Reservations are small; anything bigger is not a booking
const MAX_BODY_BYTES: usize = 64 * 1024;

/// Browser preflight for the reservation route
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

/// Create the combined router
pub fn create_router(state: AppState) -> Router {
    let reservations = Router::new()
        .route("/api/reserva", post(reserva::create_reservation))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES));

    Router::new()
        .route("/health", get(health::health_check))
        .route("/api/test-webhook", get(test_webhook::test_webhook))
        .merge(reservations)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer()),
        )
        .with_state(state)
}
