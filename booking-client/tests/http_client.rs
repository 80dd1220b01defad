// booking-client/tests/http_client.rs
// ReservationClient against a local fake proxy

use axum::{Json, Router, http::StatusCode, routing::post};
use booking_client::{ClientConfig, ClientError, ReservationGateway, ReservationPayload};
use chrono::NaiveDate;
use serde_json::{Value, json};
use shared::{ReservationDraft, TimeSlot, PlanId};

async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn payload() -> ReservationPayload {
    let mut draft = ReservationDraft::new();
    draft.plan = Some(PlanId::Basic);
    draft.date = NaiveDate::from_ymd_opt(2026, 10, 20);
    draft.time = TimeSlot::at_hour(8);
    draft.customer.name = "Ana".into();
    draft.customer.phone = "600123456".into();
    draft.customer.address = "Calle Mayor 1".into();
    draft.to_payload().unwrap()
}

#[tokio::test]
async fn test_confirmed_reply_and_body_shape() {
    let router = Router::new().route(
        "/api/reserva",
        post(|Json(body): Json<Value>| async move {
            assert_eq!(body["customer"]["name"], "Ana");
            assert_eq!(body["date"], "2026-10-20T00:00:00Z");
            Json(json!({ "success": true, "reservation_id": "RES-77", "message": "ok" }))
        }),
    );
    let base = spawn(router).await;
    let client = ClientConfig::new(base).build_http_client().unwrap();

    let receipt = client.submit_reservation(&payload()).await.unwrap();
    assert_eq!(receipt.reservation_id, "RES-77");
    assert_eq!(receipt.message.as_deref(), Some("ok"));
    assert!(!receipt.synthesized);
}

#[tokio::test]
async fn test_empty_reply_synthesizes_id() {
    let router = Router::new().route("/api/reserva", post(|| async { StatusCode::OK }));
    let base = spawn(router).await;
    let client = ClientConfig::new(base)
        .with_id_prefix("BK")
        .build_http_client()
        .unwrap();

    let receipt = client.submit_reservation(&payload()).await.unwrap();
    assert!(receipt.synthesized);
    assert!(receipt.reservation_id.starts_with("BK-"));
}

#[tokio::test]
async fn test_upstream_error_is_surfaced() {
    let router = Router::new().route(
        "/api/reserva",
        post(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "success": false, "error": "boom", "hint": "check the webhook" })),
            )
        }),
    );
    let base = spawn(router).await;
    let client = ClientConfig::new(base).build_http_client().unwrap();

    let err = client.submit_reservation(&payload()).await.unwrap_err();
    assert!(!err.is_network());
    assert_eq!(err.status(), Some(500));
    assert_eq!(err.to_string(), "boom");
    assert_eq!(err.hint(), Some("check the webhook"));
}

#[tokio::test]
async fn test_unreachable_proxy_is_network_error() {
    // bind then drop to get a port nobody listens on
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ClientConfig::new(format!("http://{addr}"))
        .with_timeout(5)
        .build_http_client()
        .unwrap();

    let err = client.submit_reservation(&payload()).await.unwrap_err();
    assert!(matches!(err, ClientError::Network(_)));
}
