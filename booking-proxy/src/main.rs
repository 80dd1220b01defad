//! booking-proxy binary
//!
//! Loads `.env`, reads the configuration and serves the API until Ctrl-C.

use booking_proxy::{AppState, Config, api, logger};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load .env file
    let _ = dotenvy::dotenv();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            logger::init_logger(None, false);
            tracing::error!(error = %e, "Invalid configuration");
            return Err(e.into());
        }
    };

    logger::init_logger(config.log_dir.as_deref(), config.log_json);
    tracing::info!(
        "Starting booking-proxy (env: {}, webhook: {})",
        config.environment,
        config.webhook_url
    );

    let addr = config.listen_addr();
    let state = AppState::new(config)?;
    let app = api::create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("booking-proxy HTTP listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("booking-proxy stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}
