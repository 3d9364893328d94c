use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::api::handlers::{
    get_points_handler, health_check, method_not_allowed_handler, missing_id_handler,
    process_receipt_handler,
};
use crate::api::state::AppState;
use crate::config::ServerConfig;
use crate::db::ReceiptStore;

pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .json() // one JSON object per line
                .with_target(false)
                .with_span_events(fmt::format::FmtSpan::CLOSE), // log span close with duration
        )
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,hyper=warn,tower=warn")),
        )
        .init();
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/receipts/process", post(process_receipt_handler))
        .route("/receipts/{id}", get(get_points_handler))
        .route("/receipts/{id}/points", get(get_points_handler))
        // Too few path segments to carry an id
        .route("/receipts", get(missing_id_handler))
        .route("/receipts/", get(missing_id_handler))
        .route("/health", get(health_check))
        .method_not_allowed_fallback(method_not_allowed_handler)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

pub async fn run_server() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env file is fine; the environment alone is enough
    dotenv::dotenv().ok();

    init_tracing();

    let config = ServerConfig::from_env()?;
    info!(validation = ?config.validation, "Starting receipt processor");

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for CTRL+C: {}", e);
            std::future::pending::<()>().await;
        }
        info!("Shutting down gracefully...");
    };

    // The store lives for the whole process; nothing is persisted on shutdown
    let state = AppState::new(ReceiptStore::new(), config.validation);
    let app = create_app(state);

    let addr = config.socket_addr();
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}
