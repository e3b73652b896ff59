//! HTTP server implementation using Axum.

use crate::handlers::{
    handle_add_manufacturers, handle_featured, handle_get_manufacturer, handle_health,
    handle_inspection, handle_list_manufacturers, handle_match, handle_process_sheet,
    handle_variants,
};
use axum::{
    routing::{get, post},
    Router,
};
use forgeyard_core::ForgeyardApi;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

/// Application state shared across handlers.
pub struct AppState {
    /// Core API (catalog, matching, planning)
    pub api: ForgeyardApi,
}

/// Start the REST server.
///
/// Returns the actual address the server is bound to (useful when port=0).
pub async fn start_server(api: ForgeyardApi, host: &str, port: u16) -> anyhow::Result<SocketAddr> {
    let state = Arc::new(AppState { api });

    // Configure CORS for browser frontends
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the router
    let app = Router::new()
        .route("/health", get(handle_health))
        .route(
            "/api/v1/manufacturers",
            post(handle_add_manufacturers).get(handle_list_manufacturers),
        )
        .route("/api/v1/manufacturers/match", post(handle_match))
        .route("/api/v1/manufacturers/featured", get(handle_featured))
        .route("/api/v1/manufacturers/:id", get(handle_get_manufacturer))
        .route(
            "/api/v1/planner/:product/operations",
            get(handle_process_sheet),
        )
        .route("/api/v1/planner/:product/variants", post(handle_variants))
        .route(
            "/api/v1/planner/:product/inspection",
            get(handle_inspection),
        )
        .layer(cors)
        .with_state(state);

    // Parse the address
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    // Bind to the address
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let actual_addr = listener.local_addr()?;

    info!("Server listening on {}", actual_addr);

    // Spawn the server in the background
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server error");
    });

    Ok(actual_addr)
}
