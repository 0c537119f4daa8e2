//! # HTTP API for Invoice Rendering
//!
//! Exposes the template catalog and the render pipeline over JSON.
//!
//! ## Usage
//!
//! ```bash
//! vellum serve --listen 0.0.0.0:8080
//! curl -X POST localhost:8080/api/render/medical -d @invoice.json \
//!      -H 'content-type: application/json'
//! ```
//!
//! ## Routes
//!
//! | Method | Path | Body | Response |
//! |--------|------|------|----------|
//! | GET | `/api/templates` | | template summaries |
//! | GET | `/api/templates/:id` | | full descriptor (404 if unknown) |
//! | POST | `/api/render/:id` | `InvoiceRecord` | `ResolvedDocument` |
//! | POST | `/api/suggest` | `InvoiceRecord[]` | suggestions |
//!
//! Invalid request data answers `422` with `{"error": "..."}`.

mod handlers;
mod state;

pub use state::{AppState, ServerConfig};

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::error::VellumError;
use crate::render::Engine;

/// Build the API router over shared state.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/templates", get(handlers::templates::list))
        .route("/api/templates/:id", get(handlers::templates::get))
        .route("/api/render/:id", post(handlers::render::render))
        .route("/api/suggest", post(handlers::suggest::suggest))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server.
///
/// ## Example
///
/// ```no_run
/// use vellum::Engine;
/// use vellum::server::{serve, ServerConfig};
///
/// # async fn example() -> Result<(), vellum::error::VellumError> {
/// let config = ServerConfig {
///     listen_addr: "0.0.0.0:8080".to_string(),
/// };
///
/// serve(config, Engine::builtin()?).await?;
/// # Ok(())
/// # }
/// ```
pub async fn serve(config: ServerConfig, engine: Engine) -> Result<(), VellumError> {
    let templates = engine.registry().len();
    let app = router(Arc::new(AppState::new(config.clone(), engine)));

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .map_err(|e| {
            VellumError::Transport(format!("Failed to bind to {}: {}", config.listen_addr, e))
        })?;

    tracing::info!(
        listen = %config.listen_addr,
        templates,
        "Vellum HTTP server listening"
    );

    axum::serve(listener, app)
        .await
        .map_err(|e| VellumError::Transport(format!("Server error: {}", e)))?;

    Ok(())
}
