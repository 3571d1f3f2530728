use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::get,
};
use std::sync::Arc;
use thiserror::Error;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::AppState;
use crate::config::AppConfig;
use crate::ui::{Page, render_page};

/// Failures while starting or running the HTTP server.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Build the application router.
///
/// - `GET /` renders the chat page inside the layout.
/// - `GET /healthz` answers `ok`.
/// - `/static` serves `ui.static_dir`.
/// - Anything else renders the 404 page inside the layout.
pub fn router(state: AppState) -> Router {
    let static_dir = ServeDir::new(&state.config.ui.static_dir);

    Router::new()
        .route("/", get(index_handler))
        .route("/healthz", get(health_handler))
        .nest_service("/static", static_dir)
        .fallback(not_found_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the Axum server with the provided configuration.
pub async fn start_server(config: Arc<AppConfig>) -> Result<(), ServerError> {
    let addr = config.bind_addr();
    let app = router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;

    info!(
        name: "server.started",
        address = %addr,
        "Server started"
    );

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// HTML Page Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// GET / - Chat page.
async fn index_handler(State(state): State<AppState>) -> impl IntoResponse {
    Html(render_page(&state.config, Page::Chat))
}

/// Fallback - 404 page inside the layout.
async fn not_found_handler(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Html(render_page(&state.config, Page::NotFound)),
    )
}

/// GET /healthz - Liveness probe.
async fn health_handler() -> &'static str {
    "ok"
}
