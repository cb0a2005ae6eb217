//! HTTP front end for the upload page.
//!
//! Routes:
//! - `GET /` — empty page
//! - `POST /` — multipart upload (field `file`), returns the rendered page
//! - `POST /api/analyze` — raw PDF body, returns the page state as JSON
//! - `GET /health` — liveness probe

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{multipart::MultipartError, DefaultBodyLimit, Multipart, State},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use thiserror::Error;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use crate::{page, process_upload, AnalyzerConfig, PageState};

/// Name of the multipart field carrying the PDF.
pub const UPLOAD_FIELD: &str = "file";

// ── Configuration ────────────────────────────────────────────────────────────

/// Listener and request settings for [`serve`].
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Largest accepted request body. `None` accepts any size.
    pub max_upload_bytes: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8501,
            max_upload_bytes: None,
        }
    }
}

/// Shared, read-only request state.
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<AnalyzerConfig>,
}

// ── Errors ───────────────────────────────────────────────────────────────────

/// Request-level failures. Extraction failures are not errors here: they
/// render as the page's error state.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Malformed upload: {0}")]
    Multipart(#[from] MultipartError),
}

#[derive(Serialize)]
struct ErrorResponse {
    success: bool,
    error: String,
    code: &'static str,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ServerError::Multipart(e) => (e.status(), "MALFORMED_UPLOAD"),
        };
        let body = ErrorResponse {
            success: false,
            error: self.to_string(),
            code,
        };
        (status, Json(body)).into_response()
    }
}

// ── Router ───────────────────────────────────────────────────────────────────

/// Build the application router.
pub fn router(analyzer: AnalyzerConfig, max_upload_bytes: Option<usize>) -> Router {
    let state = AppState {
        analyzer: Arc::new(analyzer),
    };
    let limit = match max_upload_bytes {
        Some(max) => DefaultBodyLimit::max(max),
        None => DefaultBodyLimit::disable(),
    };

    Router::new()
        .route("/", get(handle_index).post(handle_upload))
        .route("/api/analyze", post(handle_analyze))
        .route("/health", get(handle_health))
        .layer(limit)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve until the process is stopped.
pub async fn serve(config: ServerConfig, analyzer: AnalyzerConfig) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    info!("Server listening on http://{}", listener.local_addr()?);
    match config.max_upload_bytes {
        Some(max) => info!("Upload limit: {max} bytes"),
        None => info!("Upload limit: none"),
    }
    axum::serve(listener, router(analyzer, config.max_upload_bytes)).await
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// Handler: GET /
async fn handle_index() -> Html<String> {
    Html(page::render_page(&PageState::Empty))
}

/// Handler: POST /
async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Html<String>, ServerError> {
    let mut upload: Option<Bytes> = None;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let file_name = field.file_name().map(str::to_owned);
        let data = field.bytes().await?;
        debug!(?file_name, bytes = data.len(), "received upload");

        // A form submitted without choosing a file sends an empty, unnamed part.
        if data.is_empty() && file_name.as_deref().unwrap_or("").is_empty() {
            continue;
        }
        upload = Some(data);
        break;
    }

    let page_state = process_upload(upload.as_deref(), &state.analyzer);
    Ok(Html(page::render_page(&page_state)))
}

/// Handler: POST /api/analyze
async fn handle_analyze(State(state): State<AppState>, body: Bytes) -> Json<PageState> {
    let upload = (!body.is_empty()).then_some(body.as_ref());
    Json(process_upload(upload, &state.analyzer))
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    service: &'static str,
    version: &'static str,
}

/// Handler: GET /health
async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}
