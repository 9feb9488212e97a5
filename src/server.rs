//! HTTP surface: the web UI and the generation API.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::rejection::JsonRejection,
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

use crate::error::GenError;
use crate::generate::generate_encoded;
use crate::ports::ImageGenerator;

static INDEX_HTML: &str = include_str!("../assets/index.html");
static STYLE_CSS: &str = include_str!("../assets/style.css");

/// Shared server state.
///
/// The generator is `None` when no API key was configured at startup; the
/// API route then answers with the key-missing envelope instead of failing
/// at bind time.
#[derive(Clone)]
pub struct AppState {
    /// Image generator port, shared across requests.
    pub generator: Option<Arc<dyn ImageGenerator>>,
}

/// Build the application router.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/style.css", get(style_handler))
        .route("/api/generate", post(generate_handler))
        .fallback(not_found_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind the listener and serve until the process is terminated.
///
/// # Errors
///
/// Returns an error if the port cannot be bound.
pub async fn serve(state: AppState, port: u16) -> Result<(), GenError> {
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server running at http://{addr}");
    axum::serve(listener, create_app(state)).await?;
    Ok(())
}

/// Request body for `POST /api/generate`.
#[derive(Debug, Deserialize)]
struct GenerateRequest {
    #[serde(default)]
    prompt: Option<String>,
}

/// Success body for `POST /api/generate`.
#[derive(Debug, Serialize)]
struct GenerateResponse {
    image: String,
}

/// Error envelope returned by the API route.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ErrorResponse { error: message.into() })).into_response()
}

async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn style_handler() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css")], STYLE_CSS)
}

async fn not_found_handler() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not Found")
}

/// POST /api/generate - generate an image from a text prompt.
///
/// The prompt is validated before the generator is consulted; the external
/// model is never invoked for an empty prompt. All failures surface as the
/// JSON error envelope rather than crashing the server.
async fn generate_handler(
    State(state): State<AppState>,
    body: Result<Json<GenerateRequest>, JsonRejection>,
) -> Response {
    let request = match body {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!("Rejected generation request body: {rejection}");
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, rejection.to_string());
        }
    };

    let Some(prompt) = request.prompt.filter(|p| !p.trim().is_empty()) else {
        warn!("Generation request without a prompt");
        return error_response(StatusCode::BAD_REQUEST, "Prompt is required");
    };

    let Some(generator) = state.generator else {
        warn!("Generation request but no API key is configured");
        return error_response(StatusCode::INTERNAL_SERVER_ERROR, "API Key missing");
    };

    debug!("Generation request received: prompt_len={}", prompt.len());

    match generate_encoded(generator.as_ref(), &prompt).await {
        Ok(image) => {
            info!("Image generated: {} base64 chars, {}", image.data.len(), image.mime_type);
            (StatusCode::OK, Json(GenerateResponse { image: image.data })).into_response()
        }
        Err(GenError::NoImage | GenError::NoCandidate) => {
            warn!("Model reply carried no image");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "No image generated")
        }
        Err(e) => {
            warn!("Generation failed: {e}");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}
