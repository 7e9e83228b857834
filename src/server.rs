//! HTTP adapter exposing the gateway over axum.
//!
//! The handlers only translate between HTTP and [`Gateway`]: prompt
//! validation and provider calls live in the gateway itself. Invalid
//! requests surface as 400 with their message; everything else becomes a
//! generic 500 so upstream detail never leaks to the caller.

use crate::gateway::Gateway;
use crate::models::{ErrorResponse, ImageRequest, ImageResponse, TextRequest, TextResponse};
use crate::{Error, Result};
use axum::{
    extract::{Json, State},
    http::StatusCode,
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

#[derive(Clone)]
struct AppState {
    gateway: Arc<Gateway>,
}

/// Build the application router around a gateway instance.
pub fn router(gateway: Arc<Gateway>) -> Router {
    let state = AppState { gateway };

    Router::new()
        .route("/", get(liveness_handler))
        .route("/api/text", post(text_handler))
        .route("/api/image", post(image_handler))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Bind the listen port and serve until shutdown.
pub async fn serve(gateway: Arc<Gateway>, port: u16) -> Result<()> {
    let app = router(gateway);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server running on port {}", port);

    axum::serve(listener, app).await?;
    Ok(())
}

async fn liveness_handler() -> &'static str {
    "Generation gateway is running"
}

async fn text_handler(
    State(state): State<AppState>,
    Json(request): Json<TextRequest>,
) -> std::result::Result<Json<TextResponse>, (StatusCode, Json<ErrorResponse>)> {
    state
        .gateway
        .generate_text(request)
        .await
        .map(Json)
        .map_err(|e| error_response(e, "Failed to generate text"))
}

async fn image_handler(
    State(state): State<AppState>,
    Json(request): Json<ImageRequest>,
) -> std::result::Result<Json<ImageResponse>, (StatusCode, Json<ErrorResponse>)> {
    state
        .gateway
        .generate_images(request)
        .await
        .map(Json)
        .map_err(|e| error_response(e, "Failed to generate images"))
}

fn error_response(error: Error, generic_message: &str) -> (StatusCode, Json<ErrorResponse>) {
    match error {
        Error::InvalidRequest(message) => {
            (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: message }))
        }
        // The cause was already logged at the point of failure.
        _ => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: generic_message.to_string(),
            }),
        ),
    }
}
