//! HTTP request handlers

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::api::envelope::{
    HealthResponse, InfoResponse, LoadFailureResponse, NotFoundResponse, RawErrorResponse,
    ScrapingFailedResponse, SuccessResponse,
};
use crate::gateway::{
    classify::producer_failure,
    health_check::{self, HealthStatus},
};
use crate::AppState;

/// `GET /` - scraped data wrapped with status and server metadata
pub async fn home(State(state): State<Arc<AppState>>) -> Response {
    let document = match state.source.load().await {
        Ok(document) => document,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(LoadFailureResponse::new(e.to_string())),
            )
                .into_response();
        }
    };

    if let Some(failure) = producer_failure(&document) {
        warn!(error = %failure.message, "Producer reported a failed scrape");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ScrapingFailedResponse::new(failure.message, document)),
        )
            .into_response();
    }

    let body = SuccessResponse::new(document, state.source.describe());
    (StatusCode::OK, Json(body)).into_response()
}

/// `GET /raw` - the document exactly as the producer wrote it.
///
/// An embedded `error` flag is passed through untouched.
pub async fn raw(State(state): State<Arc<AppState>>) -> Response {
    match state.source.load().await {
        Ok(document) => (StatusCode::OK, Json(document)).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(RawErrorResponse { error: e.to_string() }),
        )
            .into_response(),
    }
}

/// `GET /health`
pub async fn health(State(state): State<Arc<AppState>>) -> Response {
    let report = health_check::check(state.source.as_ref()).await;

    let status = match report.status {
        HealthStatus::Healthy => StatusCode::OK,
        HealthStatus::Degraded => StatusCode::SERVICE_UNAVAILABLE,
    };

    (status, Json(HealthResponse::from(&report))).into_response()
}

/// `GET /info`
pub async fn info() -> Json<InfoResponse> {
    Json(InfoResponse::new())
}

/// Fallback for every unmatched path
pub async fn not_found(uri: Uri) -> impl IntoResponse {
    debug!(path = %uri.path(), "No route matched");
    (StatusCode::NOT_FOUND, Json(NotFoundResponse::new()))
}
