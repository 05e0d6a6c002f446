//! Turns handler panics into the JSON internal-error response

use axum::response::{IntoResponse, Response};
use std::any::Any;
use tower_http::catch_panic::CatchPanicLayer;
use tracing::error;

use crate::error::AppError;

/// Signature of [`handle_panic`], as stored in the layer
pub type PanicHandler = fn(Box<dyn Any + Send + 'static>) -> Response;

/// Panic-catching layer wired to [`handle_panic`]
pub fn layer() -> CatchPanicLayer<PanicHandler> {
    CatchPanicLayer::custom(handle_panic as PanicHandler)
}

/// Render a caught panic as the internal-error envelope
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let message = panic_message(payload.as_ref());
    error!(panic = %message, "Request handler panicked");

    AppError::Panic(message).into_response()
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}
