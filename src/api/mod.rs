//! HTTP API - envelopes, handlers, and routing

pub mod envelope;
pub mod handlers;
pub mod routes;

pub use routes::create_router;
