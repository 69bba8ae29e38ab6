//! HTTP interface: axum router, handlers and JSON error envelopes.

pub mod error;
pub mod handlers;
pub mod routes;

pub use routes::create_router;
