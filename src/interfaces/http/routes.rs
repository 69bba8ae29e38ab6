//! Route configuration for the receipt API.
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | POST | /receipts/process | `process_receipt` |
//! | GET | /receipts/{id}/points | `get_points` |

use axum::Router;
use axum::routing::{get, post};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use super::error::panic_response;
use super::handlers::{get_points, process_receipt};
use crate::application::engine::ReceiptProcessor;

/// Builds the router with request tracing and per-request panic recovery.
pub fn create_router(processor: ReceiptProcessor) -> Router {
    Router::new()
        .route("/receipts/process", post(process_receipt))
        .route("/receipts/{id}/points", get(get_points))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .with_state(processor)
}
