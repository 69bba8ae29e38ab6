//! Receipt HTTP handlers.
//!
//! - `POST /receipts/process` - Score and store a receipt
//! - `GET /receipts/{id}/points` - Fetch the points of a stored receipt

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::Uri;
use percent_encoding::percent_decode_str;
use serde::Serialize;
use serde_json::Value;

use super::error::ApiErrorResponse;
use crate::application::engine::ReceiptProcessor;
use crate::domain::receipt::{Points, ReceiptId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessResponse {
    pub id: ReceiptId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PointsResponse {
    pub points: Points,
}

/// POST /receipts/process
///
/// The body is read as raw bytes and parsed here rather than through the
/// `Json` extractor: the receipt is validated field by field by the rule
/// engine, and an unparseable body is reported with the 500 envelope.
///
/// # Response
///
/// - `200 OK` - `{"id": "..."}`
/// - `400 Bad Request` - The receipt failed validation
/// - `500 Internal Server Error` - Body is not JSON, or storage failed
pub async fn process_receipt(
    State(processor): State<ReceiptProcessor>,
    body: Bytes,
) -> Result<Json<ProcessResponse>, ApiErrorResponse> {
    let receipt: Value = serde_json::from_slice(&body)
        .map_err(|error| ApiErrorResponse::internal(format!("Malformed JSON body: {error}")))?;

    let id = processor.process(&receipt).await?;
    Ok(Json(ProcessResponse { id }))
}

/// GET /receipts/{id}/points
///
/// The id is taken from the raw request path instead of the `Path` extractor,
/// which rejects ids that do not decode to UTF-8 with a plain-text 400.
///
/// # Response
///
/// - `200 OK` - `{"points": 28}`
/// - `400 Bad Request` - The id contains whitespace
/// - `404 Not Found` - No receipt with that id
pub async fn get_points(
    State(processor): State<ReceiptProcessor>,
    uri: Uri,
) -> Result<Json<PointsResponse>, ApiErrorResponse> {
    let points = processor.points(&receipt_id_segment(&uri)).await?;
    Ok(Json(PointsResponse { points }))
}

/// Percent-decodes the `{id}` segment; invalid UTF-8 becomes U+FFFD.
fn receipt_id_segment(uri: &Uri) -> String {
    let segment = uri
        .path()
        .strip_prefix("/receipts/")
        .and_then(|rest| rest.strip_suffix("/points"))
        .unwrap_or_default();
    percent_decode_str(segment).decode_utf8_lossy().into_owned()
}
