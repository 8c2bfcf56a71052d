use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::store::StoreError;

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub items: usize,
}

/// Custom error type for API endpoints
///
/// Every failure a handler can hit ends up here and is rendered as a JSON
/// `ErrorResponse` with the matching status code.
#[derive(Debug)]
pub enum ApiError {
    /// Item id path segment was empty
    MissingId,
    /// Invalid UUID format in path parameter
    InvalidUuid(String),
    /// Request body is not `{"name": <string>}`
    InvalidBody {
        source: serde_json::Error,
        received: String,
    },
    /// No item with this id
    ItemNotFound(Uuid),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::MissingId => (
                StatusCode::BAD_REQUEST,
                "Item id is required".to_string(),
            ),
            ApiError::InvalidUuid(id) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid UUID format: expected format like '550e8400-e29b-41d4-a716-446655440000', got '{}'", id),
            ),
            ApiError::InvalidBody { source, received } => (
                StatusCode::BAD_REQUEST,
                format!("Invalid request body: {}; received body: '{}'", source, received),
            ),
            ApiError::ItemNotFound(id) => (
                StatusCode::NOT_FOUND,
                format!("Item with id '{}' not found", id),
            ),
        };

        tracing::warn!("Request failed with {}: {}", status, error_message);

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => ApiError::ItemNotFound(id),
        }
    }
}

/// Parse an item id taken from the request path
pub fn parse_item_id(id_str: &str) -> Result<Uuid, ApiError> {
    if id_str.is_empty() {
        return Err(ApiError::MissingId);
    }
    Uuid::parse_str(id_str).map_err(|_| ApiError::InvalidUuid(id_str.to_string()))
}

/// Longest prefix of a rejected body echoed back in the error message
const RECEIVED_BODY_LIMIT: usize = 256;

/// Decode a raw request body, echoing a prefix of it in the error when it does not fit
///
/// The body must be a JSON object. Struct deserialization alone would also
/// take an array of field values in declaration order.
pub fn parse_body<T: serde::de::DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    let invalid = |source: serde_json::Error| ApiError::InvalidBody {
        source,
        received: received_prefix(body),
    };

    let value: serde_json::Value = serde_json::from_slice(body).map_err(invalid)?;
    if !value.is_object() {
        return Err(invalid(<serde_json::Error as serde::de::Error>::custom(
            "expected a JSON object",
        )));
    }
    serde_json::from_value(value).map_err(invalid)
}

fn received_prefix(body: &[u8]) -> String {
    if body.len() <= RECEIVED_BODY_LIMIT {
        return String::from_utf8_lossy(body).into_owned();
    }
    format!(
        "{}... ({} bytes total)",
        String::from_utf8_lossy(&body[..RECEIVED_BODY_LIMIT]),
        body.len()
    )
}
