use crate::error::{parse_item_id, ApiError, ErrorResponse};
use crate::routes;
use crate::state::AppState;
use axum::{extract::Path, extract::State, http::StatusCode};

/// DELETE /shopping-items/{id} handler - Remove an item
///
/// Removal is idempotent: an id that names no item still answers 204. Only a
/// malformed id is rejected.
#[utoipa::path(
    delete,
    path = routes::ITEM,
    params(
        ("id" = String, Path, description = "UUID of the item")
    ),
    responses(
        (status = 204, description = "Item removed, or was already absent"),
        (status = 400, description = "Invalid UUID format", body = ErrorResponse)
    ),
    tag = "shopping-items"
)]
pub async fn remove_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_item_id(&id_str)?;

    if state.store.remove(id).await {
        tracing::info!("Successfully removed item with id: {}", id);
    } else {
        tracing::debug!("No item to remove with id: {}", id);
    }

    Ok(StatusCode::NO_CONTENT)
}

/// PUT/DELETE /shopping-items/ handler - the id segment is empty
pub async fn missing_id_handler() -> ApiError {
    ApiError::MissingId
}
