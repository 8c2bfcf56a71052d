use crate::error::{parse_body, parse_item_id, ApiError, ErrorResponse};
use crate::models::{Item, ItemRequest};
use crate::routes;
use crate::state::AppState;
use axum::{body::Bytes, extract::Path, extract::State, http::StatusCode, Json};

/// PUT /shopping-items/{id} handler - Rename an item
#[utoipa::path(
    put,
    path = routes::ITEM,
    params(
        ("id" = String, Path, description = "UUID of the item")
    ),
    request_body = ItemRequest,
    responses(
        (status = 200, description = "Item updated", body = Item),
        (status = 400, description = "Invalid UUID format or invalid body", body = ErrorResponse),
        (status = 404, description = "Item not found", body = ErrorResponse)
    ),
    tag = "shopping-items"
)]
pub async fn update_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    body: Bytes,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let id = parse_item_id(&id_str)?;
    let request: ItemRequest = parse_body(&body)?;
    tracing::debug!("Decoded request body: {:?}", request);

    let item = state.store.update(id, request.name).await?;

    tracing::info!("Successfully updated item with id: {}", id);
    Ok((StatusCode::OK, Json(item)))
}
