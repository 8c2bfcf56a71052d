use crate::error::{parse_body, ApiError, ErrorResponse};
use crate::models::{Item, ItemRequest};
use crate::routes;
use crate::state::AppState;
use axum::{body::Bytes, extract::State, http::StatusCode, Json};

/// POST /shopping-items handler - Create an item
///
/// The id is always assigned by the server; an `id` sent by the client is
/// ignored.
#[utoipa::path(
    post,
    path = routes::ITEMS,
    request_body = ItemRequest,
    responses(
        (status = 201, description = "Item created", body = Item),
        (status = 400, description = "Body is not {\"name\": string}", body = ErrorResponse)
    ),
    tag = "shopping-items"
)]
pub async fn create_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let request: ItemRequest = parse_body(&body)?;
    tracing::debug!("Decoded request body: {:?}", request);

    let item = state.store.create(request.name).await;

    tracing::info!("Successfully created item with id: {}", item.id);
    Ok((StatusCode::CREATED, Json(item)))
}
