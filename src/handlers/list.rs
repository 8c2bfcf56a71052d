use crate::models::Item;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// GET /shopping-items handler - List every item
///
/// An empty store is answered with an empty array, never an error.
#[utoipa::path(
    get,
    path = routes::ITEMS,
    responses(
        (status = 200, description = "All shopping items in insertion order", body = Vec<Item>)
    ),
    tag = "shopping-items"
)]
pub async fn list_handler(State(state): State<AppState>) -> (StatusCode, Json<Vec<Item>>) {
    let items = state.store.list().await;
    tracing::info!("Listed {} items", items.len());
    (StatusCode::OK, Json(items))
}
