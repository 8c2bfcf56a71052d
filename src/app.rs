use axum::{
    routing::{get, put},
    Router,
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::handlers::{
    create_handler, health_handler, list_handler, missing_id_handler, remove_handler,
    update_handler,
};
use crate::routes;
use crate::state::AppState;

/// Build the application router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(routes::HEALTH, get(health_handler))
        .route(routes::ITEMS, get(list_handler).post(create_handler))
        .route(routes::ITEM, put(update_handler).delete(remove_handler))
        .route(
            routes::ITEM_MISSING_ID,
            put(missing_id_handler).delete(missing_id_handler),
        )
        .merge(SwaggerUi::new(routes::SWAGGER_UI).url(routes::OPENAPI_JSON, ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
