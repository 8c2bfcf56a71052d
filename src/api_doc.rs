use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse};
use crate::handlers;
use crate::models::{Item, ItemRequest};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "shopping-items API",
        version = "1.0.0",
        description = "A minimal in-memory shopping list"
    ),
    paths(
        handlers::health::health_handler,
        handlers::list::list_handler,
        handlers::create::create_handler,
        handlers::update::update_handler,
        handlers::remove::remove_handler
    ),
    components(
        schemas(
            Item,
            ItemRequest,
            ErrorResponse,
            HealthResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "shopping-items", description = "Shopping item operations")
    )
)]
pub struct ApiDoc;
