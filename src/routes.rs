// Route path constants - single source of truth for all API paths

pub const HEALTH: &str = "/health";
pub const ITEMS: &str = "/shopping-items";
pub const ITEM: &str = "/shopping-items/{id}";
pub const ITEM_MISSING_ID: &str = "/shopping-items/";

pub const SWAGGER_UI: &str = "/swagger-ui";
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";
