use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single shopping-list entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Item {
    pub id: Uuid,
    pub name: String,
}

/// Request body for create and update
///
/// Only `name` is read. Anything else in the body, a client-chosen `id`
/// included, is ignored.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct ItemRequest {
    pub name: String,
}
