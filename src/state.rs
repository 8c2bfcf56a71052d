use crate::store::ItemStore;

/// Shared application state
#[derive(Clone, Default)]
pub struct AppState {
    pub store: ItemStore,
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            store: ItemStore::new(),
        }
    }
}
