use std::sync::Arc;

use thiserror::Error;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::models::Item;

/// Errors reported by the item store
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("item not found: {0}")]
    NotFound(Uuid),
}

/// In-memory collection of shopping items
///
/// Cloning the store yields another handle onto the same collection. All
/// operations go through one mutex and hold it only for the scan or edit
/// itself, so each operation is atomic with respect to the others.
#[derive(Clone, Default)]
pub struct ItemStore {
    items: Arc<Mutex<Vec<Item>>>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every item, in insertion order
    pub async fn list(&self) -> Vec<Item> {
        self.items.lock().await.clone()
    }

    pub async fn count(&self) -> usize {
        self.items.lock().await.len()
    }

    /// Append a new item under a freshly generated id
    pub async fn create(&self, name: String) -> Item {
        let mut items = self.items.lock().await;

        let mut id = Uuid::new_v4();
        while items.iter().any(|item| item.id == id) {
            id = Uuid::new_v4();
        }

        let item = Item { id, name };
        items.push(item.clone());
        tracing::debug!("Created item with id: {}", id);
        item
    }

    /// Rename the item with the given id, keeping its id
    pub async fn update(&self, id: Uuid, name: String) -> Result<Item, StoreError> {
        let mut items = self.items.lock().await;

        let item = items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(StoreError::NotFound(id))?;
        item.name = name;

        Ok(item.clone())
    }

    /// Remove the item with the given id
    ///
    /// Returns whether an item was removed. Removing an unknown id is not an
    /// error.
    pub async fn remove(&self, id: Uuid) -> bool {
        let mut items = self.items.lock().await;

        match items.iter().position(|item| item.id == id) {
            Some(index) => {
                items.remove(index);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[tokio::test]
    async fn test_list_empty() {
        let store = ItemStore::new();
        assert!(store.list().await.is_empty());
    }

    #[tokio::test]
    async fn test_create_then_list() {
        let store = ItemStore::new();

        let created = store.create("Peanut butter".to_string()).await;
        assert!(!created.id.is_nil());
        assert_eq!(created.name, "Peanut butter");

        let items = store.list().await;
        let matching: Vec<_> = items.iter().filter(|i| i.name == "Peanut butter").collect();
        assert_eq!(matching.len(), 1);
        assert_eq!(matching[0], &created);
    }

    #[tokio::test]
    async fn test_create_assigns_unique_ids() {
        let store = ItemStore::new();

        let mut ids = HashSet::new();
        for n in 0..200 {
            let item = store.create(format!("item {}", n)).await;
            assert!(ids.insert(item.id), "duplicate id {}", item.id);
        }
        assert_eq!(store.count().await, 200);
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let store = ItemStore::new();
        let a = store.create("a".to_string()).await;
        let b = store.create("b".to_string()).await;
        let c = store.create("c".to_string()).await;

        assert_eq!(store.list().await, vec![a, b, c]);
    }

    #[tokio::test]
    async fn test_update_changes_only_target_name() {
        let store = ItemStore::new();
        let first = store.create("Bread".to_string()).await;
        let second = store.create("Butter".to_string()).await;

        let updated = store.update(first.id, "Rye bread".to_string()).await.unwrap();
        assert_eq!(updated.id, first.id);
        assert_eq!(updated.name, "Rye bread");

        let items = store.list().await;
        assert_eq!(items, vec![updated, second]);
    }

    #[tokio::test]
    async fn test_update_missing_leaves_store_unchanged() {
        let store = ItemStore::new();
        store.create("Apples".to_string()).await;
        store.create("Pears".to_string()).await;
        let before = store.list().await;

        let missing = Uuid::new_v4();
        let result = store.update(missing, "Plums".to_string()).await;

        assert_eq!(result, Err(StoreError::NotFound(missing)));
        assert_eq!(store.list().await, before);
    }

    #[tokio::test]
    async fn test_remove_existing() {
        let store = ItemStore::new();
        let keep = store.create("Rice".to_string()).await;
        let gone = store.create("Beans".to_string()).await;

        assert!(store.remove(gone.id).await);

        let items = store.list().await;
        assert_eq!(items.len(), 1);
        assert!(!items.iter().any(|i| i.id == gone.id));
        assert_eq!(items[0], keep);
    }

    #[tokio::test]
    async fn test_remove_missing_is_noop() {
        let store = ItemStore::new();
        store.create("Salt".to_string()).await;
        let before = store.list().await;

        assert!(!store.remove(Uuid::new_v4()).await);
        assert_eq!(store.list().await, before);
    }

    #[tokio::test]
    async fn test_remove_twice() {
        let store = ItemStore::new();
        let item = store.create("Tea".to_string()).await;

        assert!(store.remove(item.id).await);
        assert!(!store.remove(item.id).await);
        assert!(store.list().await.is_empty());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_creates() {
        let store = ItemStore::new();
        let count = 100;

        let handles: Vec<_> = (0..count)
            .map(|n| {
                let store = store.clone();
                tokio::spawn(async move { store.create(format!("item {}", n)).await })
            })
            .collect();

        let mut ids = HashSet::new();
        for handle in handles {
            let item = handle.await.unwrap();
            ids.insert(item.id);
        }

        assert_eq!(ids.len(), count);
        let items = store.list().await;
        assert_eq!(items.len(), count);
        let names: HashSet<_> = items.iter().map(|i| i.name.clone()).collect();
        assert_eq!(names.len(), count);
    }
}
