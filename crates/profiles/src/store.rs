//! Document store abstraction.
//!
//! Bandly keeps profiles in a key-addressed document store. The production
//! implementation is [`crate::firestore::FirestoreClient`]; [`MemoryStore`]
//! backs integration tests with the same create-or-replace semantics.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::document::Fields;
use crate::errors::StoreError;

/// A key-addressed document store with create-or-replace writes.
#[async_trait]
pub trait DocumentStore {
    /// Writes `fields` as the full document at `collection/key`, replacing
    /// any existing document under that key.
    async fn set(&self, collection: &str, key: &str, fields: &Fields) -> Result<(), StoreError>;
}

/// In-memory [`DocumentStore`] used by integration tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: Mutex<HashMap<(String, String), Fields>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents in `collection`.
    pub async fn len(&self, collection: &str) -> usize {
        let documents = self.documents.lock().await;
        documents.keys().filter(|(c, _)| c == collection).count()
    }

    /// Returns a copy of the document at `collection/key`, if present.
    pub async fn get(&self, collection: &str, key: &str) -> Option<Fields> {
        let documents = self.documents.lock().await;
        documents
            .get(&(collection.to_string(), key.to_string()))
            .cloned()
    }

    /// All document keys in `collection`, sorted.
    pub async fn keys(&self, collection: &str) -> Vec<String> {
        let documents = self.documents.lock().await;
        let mut keys: Vec<String> = documents
            .keys()
            .filter(|(c, _)| c == collection)
            .map(|(_, k)| k.clone())
            .collect();
        keys.sort();
        keys
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn set(&self, collection: &str, key: &str, fields: &Fields) -> Result<(), StoreError> {
        let mut documents = self.documents.lock().await;
        documents.insert((collection.to_string(), key.to_string()), fields.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Value;

    #[tokio::test]
    async fn test_set_overwrites_existing_document() {
        let store = MemoryStore::new();

        let mut first = Fields::new();
        first.insert("bandName".to_string(), Value::from("Band 1"));
        store.set("profiles", "test_1", &first).await.unwrap();

        let mut second = Fields::new();
        second.insert("bandName".to_string(), Value::from(""));
        store.set("profiles", "test_1", &second).await.unwrap();

        assert_eq!(store.len("profiles").await, 1);
        let document = store.get("profiles", "test_1").await.unwrap();
        assert_eq!(document.get("bandName").and_then(Value::as_str), Some(""));
    }

    #[tokio::test]
    async fn test_collections_are_disjoint() {
        let store = MemoryStore::new();
        let fields = Fields::new();

        store.set("profiles", "test_1", &fields).await.unwrap();
        store.set("venues", "test_1", &fields).await.unwrap();

        assert_eq!(store.len("profiles").await, 1);
        assert_eq!(store.len("venues").await, 1);
        assert_eq!(store.keys("profiles").await, vec!["test_1".to_string()]);
    }
}
