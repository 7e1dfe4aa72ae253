//! In-process document store.
//!
//! # Responsibility
//! - Provide a `DocumentStore` implementation for tests and demos, standing
//!   in for the remote service.
//! - Re-deliver the full contents of a collection to every live subscriber
//!   after any mutation of it.
//!
//! # Invariants
//! - Mutations exist only to stand in for the excluded external write path;
//!   the catalog core never calls them.
//! - All access happens on one cooperative thread; interior mutability is
//!   `RefCell`, not a lock.

use crate::store::{
    Document, DocumentStore, SnapshotSender, StoreError, StoreResult, Subscription, CATEGORIES,
    PEOPLE,
};
use serde_json::Value;
use std::cell::RefCell;
use std::collections::BTreeMap;
use uuid::Uuid;

/// In-memory store holding the two catalog collections.
pub struct MemoryStore {
    collections: RefCell<BTreeMap<String, Vec<Document>>>,
    subscribers: RefCell<Vec<SnapshotSender>>,
}

impl MemoryStore {
    /// Creates a store with the two catalog collections present and empty.
    pub fn new() -> Self {
        let mut collections = BTreeMap::new();
        collections.insert(CATEGORIES.to_string(), Vec::new());
        collections.insert(PEOPLE.to_string(), Vec::new());
        Self {
            collections: RefCell::new(collections),
            subscribers: RefCell::new(Vec::new()),
        }
    }

    /// Inserts one record with a store-minted id and returns that id.
    pub fn insert(&self, collection: &str, fields: Value) -> StoreResult<String> {
        let id = Uuid::new_v4().to_string();
        self.with_collection(collection, |documents| {
            documents.push(Document::new(id.clone(), fields));
        })?;
        self.notify(collection);
        Ok(id)
    }

    /// Replaces the record with the given id, or appends it when absent.
    pub fn upsert(&self, collection: &str, id: &str, fields: Value) -> StoreResult<()> {
        self.with_collection(collection, |documents| {
            match documents.iter_mut().find(|doc| doc.id == id) {
                Some(existing) => existing.fields = fields,
                None => documents.push(Document::new(id, fields)),
            }
        })?;
        self.notify(collection);
        Ok(())
    }

    /// Removes one record. Removed records simply disappear from the next
    /// snapshot; there is no tombstone.
    pub fn remove(&self, collection: &str, id: &str) -> StoreResult<bool> {
        let mut removed = false;
        self.with_collection(collection, |documents| {
            let before = documents.len();
            documents.retain(|doc| doc.id != id);
            removed = documents.len() != before;
        })?;
        if removed {
            self.notify(collection);
        }
        Ok(removed)
    }

    fn with_collection(
        &self,
        collection: &str,
        mutate: impl FnOnce(&mut Vec<Document>),
    ) -> StoreResult<()> {
        let mut collections = self.collections.borrow_mut();
        match collections.get_mut(collection) {
            Some(documents) => {
                mutate(documents);
                Ok(())
            }
            None => Err(StoreError::UnknownCollection(collection.to_string())),
        }
    }

    fn snapshot_of(&self, collection: &str) -> StoreResult<Vec<Document>> {
        self.collections
            .borrow()
            .get(collection)
            .cloned()
            .ok_or_else(|| StoreError::UnknownCollection(collection.to_string()))
    }

    /// Pushes the current contents of `collection` to its live subscribers
    /// and prunes the ones that dropped their subscription.
    fn notify(&self, collection: &str) {
        let Ok(snapshot) = self.snapshot_of(collection) else {
            return;
        };
        self.subscribers.borrow_mut().retain(|sender| {
            if sender.collection() != collection {
                return true;
            }
            sender.deliver(snapshot.clone())
        });
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentStore for MemoryStore {
    fn read_all(&self, collection: &str) -> StoreResult<Vec<Document>> {
        self.snapshot_of(collection)
    }

    fn subscribe(&self, collection: &str) -> StoreResult<Subscription> {
        let snapshot = self.snapshot_of(collection)?;
        let (sender, subscription) = Subscription::channel(collection);
        sender.deliver(snapshot);
        self.subscribers.borrow_mut().push(sender);
        Ok(subscription)
    }
}
