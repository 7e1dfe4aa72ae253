//! Remote document-store boundary.
//!
//! # Responsibility
//! - Define the wire shape of raw records (`Document`) and the read/subscribe
//!   contract the catalog consumes (`DocumentStore`).
//! - Deliver change notifications as immutable full-collection snapshots over
//!   a channel, so the projection layer is a reducer rather than a callback
//!   registry.
//!
//! # Invariants
//! - A snapshot always carries the full current contents of one collection;
//!   there are no incremental patches and no deletion tombstones.
//! - Snapshots for one collection arrive in delivery order; snapshots for
//!   different collections are not coordinated with each other.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::mpsc::{channel, Receiver, Sender, TryRecvError};

pub mod memory;

pub use memory::MemoryStore;

/// Collection name for category records.
pub const CATEGORIES: &str = "categories";
/// Collection name for person records.
pub const PEOPLE: &str = "people";

pub type StoreResult<T> = Result<T, StoreError>;

/// Store boundary error.
#[derive(Debug)]
pub enum StoreError {
    /// The named collection does not exist in the store.
    UnknownCollection(String),
    /// The store could not serve the request at all.
    Unavailable(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCollection(name) => write!(f, "unknown collection: `{name}`"),
            Self::Unavailable(message) => write!(f, "store unavailable: {message}"),
        }
    }
}

impl Error for StoreError {}

/// One raw record as delivered by the remote store.
///
/// The store assigns opaque string ids; `fields` is loosely structured JSON
/// with no schema enforcement. All presence/shape interpretation happens in
/// the model layer, never here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub fields: Value,
}

impl Document {
    pub fn new(id: impl Into<String>, fields: Value) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }

    /// Returns a string field normalized to presence-or-default: missing,
    /// non-string and blank values all read as `None`.
    pub fn text_field(&self, name: &str) -> Option<String> {
        let value = self.fields.get(name)?.as_str()?.trim();
        if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    }

    /// Returns an integer field, tolerating absence and wrong types.
    pub fn int_field(&self, name: &str) -> Option<i64> {
        self.fields.get(name)?.as_i64()
    }

    /// Returns a string-array field as the subsequence of its non-empty
    /// string elements, preserving order. Anything else reads as empty.
    pub fn text_list_field(&self, name: &str) -> Vec<String> {
        let Some(values) = self.fields.get(name).and_then(Value::as_array) else {
            return Vec::new();
        };
        values
            .iter()
            .filter_map(Value::as_str)
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Live subscription to one collection.
///
/// Wraps the receiving end of the snapshot channel. Dropping the subscription
/// unsubscribes: the store notices the closed channel on its next delivery
/// attempt and prunes the sender.
pub struct Subscription {
    collection: String,
    receiver: Receiver<Vec<Document>>,
}

impl Subscription {
    /// Creates a connected sender/subscription pair for one collection.
    pub fn channel(collection: impl Into<String>) -> (SnapshotSender, Subscription) {
        let collection = collection.into();
        let (sender, receiver) = channel();
        (
            SnapshotSender {
                collection: collection.clone(),
                sender,
            },
            Subscription {
                collection,
                receiver,
            },
        )
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// Returns the next pending snapshot without blocking, oldest first.
    pub fn poll(&self) -> Option<Vec<Document>> {
        match self.receiver.try_recv() {
            Ok(snapshot) => Some(snapshot),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }
}

/// Store-side handle delivering snapshots to one subscriber.
pub struct SnapshotSender {
    collection: String,
    sender: Sender<Vec<Document>>,
}

impl SnapshotSender {
    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// Delivers one full snapshot. Returns `false` when the subscriber is
    /// gone and this sender can be discarded.
    pub fn deliver(&self, documents: Vec<Document>) -> bool {
        self.sender.send(documents).is_ok()
    }
}

/// Read/subscribe capability of the remote document store.
///
/// The catalog only ever consumes this contract; every write path lives
/// outside the core.
pub trait DocumentStore {
    /// One-shot bulk read of a named collection.
    fn read_all(&self, collection: &str) -> StoreResult<Vec<Document>>;

    /// Continuous push of the full current collection contents. The current
    /// contents are delivered as the first snapshot so subscribers never
    /// start from a gap.
    fn subscribe(&self, collection: &str) -> StoreResult<Subscription>;
}

impl<S: DocumentStore + ?Sized> DocumentStore for std::rc::Rc<S> {
    fn read_all(&self, collection: &str) -> StoreResult<Vec<Document>> {
        (**self).read_all(collection)
    }

    fn subscribe(&self, collection: &str) -> StoreResult<Subscription> {
        (**self).subscribe(collection)
    }
}

#[cfg(test)]
mod tests {
    use super::{Document, Subscription};
    use serde_json::json;

    #[test]
    fn text_field_normalizes_blank_missing_and_mistyped_values() {
        let doc = Document::new(
            "d1",
            json!({"name": "  Ada Lovelace ", "dob": "", "dod": 42}),
        );
        assert_eq!(doc.text_field("name").as_deref(), Some("Ada Lovelace"));
        assert_eq!(doc.text_field("dob"), None);
        assert_eq!(doc.text_field("dod"), None);
        assert_eq!(doc.text_field("absent"), None);
    }

    #[test]
    fn text_list_field_keeps_only_non_empty_strings_in_order() {
        let doc = Document::new("d1", json!({"tags": ["maths", "", 7, " pioneer "]}));
        assert_eq!(doc.text_list_field("tags"), vec!["maths", "pioneer"]);
        assert!(doc.text_list_field("absent").is_empty());
    }

    #[test]
    fn subscription_poll_returns_snapshots_in_delivery_order() {
        let (sender, subscription) = Subscription::channel("people");
        assert!(sender.deliver(vec![Document::new("a", json!({}))]));
        assert!(sender.deliver(vec![]));

        let first = subscription.poll().expect("first snapshot pending");
        assert_eq!(first.len(), 1);
        let second = subscription.poll().expect("second snapshot pending");
        assert!(second.is_empty());
        assert!(subscription.poll().is_none());
    }

    #[test]
    fn deliver_reports_dropped_subscriber() {
        let (sender, subscription) = Subscription::channel("categories");
        drop(subscription);
        assert!(!sender.deliver(vec![]));
    }
}
