//! Document store seam. `MongoStore` talks to MongoDB; `MemoryStore` keeps
//! collections in-process and backs the tests.

mod codec;
mod memory;
mod mongo;

pub use codec::{document_to_json, json_to_document};
pub use memory::MemoryStore;
pub use mongo::MongoStore;

use crate::config::{Settings, StoreKind};
use crate::error::GatewayError;
use async_trait::async_trait;
use bson::{oid::ObjectId, Document};
use std::sync::Arc;

/// Name of the identifier field every stored document carries.
pub const ID_FIELD: &str = "_id";

/// Single-document operations against named collections. Each call is one
/// store round trip; nothing spans calls.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// All documents in insertion order.
    async fn find_all(&self, collection: &str) -> Result<Vec<Document>, GatewayError>;

    async fn find_by_id(&self, collection: &str, id: ObjectId) -> Result<Option<Document>, GatewayError>;

    /// Insert `doc`, which must not carry an `_id`. Returns the assigned id.
    async fn insert(&self, collection: &str, doc: Document) -> Result<ObjectId, GatewayError>;

    /// Merge `fields` into the matching document. Returns whether a document matched.
    async fn set_fields(&self, collection: &str, id: ObjectId, fields: Document) -> Result<bool, GatewayError>;

    /// Returns whether a document was deleted.
    async fn delete_by_id(&self, collection: &str, id: ObjectId) -> Result<bool, GatewayError>;

    async fn ping(&self) -> Result<(), GatewayError>;

    /// Release connections. Called once after the server has drained.
    async fn shutdown(&self) {}
}

/// Open the store selected by `settings` against `database`.
pub async fn open(settings: &Settings, database: &str) -> Result<Arc<dyn DocumentStore>, GatewayError> {
    match settings.store {
        StoreKind::Memory => Ok(Arc::new(MemoryStore::new())),
        StoreKind::Mongo => Ok(Arc::new(MongoStore::connect(&settings.mongodb_uri, database).await?)),
    }
}
