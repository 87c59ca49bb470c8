use super::{DocumentStore, ID_FIELD};
use crate::error::GatewayError;
use async_trait::async_trait;
use bson::{oid::ObjectId, Bson, Document};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// In-process store with the same single-document semantics as `MongoStore`.
/// Collections keep insertion order. `set_fields` follows `$set`: dotted keys
/// are nested paths and `$`-prefixed or empty path segments are rejected.
/// Numeric segments do not index into arrays.
#[derive(Debug)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<Document>>>,
    available: AtomicBool,
}

impl Default for MemoryStore {
    fn default() -> Self {
        MemoryStore {
            collections: RwLock::new(HashMap::new()),
            available: AtomicBool::new(true),
        }
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate losing (or regaining) the connection. While unavailable every
    /// call fails with `StoreUnavailable`.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), GatewayError> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(GatewayError::StoreUnavailable("memory store is offline".into()))
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<String, Vec<Document>>>, GatewayError> {
        self.check_available()?;
        self.collections
            .read()
            .map_err(|_| GatewayError::StoreUnavailable("memory store lock poisoned".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<String, Vec<Document>>>, GatewayError> {
        self.check_available()?;
        self.collections
            .write()
            .map_err(|_| GatewayError::StoreUnavailable("memory store lock poisoned".into()))
    }
}

fn has_id(doc: &Document, id: &ObjectId) -> bool {
    doc.get_object_id(ID_FIELD).map(|d| d == *id).unwrap_or(false)
}

/// Assign `value` at the dotted `path`, creating intermediate documents.
fn set_path(doc: &mut Document, path: &str, full_path: &str, value: Bson) -> Result<(), GatewayError> {
    let (head, rest) = match path.split_once('.') {
        Some((head, rest)) => (head, Some(rest)),
        None => (path, None),
    };
    if head.is_empty() || head.starts_with('$') {
        return Err(GatewayError::InvalidUpdate(format!(
            "field path '{}' is not valid for storage",
            full_path
        )));
    }
    let Some(rest) = rest else {
        doc.insert(head, value);
        return Ok(());
    };
    if !doc.contains_key(head) {
        doc.insert(head, Document::new());
    }
    match doc.get_mut(head) {
        Some(Bson::Document(inner)) => set_path(inner, rest, full_path, value),
        _ => Err(GatewayError::InvalidUpdate(format!(
            "cannot create field '{}' in non-document element '{}'",
            rest, head
        ))),
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn find_all(&self, collection: &str) -> Result<Vec<Document>, GatewayError> {
        let collections = self.read()?;
        Ok(collections.get(collection).cloned().unwrap_or_default())
    }

    async fn find_by_id(&self, collection: &str, id: ObjectId) -> Result<Option<Document>, GatewayError> {
        let collections = self.read()?;
        Ok(collections
            .get(collection)
            .and_then(|docs| docs.iter().find(|d| has_id(d, &id)))
            .cloned())
    }

    async fn insert(&self, collection: &str, doc: Document) -> Result<ObjectId, GatewayError> {
        let id = ObjectId::new();
        let mut stored = Document::new();
        stored.insert(ID_FIELD, id);
        for (k, v) in doc {
            if k != ID_FIELD {
                stored.insert(k, v);
            }
        }
        self.write()?.entry(collection.to_string()).or_default().push(stored);
        Ok(id)
    }

    async fn set_fields(&self, collection: &str, id: ObjectId, fields: Document) -> Result<bool, GatewayError> {
        let mut collections = self.write()?;
        let Some(doc) = collections
            .get_mut(collection)
            .and_then(|docs| docs.iter_mut().find(|d| has_id(d, &id)))
        else {
            return Ok(false);
        };
        let mut updated = doc.clone();
        for (k, v) in fields {
            if k != ID_FIELD {
                set_path(&mut updated, &k, &k, v)?;
            }
        }
        *doc = updated;
        Ok(true)
    }

    async fn delete_by_id(&self, collection: &str, id: ObjectId) -> Result<bool, GatewayError> {
        let mut collections = self.write()?;
        let Some(docs) = collections.get_mut(collection) else {
            return Ok(false);
        };
        let before = docs.len();
        docs.retain(|d| !has_id(d, &id));
        Ok(docs.len() < before)
    }

    async fn ping(&self) -> Result<(), GatewayError> {
        self.check_available()
    }
}
