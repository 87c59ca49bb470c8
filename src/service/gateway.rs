//! Gateway operations over one collection. Create copies only the declared
//! fields; update merges whatever the client sent except `_id`.

use crate::config::ResolvedResource;
use crate::error::GatewayError;
use crate::model::Record;
use crate::store::{document_to_json, json_to_document, DocumentStore, ID_FIELD};
use bson::{oid::ObjectId, Bson, Document};
use serde_json::{Map, Value};

/// A typed record together with its store-assigned id.
#[derive(Clone, Debug, PartialEq)]
pub struct Stored<R> {
    pub id: ObjectId,
    pub record: R,
}

pub struct CollectionGateway<'a> {
    store: &'a dyn DocumentStore,
    resource: &'a ResolvedResource,
}

impl<'a> CollectionGateway<'a> {
    pub fn new(store: &'a dyn DocumentStore, resource: &'a ResolvedResource) -> Self {
        CollectionGateway { store, resource }
    }

    pub fn parse_id(id: &str) -> Result<ObjectId, GatewayError> {
        ObjectId::parse_str(id).map_err(|source| GatewayError::InvalidIdentifier {
            id: id.to_string(),
            source,
        })
    }

    pub async fn list_all(&self) -> Result<Vec<Value>, GatewayError> {
        let docs = self.store.find_all(&self.resource.collection).await?;
        Ok(docs.into_iter().map(document_to_json).collect())
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Value, GatewayError> {
        let oid = Self::parse_id(id)?;
        self.store
            .find_by_id(&self.resource.collection, oid)
            .await?
            .map(document_to_json)
            .ok_or_else(|| GatewayError::NotFound(id.to_string()))
    }

    /// Insert a document holding exactly the declared fields, in declared
    /// order; fields missing from `body` are stored as null.
    pub async fn create(&self, body: &Map<String, Value>) -> Result<ObjectId, GatewayError> {
        let whitelisted: Map<String, Value> = self
            .resource
            .fields
            .iter()
            .map(|f| (f.clone(), body.get(f).cloned().unwrap_or(Value::Null)))
            .collect();
        let doc = json_to_document(whitelisted)?;
        self.store.insert(&self.resource.collection, doc).await
    }

    /// Merge `fields` into the document. Any `_id` in `fields` is dropped first.
    pub async fn update_by_id(&self, id: &str, mut fields: Map<String, Value>) -> Result<ObjectId, GatewayError> {
        let oid = Self::parse_id(id)?;
        fields.remove(ID_FIELD);
        let doc = json_to_document(fields)?;
        if self.store.set_fields(&self.resource.collection, oid, doc).await? {
            Ok(oid)
        } else {
            Err(GatewayError::NotFound(id.to_string()))
        }
    }

    pub async fn delete_by_id(&self, id: &str) -> Result<ObjectId, GatewayError> {
        let oid = Self::parse_id(id)?;
        if self.store.delete_by_id(&self.resource.collection, oid).await? {
            Ok(oid)
        } else {
            Err(GatewayError::NotFound(id.to_string()))
        }
    }

    pub async fn create_record<R: Record>(&self, record: &R) -> Result<ObjectId, GatewayError> {
        let encoded = bson::to_document(record)?;
        let mut doc = Document::new();
        for field in &self.resource.fields {
            doc.insert(field.clone(), encoded.get(field).cloned().unwrap_or(Bson::Null));
        }
        self.store.insert(&self.resource.collection, doc).await
    }

    pub async fn get_record<R: Record>(&self, id: &str) -> Result<Stored<R>, GatewayError> {
        let oid = Self::parse_id(id)?;
        let doc = self
            .store
            .find_by_id(&self.resource.collection, oid)
            .await?
            .ok_or_else(|| GatewayError::NotFound(id.to_string()))?;
        self.decode(doc)
    }

    pub async fn list_records<R: Record>(&self) -> Result<Vec<Stored<R>>, GatewayError> {
        self.store
            .find_all(&self.resource.collection)
            .await?
            .into_iter()
            .map(|doc| self.decode::<R>(doc))
            .collect()
    }

    fn decode<R: Record>(&self, mut doc: Document) -> Result<Stored<R>, GatewayError> {
        let id = match doc.remove(ID_FIELD) {
            Some(Bson::ObjectId(id)) => id,
            _ => return Err(GatewayError::MalformedDocument(self.resource.collection.clone())),
        };
        let record = bson::from_document(doc)?;
        Ok(Stored { id, record })
    }
}
