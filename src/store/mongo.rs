use super::{DocumentStore, ID_FIELD};
use crate::error::GatewayError;
use async_trait::async_trait;
use bson::{doc, oid::ObjectId, Document};
use futures::TryStreamExt;
use mongodb::options::{ClientOptions, FindOptions};
use mongodb::{Client, Collection, Database};

/// MongoDB-backed store. Owns the driver client (and its pool) for the
/// process lifetime; `shutdown` closes it.
#[derive(Clone, Debug)]
pub struct MongoStore {
    client: Client,
    database: Database,
}

impl MongoStore {
    /// Parse the connection string and build the client. The driver connects
    /// lazily, so this does not fail when the server is down; use `ping`.
    pub async fn connect(uri: &str, database: &str) -> Result<Self, GatewayError> {
        let mut options = ClientOptions::parse(uri).await?;
        options.app_name = Some(env!("CARGO_PKG_NAME").to_string());
        let client = Client::with_options(options)?;
        Ok(MongoStore {
            database: client.database(database),
            client,
        })
    }

    fn collection(&self, name: &str) -> Collection<Document> {
        self.database.collection(name)
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn find_all(&self, collection: &str) -> Result<Vec<Document>, GatewayError> {
        tracing::debug!(collection, "find all");
        let options = FindOptions::builder().sort(doc! { ID_FIELD: 1 }).build();
        let cursor = self.collection(collection).find(doc! {}, options).await?;
        let docs: Vec<Document> = cursor.try_collect().await?;
        Ok(docs)
    }

    async fn find_by_id(&self, collection: &str, id: ObjectId) -> Result<Option<Document>, GatewayError> {
        tracing::debug!(collection, %id, "find one");
        Ok(self
            .collection(collection)
            .find_one(doc! { ID_FIELD: id }, None)
            .await?)
    }

    async fn insert(&self, collection: &str, doc: Document) -> Result<ObjectId, GatewayError> {
        let id = ObjectId::new();
        let mut stored = doc! { ID_FIELD: id };
        for (k, v) in doc {
            if k != ID_FIELD {
                stored.insert(k, v);
            }
        }
        tracing::debug!(collection, %id, "insert one");
        self.collection(collection).insert_one(stored, None).await?;
        Ok(id)
    }

    async fn set_fields(&self, collection: &str, id: ObjectId, fields: Document) -> Result<bool, GatewayError> {
        tracing::debug!(collection, %id, fields = fields.len(), "update one");
        let filter = doc! { ID_FIELD: id };
        // An empty $set is rejected by the server; only report whether the document exists.
        if fields.is_empty() {
            let count = self.collection(collection).count_documents(filter, None).await?;
            return Ok(count > 0);
        }
        let result = self
            .collection(collection)
            .update_one(filter, doc! { "$set": fields }, None)
            .await?;
        Ok(result.matched_count > 0)
    }

    async fn delete_by_id(&self, collection: &str, id: ObjectId) -> Result<bool, GatewayError> {
        tracing::debug!(collection, %id, "delete one");
        let result = self
            .collection(collection)
            .delete_one(doc! { ID_FIELD: id }, None)
            .await?;
        Ok(result.deleted_count > 0)
    }

    async fn ping(&self) -> Result<(), GatewayError> {
        self.database.run_command(doc! { "ping": 1 }, None).await?;
        Ok(())
    }

    async fn shutdown(&self) {
        tracing::info!("closing MongoDB client");
        self.client.clone().shutdown().await;
    }
}
