use crate::database::stored::StoredDocument;
use async_trait::async_trait;
use folio_api::document::{StoreError, StoreResult};
use futures_util::TryStreamExt;
use mongodb::bson::{self, doc, Document as BsonDocument};
use mongodb::{Client as MongoClient, Collection, Database};
use std::sync::Arc;

/// DocumentRepository trait 定义文档的数据访问操作
#[async_trait]
pub trait DocumentRepository: Send + Sync {
    async fn find(&self, collection: &str, key: &str) -> StoreResult<Option<StoredDocument>>;
    async fn scan(&self, collection: &str) -> StoreResult<Vec<StoredDocument>>;
    async fn save(&self, document: StoredDocument) -> StoreResult<()>;
    async fn delete(&self, collection: &str, key: &str) -> StoreResult<bool>;
}

/// MongoDocumentRepository 使用MongoDB实现的Repository
///
/// 文档主键写入 `_id` 字段，其余字段原样存储。
pub struct MongoDocumentRepository {
    db: Database,
}

impl MongoDocumentRepository {
    pub fn new(client: Arc<MongoClient>, database: &str) -> Self {
        Self {
            db: client.database(database),
        }
    }

    fn collection(&self, name: &str) -> Collection<BsonDocument> {
        self.db.collection(name)
    }

    fn decode(collection: &str, mut raw: BsonDocument) -> StoreResult<StoredDocument> {
        let invalid = |message: String| StoreError::InvalidDocument {
            collection: collection.to_string(),
            message,
        };

        let key = raw
            .get_str("_id")
            .map(str::to_string)
            .map_err(|e| invalid(format!("missing string _id: {}", e)))?;
        raw.remove("_id");

        let data: serde_json::Value = bson::from_document(raw)
            .map_err(|e| invalid(e.to_string()))?;

        Ok(StoredDocument::new(collection, key, data))
    }
}

#[async_trait]
impl DocumentRepository for MongoDocumentRepository {
    async fn find(&self, collection: &str, key: &str) -> StoreResult<Option<StoredDocument>> {
        let found = self
            .collection(collection)
            .find_one(doc! { "_id": key })
            .await
            .map_err(StoreError::backend)?;

        found.map(|raw| Self::decode(collection, raw)).transpose()
    }

    async fn scan(&self, collection: &str) -> StoreResult<Vec<StoredDocument>> {
        let cursor = self
            .collection(collection)
            .find(doc! {})
            .await
            .map_err(StoreError::backend)?;

        let raws: Vec<BsonDocument> = cursor.try_collect().await.map_err(StoreError::backend)?;
        raws.into_iter()
            .map(|raw| Self::decode(collection, raw))
            .collect()
    }

    async fn save(&self, document: StoredDocument) -> StoreResult<()> {
        let mut raw = bson::to_document(&document.data).map_err(|e| StoreError::InvalidDocument {
            collection: document.collection.clone(),
            message: e.to_string(),
        })?;
        raw.insert("_id", document.key.clone());

        self.collection(&document.collection)
            .replace_one(doc! { "_id": document.key.as_str() }, raw)
            .upsert(true)
            .await
            .map_err(StoreError::backend)?;

        Ok(())
    }

    async fn delete(&self, collection: &str, key: &str) -> StoreResult<bool> {
        let result = self
            .collection(collection)
            .delete_one(doc! { "_id": key })
            .await
            .map_err(StoreError::backend)?;

        Ok(result.deleted_count > 0)
    }
}
