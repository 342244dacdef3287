use crate::database::repository::DocumentRepository;
use crate::database::stored::StoredDocument;
use async_trait::async_trait;
use folio_api::document::StoreResult;
use indexmap::IndexMap;
use serde_json::Value;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// 基于内存的Repository实现
///
/// 用于本地开发和测试，集合内按写入顺序返回文档。
#[derive(Default)]
pub struct InMemoryDocumentRepository {
    collections: RwLock<HashMap<String, IndexMap<String, Value>>>,
}

impl InMemoryDocumentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 集合中的文档数量
    #[cfg(test)]
    pub async fn count(&self, collection: &str) -> usize {
        self.collections
            .read()
            .await
            .get(collection)
            .map(IndexMap::len)
            .unwrap_or(0)
    }
}

#[async_trait]
impl DocumentRepository for InMemoryDocumentRepository {
    async fn find(&self, collection: &str, key: &str) -> StoreResult<Option<StoredDocument>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|docs| docs.get(key))
            .map(|data| StoredDocument::new(collection, key, data.clone())))
    }

    async fn scan(&self, collection: &str) -> StoreResult<Vec<StoredDocument>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .map(|(key, data)| StoredDocument::new(collection, key.clone(), data.clone()))
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn save(&self, document: StoredDocument) -> StoreResult<()> {
        let mut collections = self.collections.write().await;
        collections
            .entry(document.collection)
            .or_default()
            .insert(document.key, document.data);
        Ok(())
    }

    async fn delete(&self, collection: &str, key: &str) -> StoreResult<bool> {
        let mut collections = self.collections.write().await;
        Ok(collections
            .get_mut(collection)
            .and_then(|docs| docs.shift_remove(key))
            .is_some())
    }
}
