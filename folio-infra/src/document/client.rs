use folio_api::document::{Document, DocumentClient, StoreResult};
use crate::database::DocumentRepository;
use crate::document::converter::{DocumentConverter, JsonDocumentConverter};
use std::sync::Arc;
use async_trait::async_trait;

/// JsonDocumentClient 基于Repository的文档客户端实现
pub struct JsonDocumentClient {
    repository: Arc<dyn DocumentRepository>,
    converter: JsonDocumentConverter,
}

impl JsonDocumentClient {
    pub fn new(repository: Arc<dyn DocumentRepository>) -> Self {
        Self {
            repository,
            converter: JsonDocumentConverter,
        }
    }
}

#[async_trait]
impl DocumentClient for JsonDocumentClient {
    async fn fetch<D: Document>(&self, key: &str) -> StoreResult<Option<D>> {
        match self.repository.find(D::COLLECTION, key).await? {
            Some(stored) => Ok(Some(self.converter.convert_from(stored)?)),
            None => Ok(None),
        }
    }

    async fn list<D: Document>(&self) -> StoreResult<Vec<D>> {
        self.repository
            .scan(D::COLLECTION)
            .await?
            .into_iter()
            .map(|stored| self.converter.convert_from(stored))
            .collect()
    }

    async fn upsert<D: Document>(&self, document: D) -> StoreResult<D> {
        let stored = self.converter.convert_to(&document)?;
        self.repository.save(stored).await?;
        Ok(document)
    }

    async fn delete<D: Document>(&self, key: &str) -> StoreResult<bool> {
        self.repository.delete(D::COLLECTION, key).await
    }
}
