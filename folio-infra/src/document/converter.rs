use crate::database::StoredDocument;
use folio_api::document::{Document, StoreError, StoreResult};

/// DocumentConverter 负责Document和StoredDocument之间的转换
pub trait DocumentConverter: Send + Sync {
    fn convert_to<D: Document>(&self, document: &D) -> StoreResult<StoredDocument>;
    fn convert_from<D: Document>(&self, stored: StoredDocument) -> StoreResult<D>;
}

/// JsonDocumentConverter 使用JSON序列化的转换器
pub struct JsonDocumentConverter;

impl DocumentConverter for JsonDocumentConverter {
    fn convert_to<D: Document>(&self, document: &D) -> StoreResult<StoredDocument> {
        let data = serde_json::to_value(document)?;
        if !data.is_object() {
            return Err(StoreError::InvalidDocument {
                collection: D::COLLECTION.to_string(),
                message: "document must serialize to a JSON object".to_string(),
            });
        }
        Ok(StoredDocument::new(D::COLLECTION, document.key(), data))
    }

    fn convert_from<D: Document>(&self, stored: StoredDocument) -> StoreResult<D> {
        serde_json::from_value(stored.data).map_err(|e| StoreError::InvalidDocument {
            collection: stored.collection,
            message: format!("{} ({})", e, stored.key),
        })
    }
}
