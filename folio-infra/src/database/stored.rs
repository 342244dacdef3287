use serde::{Deserialize, Serialize};
use serde_json::Value;

/// StoredDocument 是文档在存储层的原始形态
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoredDocument {
    pub collection: String,
    pub key: String,
    pub data: Value,
}

impl StoredDocument {
    pub fn new(collection: impl Into<String>, key: impl Into<String>, data: Value) -> Self {
        Self {
            collection: collection.into(),
            key: key.into(),
            data,
        }
    }
}
