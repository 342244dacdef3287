pub mod client;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Document trait 是所有持久化文档的基础trait
///
/// 每种文档存放在一个具名集合中，并以 `key()` 作为主键。
pub trait Document: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// 文档所在的集合名称
    const COLLECTION: &'static str;

    /// 文档主键
    fn key(&self) -> &str;
}

/// 持久化层错误
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Backend error: {0}")]
    Backend(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid document in collection {collection}: {message}")]
    InvalidDocument { collection: String, message: String },
}

impl StoreError {
    pub fn backend(err: impl std::fmt::Display) -> Self {
        StoreError::Backend(err.to_string())
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

// DocumentClient trait 在 client.rs 中定义
pub use client::DocumentClient;
