use folio_api::document::StoreError;
use thiserror::Error;

/// 内容存储错误
///
/// 校验、冲突、未找到和配置错误是互相区分的，边界层据此映射状态码。
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("A post with slug \"{0}\" already exists")]
    Conflict(String),

    #[error("Post not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

pub type ContentResult<T> = Result<T, ContentError>;
