use thiserror::Error;

#[derive(Error, Debug)]
pub enum FolioError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Database error: {0}")]
    Database(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Startup error: {0}")]
    Startup(String),
}

impl From<Box<dyn std::error::Error + Send + Sync>> for FolioError {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        FolioError::Database(err.to_string())
    }
}

impl From<folio_infra::http::FetchError> for FolioError {
    fn from(err: folio_infra::http::FetchError) -> Self {
        FolioError::Startup(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, FolioError>;
