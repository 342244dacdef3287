pub mod cache;
pub mod database;
pub mod document;
pub mod http;

pub use cache::{Cache, MemoryCache, RedisCache};
pub use database::{DatabaseManager, DocumentRepository, InMemoryDocumentRepository, MongoDocumentRepository};
pub use document::JsonDocumentClient;
pub use http::{FetchError, FetchedPage, PageFetcher, ReqwestPageFetcher};
