pub mod manager;
pub mod memory;
pub mod repository;
pub mod stored;


pub use manager::DatabaseManager;
pub use memory::InMemoryDocumentRepository;
pub use repository::{DocumentRepository, MongoDocumentRepository};
pub use stored::StoredDocument;
