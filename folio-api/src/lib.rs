pub mod document;

pub use document::{Document, DocumentClient, StoreError, StoreResult};
