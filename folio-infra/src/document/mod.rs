pub mod client;
pub mod converter;

pub use client::JsonDocumentClient;
pub use converter::{DocumentConverter, JsonDocumentConverter};
