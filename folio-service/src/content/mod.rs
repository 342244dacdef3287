pub mod content_store;
pub mod defaults;
pub mod error;
pub mod slug;
mod validation;


pub use content_store::{ContentStore, DefaultContentStore, DeleteOutcome};
pub use error::{ContentError, ContentResult};
pub use slug::slugify;
