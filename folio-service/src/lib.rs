pub mod content;
pub mod feed;
pub mod markup;
pub mod preview;

pub use content::{
    ContentStore, DefaultContentStore, ContentError, ContentResult, DeleteOutcome,
};

pub use markup::render;
pub use preview::{LinkPreviewService, PreviewConfig};
