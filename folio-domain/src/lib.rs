pub mod content;
pub mod markup;
pub mod preview;
pub mod site;

pub use content::{
    Post, PostStatus, PostSource, PostDocument,
    Tombstone,
    PostPayload, GalleryInput,
};

pub use markup::{Block, Inline};
pub use preview::{LinkPreview, PreviewStatus};
pub use site::SiteInfo;
