pub mod post;
pub mod tombstone;
pub mod payload;

pub use post::{Post, PostStatus, PostSource, PostDocument, parse_post_date};
pub use tombstone::Tombstone;
pub use payload::{PostPayload, GalleryInput};

/// 内容管理相关的常量
pub mod constant {
    /// 自定义文章集合
    pub const POSTS_COLLECTION: &str = "posts";
    /// 默认文章墓碑集合
    pub const TOMBSTONES_COLLECTION: &str = "deleted_default_posts";

    /// 文章正文为空时渲染的占位文本
    pub const EMPTY_CONTENT_PLACEHOLDER: &str = "No content provided.";
}
