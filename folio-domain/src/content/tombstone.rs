use folio_api::document::Document;
use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use super::constant;

/// Tombstone标记一个被管理员删除的默认文章
///
/// 默认文章定义在代码中，删除时只记录墓碑，读取时按集合成员关系过滤。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tombstone {
    pub slug: String,
    pub deleted_at: DateTime<Utc>,
}

impl Tombstone {
    pub fn new(slug: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            deleted_at: Utc::now(),
        }
    }
}

impl Document for Tombstone {
    const COLLECTION: &'static str = constant::TOMBSTONES_COLLECTION;

    fn key(&self) -> &str {
        &self.slug
    }
}
