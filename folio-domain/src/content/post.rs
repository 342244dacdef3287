use folio_api::document::Document;
use serde::{Deserialize, Serialize};
use chrono::{DateTime, NaiveDate, Utc};
use super::constant;

/// Post实体
///
/// 默认文章和自定义文章使用同一个结构，`source` 由读取路径推导，不会被持久化。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub slug: String,
    pub title: String,
    pub description: String,
    /// ISO风格的日期字符串，例如 `2024-05-01`
    pub date: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gallery_images: Option<Vec<String>>,
    #[serde(default)]
    pub status: PostStatus,
    #[serde(default)]
    pub source: PostSource,
}

impl Post {
    /// 检查文章是否已发布
    pub fn is_published(&self) -> bool {
        self.status == PostStatus::Published
    }

    /// 排序用的时间戳，无法解析的日期视为纪元0
    pub fn sort_timestamp(&self) -> i64 {
        parse_post_date(&self.date)
            .map(|d| d.timestamp_millis())
            .unwrap_or(0)
    }
}

/// 解析文章日期
///
/// 支持RFC 3339时间戳、`YYYY-MM-DD` 日期以及 `YYYY-MM-DDTHH:MM:SS` 形式。
pub fn parse_post_date(date: &str) -> Option<DateTime<Utc>> {
    let date = date.trim();
    if date.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(date) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = chrono::NaiveDateTime::parse_from_str(date, "%Y-%m-%dT%H:%M:%S") {
        return Some(parsed.and_utc());
    }
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|d| d.and_utc())
}

/// PostStatus表示文章的发布状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    #[default]
    Published,
    Draft,
}

/// PostSource表示文章来源
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PostSource {
    Default,
    #[default]
    Custom,
}

/// 自定义文章的持久化形态
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDocument {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub date: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gallery_images: Option<Vec<String>>,
    #[serde(default)]
    pub status: PostStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Document for PostDocument {
    const COLLECTION: &'static str = constant::POSTS_COLLECTION;

    fn key(&self) -> &str {
        &self.slug
    }
}

impl PostDocument {
    pub fn from_post(post: Post, updated_at: DateTime<Utc>) -> Self {
        Self {
            slug: post.slug,
            title: post.title,
            description: post.description,
            date: post.date,
            content: post.content,
            hero_image: post.hero_image,
            video_url: post.video_url,
            gallery_images: post.gallery_images,
            status: post.status,
            updated_at: Some(updated_at),
        }
    }

    pub fn into_post(self) -> Post {
        Post {
            slug: self.slug,
            title: self.title,
            description: self.description,
            date: self.date,
            content: self.content,
            hero_image: self.hero_image,
            video_url: self.video_url,
            gallery_images: self.gallery_images,
            status: self.status,
            source: PostSource::Custom,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_post(date: &str) -> Post {
        Post {
            slug: "hello".to_string(),
            title: "Hello".to_string(),
            description: "d".to_string(),
            date: date.to_string(),
            content: "c".to_string(),
            hero_image: None,
            video_url: None,
            gallery_images: None,
            status: PostStatus::Published,
            source: PostSource::Default,
        }
    }

    #[test]
    fn test_parse_post_date_formats() {
        assert!(parse_post_date("2024-05-01").is_some());
        assert!(parse_post_date("2024-05-01T10:00:00Z").is_some());
        assert!(parse_post_date("2024-05-01T10:00:00").is_some());
        assert!(parse_post_date("May first").is_none());
        assert!(parse_post_date("").is_none());
    }

    #[test]
    fn test_sort_timestamp_unparseable_is_epoch() {
        assert_eq!(sample_post("not a date").sort_timestamp(), 0);
        assert!(sample_post("2023-01-01").sort_timestamp() > 0);
    }

    #[test]
    fn test_status_defaults_to_published() {
        let doc: PostDocument = serde_json::from_str(
            r#"{"slug":"a","title":"A","description":"","date":"2024-01-01","content":""}"#,
        ).unwrap();
        assert_eq!(doc.status, PostStatus::Published);
        assert_eq!(doc.into_post().source, PostSource::Custom);
    }

    #[test]
    fn test_document_round_trip_drops_source() {
        let post = sample_post("2024-01-01");
        let doc = PostDocument::from_post(post.clone(), Utc::now());
        let json = serde_json::to_value(&doc).unwrap();
        assert!(json.get("source").is_none());
        assert_eq!(json["slug"], "hello");

        let restored = doc.into_post();
        assert_eq!(restored.title, post.title);
        assert_eq!(restored.source, PostSource::Custom);
    }
}
