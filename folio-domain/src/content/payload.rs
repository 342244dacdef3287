use serde::{Deserialize, Serialize};
use super::PostStatus;

/// 创建/更新文章的请求体
///
/// 所有字段都是可选的，校验和规范化在服务层完成。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPayload {
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub hero_image: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub gallery_images: Option<GalleryInput>,
    #[serde(default)]
    pub status: Option<PostStatus>,
}

/// 图集输入：字符串数组或按行分隔的文本
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GalleryInput {
    List(Vec<String>),
    Text(String),
}

impl GalleryInput {
    /// 规范化为去除空白、过滤空项后的有序列表
    pub fn normalize(&self) -> Vec<String> {
        let trimmed = |s: &str| {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        };
        match self {
            GalleryInput::List(items) => items.iter().filter_map(|s| trimmed(s.as_str())).collect(),
            GalleryInput::Text(text) => text.lines().filter_map(trimmed).collect(),
        }
    }
}
