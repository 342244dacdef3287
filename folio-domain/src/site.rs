use serde::{Deserialize, Serialize};

/// 站点的静态页面路径
pub const STATIC_PAGES: &[&str] = &[
    "/",
    "/about",
    "/skills",
    "/projects",
    "/experience",
    "/credentials",
    "/contact",
    "/blog",
];

/// 站点信息，供订阅源和站点地图使用
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteInfo {
    pub url: String,
    pub title: String,
    pub description: String,
    pub author: String,
}

impl SiteInfo {
    /// 站点根地址（去掉末尾斜杠）
    pub fn base_url(&self) -> &str {
        self.url.trim_end_matches('/')
    }

    /// 拼接站内绝对地址
    pub fn absolute(&self, path: &str) -> String {
        if path == "/" {
            format!("{}/", self.base_url())
        } else {
            format!("{}/{}", self.base_url(), path.trim_start_matches('/'))
        }
    }

    /// 文章页面地址
    pub fn post_url(&self, slug: &str) -> String {
        self.absolute(&format!("/blog/{}", slug))
    }
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            url: "http://localhost:8090".to_string(),
            title: "Portfolio".to_string(),
            description: "Projects, experience and writing.".to_string(),
            author: "Site Owner".to_string(),
        }
    }
}
