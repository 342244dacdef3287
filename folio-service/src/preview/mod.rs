//! 外部链接预览
//!
//! 抓取外部页面的 `<head>`，提取 Open Graph / Twitter Card / favicon 信息。
//! 所有失败都折叠为 `status: "error"` 的预览记录，调用方总能拿到结构完整的结果。

mod guard;
mod html;

pub use guard::validate;
pub use html::{collapse_whitespace, HeadMetadata};

use folio_domain::preview::LinkPreview;
use folio_infra::cache::Cache;
use folio_infra::http::{FetchError, PageFetcher};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

/// 预览抓取失败的原因
#[derive(Debug, Error)]
pub enum PreviewError {
    #[error("Invalid URL")]
    InvalidUrl,

    #[error("Unsupported URL scheme: {0}")]
    UnsupportedScheme(String),

    #[error("Host not allowed")]
    BlockedHost,

    #[error("Request timed out")]
    Timeout,

    #[error("Failed to fetch page: {0}")]
    Fetch(#[from] FetchError),

    #[error("Upstream responded with status {0}")]
    HttpStatus(u16),

    #[error("Response is not HTML")]
    NotHtml,
}

/// 预览服务配置
#[derive(Debug, Clone)]
pub struct PreviewConfig {
    /// 单次抓取的超时时间
    pub timeout: Duration,
    /// 响应体读取上限，超出部分丢弃
    pub max_body_bytes: usize,
    /// 成功记录在缓存中的存活时间
    pub ttl: Duration,
    /// 失败记录的HTTP缓存时间
    pub error_max_age: Duration,
    pub user_agent: String,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(8),
            max_body_bytes: 1024 * 1024,
            ttl: Duration::from_secs(6 * 60 * 60),
            error_max_age: Duration::from_secs(10 * 60),
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/124.0 Safari/537.36"
                .to_string(),
        }
    }
}

/// 链接预览服务
///
/// 缓存由调用方注入，只缓存成功的记录。
pub struct LinkPreviewService {
    fetcher: Arc<dyn PageFetcher>,
    cache: Arc<dyn Cache>,
    config: PreviewConfig,
    cache_prefix: String,
}

impl LinkPreviewService {
    pub fn new(fetcher: Arc<dyn PageFetcher>, cache: Arc<dyn Cache>, config: PreviewConfig) -> Self {
        Self {
            fetcher,
            cache,
            config,
            cache_prefix: "link-preview:".to_string(),
        }
    }

    pub fn config(&self) -> &PreviewConfig {
        &self.config
    }

    fn cache_key(&self, url: &Url) -> String {
        format!("{}{}", self.cache_prefix, url)
    }

    /// 获取预览，从不返回错误
    pub async fn fetch_preview(&self, raw: &str) -> LinkPreview {
        let url = match validate(raw) {
            Ok(url) => url,
            Err(e) => {
                debug!(url = %raw, error = %e, "Rejected link preview request");
                return LinkPreview::failed(raw.trim(), e.to_string());
            }
        };

        let key = self.cache_key(&url);
        if let Some(cached) = self.cached(&key).await {
            debug!(url = %url, "Link preview cache hit");
            return cached;
        }

        match self.fetch_and_extract(&url).await {
            Ok(preview) => {
                self.store(&key, &preview).await;
                preview
            }
            Err(e) => {
                warn!(url = %url, error = %e, "Link preview failed");
                LinkPreview::failed(url.as_str(), e.to_string())
            }
        }
    }

    async fn cached(&self, key: &str) -> Option<LinkPreview> {
        match self.cache.get(key).await {
            Ok(Some(json)) => match serde_json::from_str(&json) {
                Ok(preview) => Some(preview),
                Err(e) => {
                    warn!(key = %key, error = %e, "Discarding unreadable cached preview");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!(key = %key, error = %e, "Preview cache read failed");
                None
            }
        }
    }

    async fn store(&self, key: &str, preview: &LinkPreview) {
        let json = match serde_json::to_string(preview) {
            Ok(json) => json,
            Err(e) => {
                warn!(key = %key, error = %e, "Failed to serialize preview");
                return;
            }
        };
        if let Err(e) = self.cache.set(key, &json, Some(self.config.ttl)).await {
            warn!(key = %key, error = %e, "Preview cache write failed");
        }
    }

    async fn fetch_and_extract(&self, url: &Url) -> Result<LinkPreview, PreviewError> {
        let page = tokio::time::timeout(
            self.config.timeout,
            self.fetcher.fetch(url, self.config.max_body_bytes),
        )
        .await
        .map_err(|_| PreviewError::Timeout)??;

        if !page.is_success() {
            return Err(PreviewError::HttpStatus(page.status));
        }
        if !page.is_html() {
            return Err(PreviewError::NotHtml);
        }

        let limit = page.body.len().min(self.config.max_body_bytes);
        let body = String::from_utf8_lossy(&page.body[..limit]);
        Ok(HeadMetadata::parse(&body).compose(url))
    }
}
