use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE, USER_AGENT};
use reqwest::redirect::Policy;
use thiserror::Error;
use url::Url;

/// 最多跟随的重定向次数
const MAX_REDIRECTS: usize = 10;

/// 抓取到的页面
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub status: u16,
    pub content_type: Option<String>,
    /// 已按上限截断的响应体
    pub body: Vec<u8>,
}

impl FetchedPage {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_html(&self) -> bool {
        self.content_type
            .as_deref()
            .map(|ct| {
                let ct = ct.to_ascii_lowercase();
                ct.contains("text/html") || ct.contains("application/xhtml+xml")
            })
            .unwrap_or(false)
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("{0}")]
    Other(String),
}

/// 页面抓取trait
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// 获取页面，响应体最多读取 `max_bytes` 字节，多余部分直接丢弃
    async fn fetch(&self, url: &Url, max_bytes: usize) -> Result<FetchedPage, FetchError>;
}

/// 基于reqwest的页面抓取实现
///
/// 每一跳重定向的目标都要经过 `allow_redirect` 检查，被拒绝时请求以错误结束。
pub struct ReqwestPageFetcher {
    client: reqwest::Client,
    user_agent: String,
}

impl ReqwestPageFetcher {
    pub fn new<F>(user_agent: impl Into<String>, allow_redirect: F) -> Result<Self, FetchError>
    where
        F: Fn(&Url) -> bool + Send + Sync + 'static,
    {
        let policy = Policy::custom(move |attempt| {
            if attempt.previous().len() >= MAX_REDIRECTS {
                attempt.error("too many redirects")
            } else if !allow_redirect(attempt.url()) {
                let blocked = format!("redirect target not allowed: {}", attempt.url());
                attempt.error(blocked)
            } else {
                attempt.follow()
            }
        });

        let client = reqwest::Client::builder().redirect(policy).build()?;

        Ok(Self {
            client,
            user_agent: user_agent.into(),
        })
    }
}

#[async_trait]
impl PageFetcher for ReqwestPageFetcher {
    async fn fetch(&self, url: &Url, max_bytes: usize) -> Result<FetchedPage, FetchError> {
        let mut response = self.client
            .get(url.clone())
            .header(USER_AGENT, &self.user_agent)
            .header(ACCEPT, "text/html,application/xhtml+xml")
            .send()
            .await?;

        let final_url = response.url().clone();
        let mut page = FetchedPage {
            status: response.status().as_u16(),
            content_type: response
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string),
            body: Vec::new(),
        };

        // 非成功或非HTML响应不读取响应体
        if !page.is_success() || !page.is_html() {
            return Ok(page);
        }

        while let Some(chunk) = response.chunk().await? {
            let remaining = max_bytes.saturating_sub(page.body.len());
            if chunk.len() >= remaining {
                page.body.extend_from_slice(&chunk[..remaining]);
                break;
            }
            page.body.extend_from_slice(&chunk);
        }

        tracing::debug!(url = %url, final_url = %final_url, bytes = page.body.len(), "fetched page");
        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::LOCATION;
    use axum::http::{HeaderMap, StatusCode};
    use axum::response::IntoResponse;
    use axum::routing::get;
    use axum::Router;
    use tokio::net::TcpListener;

    const BIG_BODY_LEN: usize = 64 * 1024;

    async fn echo(headers: HeaderMap) -> impl IntoResponse {
        let header = |name: reqwest::header::HeaderName| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .to_string()
        };
        let body = format!("ua={};accept={}", header(USER_AGENT), header(ACCEPT));
        ([(CONTENT_TYPE, "text/html")], body)
    }

    /// 启动本地HTTP服务，返回其根地址
    async fn serve() -> Url {
        let app = Router::new()
            .route("/big", get(|| async { ([(CONTENT_TYPE, "text/html")], "x".repeat(BIG_BODY_LEN)) }))
            .route("/hop", get(|| async { (StatusCode::FOUND, [(LOCATION, "/echo")]) }))
            .route("/echo", get(echo))
            .route("/json", get(|| async { ([(CONTENT_TYPE, "application/json")], "{\"a\":1}") }))
            .route("/missing", get(|| async { (StatusCode::NOT_FOUND, [(CONTENT_TYPE, "text/html")], "gone") }));

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        Url::parse(&format!("http://{}/", addr)).unwrap()
    }

    fn fetcher() -> ReqwestPageFetcher {
        ReqwestPageFetcher::new("folio-test/1.0", |_: &Url| true).unwrap()
    }

    fn page(status: u16, content_type: Option<&str>) -> FetchedPage {
        FetchedPage {
            status,
            content_type: content_type.map(str::to_string),
            body: Vec::new(),
        }
    }

    #[test]
    fn test_is_html() {
        assert!(page(200, Some("text/html; charset=utf-8")).is_html());
        assert!(page(200, Some("Text/HTML")).is_html());
        assert!(page(200, Some("application/xhtml+xml")).is_html());
        assert!(!page(200, Some("application/json")).is_html());
        assert!(!page(200, None).is_html());
    }

    #[test]
    fn test_is_success() {
        assert!(page(200, None).is_success());
        assert!(page(204, None).is_success());
        assert!(!page(301, None).is_success());
        assert!(!page(404, None).is_success());
    }

    #[tokio::test]
    async fn test_body_truncated_at_limit() {
        let base = serve().await;
        let page = fetcher().fetch(&base.join("big").unwrap(), 1000).await.unwrap();

        assert_eq!(page.status, 200);
        assert_eq!(page.body.len(), 1000);
        assert!(page.body.iter().all(|b| *b == b'x'));

        let whole = fetcher().fetch(&base.join("big").unwrap(), 1024 * 1024).await.unwrap();
        assert_eq!(whole.body.len(), BIG_BODY_LEN);
    }

    #[tokio::test]
    async fn test_redirect_followed_with_headers() {
        let base = serve().await;
        let page = fetcher().fetch(&base.join("hop").unwrap(), 4096).await.unwrap();

        assert_eq!(page.status, 200);
        let body = String::from_utf8(page.body).unwrap();
        assert_eq!(body, "ua=folio-test/1.0;accept=text/html,application/xhtml+xml");
    }

    #[tokio::test]
    async fn test_rejected_redirect_target_is_error() {
        let base = serve().await;
        let fetcher = ReqwestPageFetcher::new("folio-test/1.0", |url: &Url| url.path() != "/echo").unwrap();

        assert!(fetcher.fetch(&base.join("hop").unwrap(), 4096).await.is_err());
        assert!(fetcher.fetch(&base.join("big").unwrap(), 10).await.is_ok());
    }

    #[tokio::test]
    async fn test_body_skipped_for_error_and_non_html() {
        let base = serve().await;

        let missing = fetcher().fetch(&base.join("missing").unwrap(), 4096).await.unwrap();
        assert_eq!(missing.status, 404);
        assert!(missing.body.is_empty());

        let json = fetcher().fetch(&base.join("json").unwrap(), 4096).await.unwrap();
        assert!(json.is_success());
        assert!(!json.is_html());
        assert!(json.body.is_empty());
    }
}
