use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use folio_domain::preview::LinkPreview;
use serde::Deserialize;
use std::time::Duration;

use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct PreviewParams {
    pub url: Option<String>,
}

fn cache_control(max_age: Duration) -> String {
    let secs = max_age.as_secs();
    format!("public, max-age={}, s-maxage={}", secs, secs)
}

/// 获取外部链接预览
/// GET /api/link-preview?url=
///
/// 抓取失败仍返回200和错误记录，只是HTTP缓存时间更短。
pub async fn link_preview(
    State(state): State<AppState>,
    Query(params): Query<PreviewParams>,
) -> Response {
    let Some(url) = params.url.filter(|u| !u.trim().is_empty()) else {
        let record = LinkPreview::failed("", "Missing url parameter");
        return (StatusCode::BAD_REQUEST, Json(record)).into_response();
    };

    let preview = state.preview_service.fetch_preview(&url).await;
    let config = state.preview_service.config();
    let max_age = if preview.is_ok() { config.ttl } else { config.error_max_age };

    ([(header::CACHE_CONTROL, cache_control(max_age))], Json(preview)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::state;

    async fn call(url: Option<&str>) -> Response {
        let params = PreviewParams { url: url.map(str::to_string) };
        link_preview(State(state()), Query(params)).await
    }

    async fn body(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn cache_header(response: &Response) -> &str {
        response.headers().get(header::CACHE_CONTROL).unwrap().to_str().unwrap()
    }

    #[tokio::test]
    async fn test_success_is_cached_for_six_hours() {
        let response = call(Some("https://example.com/")).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(cache_header(&response), "public, max-age=21600, s-maxage=21600");

        let json = body(response).await;
        assert_eq!(json["status"], "ok");
        assert_eq!(json["title"], "Static Page");
    }

    #[tokio::test]
    async fn test_error_record_has_short_cache() {
        let response = call(Some("http://127.0.0.1/")).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(cache_header(&response), "public, max-age=600, s-maxage=600");

        let json = body(response).await;
        assert_eq!(json["status"], "error");
        assert_eq!(json["error"], "Host not allowed");
    }

    #[tokio::test]
    async fn test_missing_url_is_400() {
        for url in [None, Some("  ")] {
            let response = call(url).await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            assert_eq!(body(response).await["status"], "error");
        }
    }
}
