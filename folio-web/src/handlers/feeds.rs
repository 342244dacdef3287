use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use folio_service::feed::{build_llms_txt, build_rss, build_sitemap};

use crate::error::ApiError;
use crate::AppState;

/// RSS订阅源
/// GET /rss.xml
pub async fn rss_feed(State(state): State<AppState>) -> Result<Response, ApiError> {
    let posts = state.content_store.list_published().await?;
    let body = build_rss(&state.site, &posts);
    Ok(([(header::CONTENT_TYPE, "application/rss+xml; charset=utf-8")], body).into_response())
}

/// 站点地图
/// GET /sitemap.xml
pub async fn sitemap(State(state): State<AppState>) -> Result<Response, ApiError> {
    let posts = state.content_store.list_published().await?;
    let body = build_sitemap(&state.site, &posts);
    Ok(([(header::CONTENT_TYPE, "application/xml; charset=utf-8")], body).into_response())
}

/// LLM发现文件
/// GET /llms.txt
pub async fn llms_txt(State(state): State<AppState>) -> Result<Response, ApiError> {
    let posts = state.content_store.list_published().await?;
    let body = build_llms_txt(&state.site, &posts);
    Ok(([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], body).into_response())
}
