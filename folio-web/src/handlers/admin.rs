use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use folio_domain::content::{Post, PostPayload};
use folio_service::{ContentError, DeleteOutcome};
use serde::Serialize;

use crate::error::ApiError;
use crate::AppState;

/// 删除结果响应
#[derive(Debug, Serialize)]
pub struct DeletePostResponse {
    pub slug: String,
    pub outcome: DeleteOutcome,
}

/// 列出全部文章（包括草稿）
/// GET /api/admin/posts
pub async fn list_admin_posts(State(state): State<AppState>) -> Result<Json<Vec<Post>>, ApiError> {
    Ok(Json(state.content_store.list_admin().await?))
}

/// 获取文章（包括草稿）
/// GET /api/admin/posts/:slug
pub async fn get_admin_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Post>, ApiError> {
    let post = state
        .content_store
        .get_admin(&slug)
        .await?
        .ok_or(ContentError::NotFound(slug))?;
    Ok(Json(post))
}

/// 创建文章
/// POST /api/admin/posts
pub async fn create_post(
    State(state): State<AppState>,
    Json(payload): Json<PostPayload>,
) -> Result<(StatusCode, Json<Post>), ApiError> {
    let post = state.content_store.create(payload).await?;
    Ok((StatusCode::CREATED, Json(post)))
}

/// 更新文章，slug变化时视为改名
/// PUT /api/admin/posts/:slug
pub async fn update_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(payload): Json<PostPayload>,
) -> Result<Json<Post>, ApiError> {
    Ok(Json(state.content_store.update(&slug, payload).await?))
}

/// 删除文章：自定义文章直接删除，默认文章写入墓碑
/// DELETE /api/admin/posts/:slug
pub async fn delete_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<DeletePostResponse>, ApiError> {
    let outcome = state.content_store.delete(&slug).await?;
    Ok(Json(DeletePostResponse { slug, outcome }))
}
