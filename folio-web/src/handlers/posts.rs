use axum::{
    extract::{Path, State},
    Json,
};
use folio_domain::content::Post;
use folio_domain::markup::Block;
use folio_service::{render, ContentError};
use serde::Serialize;

use crate::error::ApiError;
use crate::AppState;

/// 文章详情：文章本身加上渲染后的正文
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDetail {
    #[serde(flatten)]
    pub post: Post,
    pub blocks: Vec<Block>,
}

/// 列出已发布文章
/// GET /api/posts
pub async fn list_posts(State(state): State<AppState>) -> Result<Json<Vec<Post>>, ApiError> {
    let posts = state.content_store.list_published().await?;
    Ok(Json(posts))
}

/// 获取已发布文章及其渲染结果
/// GET /api/posts/:slug
pub async fn get_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<PostDetail>, ApiError> {
    let post = state
        .content_store
        .get_by_slug(&slug)
        .await?
        .ok_or(ContentError::NotFound(slug))?;

    let blocks = render(&post.content);
    Ok(Json(PostDetail { post, blocks }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::state;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[tokio::test]
    async fn test_list_posts_returns_defaults() {
        let Json(posts) = list_posts(State(state())).await.unwrap();
        assert_eq!(posts.len(), 3);
        assert!(posts.iter().all(Post::is_published));
    }

    #[tokio::test]
    async fn test_get_post_includes_blocks() {
        let state = state();
        let Json(detail) = get_post(State(state), Path("building-this-site".to_string()))
            .await
            .unwrap();
        assert_eq!(detail.post.slug, "building-this-site");
        assert!(!detail.blocks.is_empty());

        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["slug"], "building-this-site");
        assert!(json["blocks"].is_array());
    }

    #[tokio::test]
    async fn test_get_missing_post_is_404() {
        let err = get_post(State(state()), Path("missing".to_string())).await.unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }
}
