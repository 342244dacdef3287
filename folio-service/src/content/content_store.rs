use async_trait::async_trait;
use chrono::Utc;
use folio_api::document::{DocumentClient, StoreError};
use folio_domain::content::{Post, PostDocument, PostPayload, Tombstone};
use indexmap::IndexMap;
use serde::Serialize;
use std::cmp::Reverse;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{info, warn};

use super::defaults::default_posts;
use super::error::{ContentError, ContentResult};
use super::validation;

/// 删除操作的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeleteOutcome {
    /// 自定义文章被永久删除
    Removed,
    /// 默认文章被墓碑隐藏
    Tombstoned,
}

/// 内容存储trait
///
/// 写操作假设调用方已经通过管理员认证。
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// 列出所有已发布文章，按日期倒序
    async fn list_published(&self) -> ContentResult<Vec<Post>>;

    /// 列出全部文章（包括草稿），仅供管理端使用
    async fn list_admin(&self) -> ContentResult<Vec<Post>>;

    /// 按slug获取已发布文章
    async fn get_by_slug(&self, slug: &str) -> ContentResult<Option<Post>>;

    /// 按slug获取文章（包括草稿），仅供管理端使用
    async fn get_admin(&self, slug: &str) -> ContentResult<Option<Post>>;

    async fn create(&self, payload: PostPayload) -> ContentResult<Post>;

    async fn update(&self, existing_slug: &str, payload: PostPayload) -> ContentResult<Post>;

    async fn delete(&self, slug: &str) -> ContentResult<DeleteOutcome>;
}

/// 默认内容存储实现
///
/// 读取时合并：默认文章减去墓碑，再按slug叠加自定义文章（自定义总是优先）。
pub struct DefaultContentStore<C: DocumentClient> {
    client: Option<Arc<C>>,
    defaults: Vec<Post>,
}

impl<C: DocumentClient> DefaultContentStore<C> {
    pub fn new(client: Option<Arc<C>>) -> Self {
        Self::with_defaults(client, default_posts())
    }

    pub fn with_defaults(client: Option<Arc<C>>, defaults: Vec<Post>) -> Self {
        if client.is_none() {
            warn!("Content store has no persistence backend; serving default posts only");
        }
        Self { client, defaults }
    }

    fn require_client(&self) -> ContentResult<&Arc<C>> {
        self.client.as_ref().ok_or_else(|| {
            ContentError::Configuration("Document store is not configured".to_string())
        })
    }

    fn is_default_slug(&self, slug: &str) -> bool {
        self.defaults.iter().any(|post| post.slug == slug)
    }

    /// 读取自定义文章和墓碑
    ///
    /// `strict` 为false时存储故障降级为空集合，公开读取路径使用。
    async fn load_overlay(&self, strict: bool) -> ContentResult<(Vec<PostDocument>, Vec<Tombstone>)> {
        let Some(client) = &self.client else {
            return Ok((Vec::new(), Vec::new()));
        };

        let loaded = async {
            let custom = client.list::<PostDocument>().await?;
            let tombstones = client.list::<Tombstone>().await?;
            Ok::<_, StoreError>((custom, tombstones))
        }
        .await;

        match loaded {
            Ok(overlay) => Ok(overlay),
            Err(e) if !strict => {
                warn!(error = %e, "Failed to load custom posts; serving default posts only");
                Ok((Vec::new(), Vec::new()))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn merged(&self, strict: bool) -> ContentResult<Vec<Post>> {
        let (custom, tombstones) = self.load_overlay(strict).await?;
        let tombstoned: HashSet<&str> = tombstones.iter().map(|t| t.slug.as_str()).collect();

        let mut merged: IndexMap<String, Post> = IndexMap::new();
        for post in self.defaults.iter().filter(|p| !tombstoned.contains(p.slug.as_str())) {
            merged.insert(post.slug.clone(), post.clone());
        }
        // 同slug的自定义文章原位替换默认文章
        for document in custom {
            let post = document.into_post();
            merged.insert(post.slug.clone(), post);
        }

        let mut posts: Vec<Post> = merged.into_values().collect();
        posts.sort_by_key(|post| Reverse(post.sort_timestamp()));
        Ok(posts)
    }

    async fn slug_taken(&self, slug: &str) -> ContentResult<bool> {
        Ok(self.merged(true).await?.iter().any(|post| post.slug == slug))
    }
}

#[async_trait]
impl<C: DocumentClient> ContentStore for DefaultContentStore<C> {
    async fn list_published(&self) -> ContentResult<Vec<Post>> {
        let posts = self.merged(false).await?;
        Ok(posts.into_iter().filter(Post::is_published).collect())
    }

    async fn list_admin(&self) -> ContentResult<Vec<Post>> {
        self.merged(true).await
    }

    async fn get_by_slug(&self, slug: &str) -> ContentResult<Option<Post>> {
        let posts = self.list_published().await?;
        Ok(posts.into_iter().find(|post| post.slug == slug))
    }

    async fn get_admin(&self, slug: &str) -> ContentResult<Option<Post>> {
        let posts = self.list_admin().await?;
        Ok(posts.into_iter().find(|post| post.slug == slug))
    }

    async fn create(&self, payload: PostPayload) -> ContentResult<Post> {
        let client = self.require_client()?;
        let post = validation::normalize(payload)?;

        if self.slug_taken(&post.slug).await? {
            return Err(ContentError::Conflict(post.slug));
        }

        let saved = client.upsert(PostDocument::from_post(post, Utc::now())).await?;
        info!(slug = %saved.slug, status = ?saved.status, "Created post");
        Ok(saved.into_post())
    }

    async fn update(&self, existing_slug: &str, payload: PostPayload) -> ContentResult<Post> {
        let client = self.require_client()?;
        let post = validation::normalize(payload)?;

        // 被墓碑隐藏的默认文章仍可编辑，写入后以自定义文章重新出现
        let has_custom = client.fetch::<PostDocument>(existing_slug).await?.is_some();
        let is_default = self.is_default_slug(existing_slug);
        if !has_custom && !is_default {
            return Err(ContentError::NotFound(existing_slug.to_string()));
        }

        let renamed = post.slug != existing_slug;
        if renamed && self.slug_taken(&post.slug).await? {
            return Err(ContentError::Conflict(post.slug));
        }

        let saved = client.upsert(PostDocument::from_post(post, Utc::now())).await?;

        // 改名时清理旧slug：先写新文档，再删旧文档，失败时最多留下重复而不会丢数据
        if renamed {
            if has_custom {
                client.delete::<PostDocument>(existing_slug).await?;
            }
            if is_default {
                client.upsert(Tombstone::new(existing_slug)).await?;
            }
            info!(from = %existing_slug, to = %saved.slug, "Renamed post");
        } else {
            info!(slug = %saved.slug, status = ?saved.status, "Updated post");
        }

        Ok(saved.into_post())
    }

    async fn delete(&self, slug: &str) -> ContentResult<DeleteOutcome> {
        let client = self.require_client()?;

        if client.delete::<PostDocument>(slug).await? {
            info!(slug = %slug, "Deleted custom post");
            return Ok(DeleteOutcome::Removed);
        }

        if self.is_default_slug(slug) {
            client.upsert(Tombstone::new(slug)).await?;
            info!(slug = %slug, "Tombstoned default post");
            return Ok(DeleteOutcome::Tombstoned);
        }

        Err(ContentError::NotFound(slug.to_string()))
    }
}
