use axum::{middleware::from_fn_with_state, routing::get, Router};
use folio_infra::{
    cache::{Cache, MemoryCache, RedisCache},
    database::{DatabaseManager, DocumentRepository, InMemoryDocumentRepository, MongoDocumentRepository},
    document::JsonDocumentClient,
    http::{PageFetcher, ReqwestPageFetcher},
};
use folio_service::preview::validate;
use folio_service::{ContentStore, DefaultContentStore, LinkPreviewService};
use folio_web::{AdminToken, AppState};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::{CacheType, Config};
use crate::error::{FolioError, Result};

/// 创建应用路由
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(folio_web::health))
        // 公开的文章接口
        .route("/api/posts", get(folio_web::list_posts))
        .route("/api/posts/:slug", get(folio_web::get_post))
        // 链接预览
        .route("/api/link-preview", get(folio_web::link_preview))
        // 订阅源和发现文件
        .route("/rss.xml", get(folio_web::rss_feed))
        .route("/sitemap.xml", get(folio_web::sitemap))
        .route("/llms.txt", get(folio_web::llms_txt))
        // 管理端接口
        .nest("/api/admin", admin_routes(state.clone()))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(CompressionLayer::new()),
        )
        .with_state(state)
}

/// 管理端路由，全部经过令牌校验
fn admin_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/posts",
            get(folio_web::list_admin_posts).post(folio_web::create_post),
        )
        .route(
            "/posts/:slug",
            get(folio_web::get_admin_post)
                .put(folio_web::update_post)
                .delete(folio_web::delete_post),
        )
        .route_layer(from_fn_with_state(state, folio_web::admin_auth_middleware))
}

/// 选择文档存储：MongoDB优先，其次进程内存储
fn document_repository(config: &Config, db_manager: &DatabaseManager) -> Option<Arc<dyn DocumentRepository>> {
    if let Some(mongodb) = db_manager.mongodb() {
        info!(database = %config.database.mongodb_database, "Using MongoDB document store");
        return Some(Arc::new(MongoDocumentRepository::new(
            mongodb,
            &config.database.mongodb_database,
        )));
    }
    if config.database.in_memory {
        warn!("Using in-memory document store; custom posts are lost on restart");
        return Some(Arc::new(InMemoryDocumentRepository::new()));
    }
    None
}

fn preview_cache(config: &Config, db_manager: &DatabaseManager) -> Result<Arc<dyn Cache>> {
    match config.cache.cache_type {
        CacheType::Redis => {
            let client = db_manager
                .redis()
                .ok_or_else(|| FolioError::Startup("Redis connection not available".to_string()))?;
            info!("Using Redis preview cache");
            Ok(Arc::new(RedisCache::new(client)))
        }
        CacheType::Memory => Ok(Arc::new(MemoryCache::new(config.cache.memory_max_size))),
    }
}

/// 初始化应用状态
pub async fn init_app_state(config: &Config, db_manager: Arc<DatabaseManager>) -> Result<AppState> {
    let client = document_repository(config, &db_manager)
        .map(|repository| Arc::new(JsonDocumentClient::new(repository)));
    let content_store: Arc<dyn ContentStore> = Arc::new(DefaultContentStore::new(client));

    // 重定向的每一跳都重新过主机检查
    let fetcher: Arc<dyn PageFetcher> = Arc::new(ReqwestPageFetcher::new(
        config.preview.user_agent.clone(),
        |target| validate(target.as_str()).is_ok(),
    )?);
    let cache = preview_cache(config, &db_manager)?;
    let preview_service = Arc::new(LinkPreviewService::new(
        fetcher,
        cache,
        config.preview.to_preview_config(),
    ));

    let admin_token = config.security.admin_token.as_deref().and_then(AdminToken::new);
    if admin_token.is_none() {
        warn!("No admin token configured; admin endpoints will reject every request");
    }

    Ok(AppState {
        content_store,
        preview_service,
        site: Arc::new(config.site.to_site_info()),
        admin_token,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    async fn app(admin_token: Option<&str>) -> Router {
        let mut config = Config::default();
        config.database.in_memory = true;
        config.security.admin_token = admin_token.map(str::to_string);
        let state = init_app_state(&config, Arc::new(DatabaseManager::default()))
            .await
            .unwrap();
        create_router(state)
    }

    async fn send(app: Router, request: Request<Body>) -> StatusCode {
        app.oneshot(request).await.unwrap().status()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_public_routes() {
        for uri in ["/health", "/api/posts", "/api/posts/building-this-site", "/rss.xml", "/sitemap.xml", "/llms.txt"] {
            assert_eq!(send(app(None).await, get(uri)).await, StatusCode::OK, "{}", uri);
        }
        assert_eq!(send(app(None).await, get("/api/posts/missing")).await, StatusCode::NOT_FOUND);
        assert_eq!(send(app(None).await, get("/api/link-preview")).await, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_admin_routes_require_token() {
        assert_eq!(send(app(None).await, get("/api/admin/posts")).await, StatusCode::UNAUTHORIZED);
        assert_eq!(send(app(Some("t0ken")).await, get("/api/admin/posts")).await, StatusCode::UNAUTHORIZED);

        let authorized = Request::builder()
            .uri("/api/admin/posts")
            .header("authorization", "Bearer t0ken")
            .body(Body::empty())
            .unwrap();
        assert_eq!(send(app(Some("t0ken")).await, authorized).await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_admin_create_through_router() {
        let app = app(Some("t0ken")).await;
        let request = Request::builder()
            .method("POST")
            .uri("/api/admin/posts")
            .header("x-admin-token", "t0ken")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"title":"Hello World","description":"d","content":"c"}"#))
            .unwrap();
        assert_eq!(send(app.clone(), request).await, StatusCode::CREATED);
        assert_eq!(send(app, get("/api/posts/hello-world")).await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_writes_without_store_are_unavailable() {
        let mut config = Config::default();
        config.security.admin_token = Some("t0ken".to_string());
        let state = init_app_state(&config, Arc::new(DatabaseManager::default()))
            .await
            .unwrap();
        let request = Request::builder()
            .method("DELETE")
            .uri("/api/admin/posts/building-this-site")
            .header("x-admin-token", "t0ken")
            .body(Body::empty())
            .unwrap();
        assert_eq!(send(create_router(state), request).await, StatusCode::SERVICE_UNAVAILABLE);
    }
}
