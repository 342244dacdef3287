use redis::Client as RedisClient;
use mongodb::Client as MongoClient;
use std::sync::Arc;
use tracing::info;

/// DatabaseManager 管理所有外部存储连接
///
/// MongoDB和Redis都是可选的：未配置时对应的功能降级。
#[derive(Clone, Default)]
pub struct DatabaseManager {
    redis: Option<Arc<RedisClient>>,
    mongodb: Option<Arc<MongoClient>>,
}

impl DatabaseManager {
    /// 创建新的DatabaseManager
    pub async fn new(
        mongodb_url: Option<&str>,
        redis_url: Option<&str>,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let mut manager = Self::default();

        // 连接MongoDB
        if let Some(url) = mongodb_url {
            let client = MongoClient::with_uri_str(url).await?;
            manager.mongodb = Some(Arc::new(client));
            info!("MongoDB client configured");
        }

        // 连接Redis
        if let Some(url) = redis_url {
            let client = RedisClient::open(url)?;
            manager.redis = Some(Arc::new(client));
            info!("Redis client configured");
        }

        Ok(manager)
    }

    /// 获取Redis连接
    pub fn redis(&self) -> Option<Arc<RedisClient>> {
        self.redis.clone()
    }

    /// 获取MongoDB连接
    pub fn mongodb(&self) -> Option<Arc<MongoClient>> {
        self.mongodb.clone()
    }
}
