use folio_domain::SiteInfo;
use folio_service::PreviewConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub cache: CacheConfig,
    pub site: SiteConfig,
    pub security: SecurityConfig,
    pub preview: PreviewSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8090,
            host: "0.0.0.0".to_string(),
        }
    }
}

/// 文档存储配置
///
/// 配置了 `mongodb_url` 时使用MongoDB；否则 `in_memory` 为true时使用进程内存储，
/// 两者都没有时只提供默认文章，写操作返回配置错误。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub mongodb_url: Option<String>,
    pub mongodb_database: String,
    pub in_memory: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            mongodb_url: None,
            mongodb_database: "folio".to_string(),
            in_memory: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheType {
    Memory,
    Redis,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    #[serde(rename = "type")]
    pub cache_type: CacheType,
    pub redis_url: String,
    pub memory_max_size: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            cache_type: CacheType::Memory,
            redis_url: "redis://localhost:6379".to_string(),
            memory_max_size: 10000,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub url: String,
    pub title: String,
    pub description: String,
    pub author: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        let site = SiteInfo::default();
        Self {
            url: site.url,
            title: site.title,
            description: site.description,
            author: site.author,
        }
    }
}

impl SiteConfig {
    pub fn to_site_info(&self) -> SiteInfo {
        SiteInfo {
            url: self.url.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            author: self.author.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// 管理端令牌，未设置时管理端接口全部拒绝
    pub admin_token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewSettings {
    pub timeout_secs: u64,
    pub max_body_bytes: usize,
    pub ttl_secs: u64,
    pub error_max_age_secs: u64,
    pub user_agent: String,
}

impl Default for PreviewSettings {
    fn default() -> Self {
        let defaults = PreviewConfig::default();
        Self {
            timeout_secs: defaults.timeout.as_secs(),
            max_body_bytes: defaults.max_body_bytes,
            ttl_secs: defaults.ttl.as_secs(),
            error_max_age_secs: defaults.error_max_age.as_secs(),
            user_agent: defaults.user_agent,
        }
    }
}

impl PreviewSettings {
    pub fn to_preview_config(&self) -> PreviewConfig {
        PreviewConfig {
            timeout: Duration::from_secs(self.timeout_secs),
            max_body_bytes: self.max_body_bytes,
            ttl: Duration::from_secs(self.ttl_secs),
            error_max_age: Duration::from_secs(self.error_max_age_secs),
            user_agent: self.user_agent.clone(),
        }
    }
}

impl Config {
    /// 依次加载 `folio.toml`、`~/.folio/folio.toml` 和 `FOLIO__*` 环境变量，后者覆盖前者
    pub fn load() -> Result<Self, config::ConfigError> {
        // 如果存在.env文件，先把其中的变量导入环境
        let _ = dotenv::dotenv();

        let home_dir = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        let config_path = home_dir.join(".folio").join("folio.toml");

        let config = config::Config::builder()
            .add_source(config::File::with_name("folio.toml").required(false))
            .add_source(config::File::from(config_path.as_path()).required(false))
            .add_source(config::Environment::with_prefix("FOLIO").separator("__"))
            .build()?;
        config.try_deserialize()
    }
}
