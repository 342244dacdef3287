use folio_domain::SiteInfo;
use folio_service::{ContentStore, LinkPreviewService};
use std::sync::Arc;

use crate::security::AdminToken;

/// 应用状态
/// 包含所有需要的服务实例
#[derive(Clone)]
pub struct AppState {
    pub content_store: Arc<dyn ContentStore>,
    pub preview_service: Arc<LinkPreviewService>,
    pub site: Arc<SiteInfo>,
    /// 未配置时所有管理端请求都被拒绝
    pub admin_token: Option<AdminToken>,
}
