use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use sha2::{Digest, Sha256};

use crate::error::ApiError;
use crate::AppState;

/// 管理员令牌请求头
pub const ADMIN_TOKEN_HEADER: &str = "x-admin-token";

/// 管理员令牌，只保存SHA-256摘要
#[derive(Clone)]
pub struct AdminToken {
    digest: [u8; 32],
}

impl AdminToken {
    /// 空令牌视为未配置
    pub fn new(secret: &str) -> Option<Self> {
        let secret = secret.trim();
        if secret.is_empty() {
            return None;
        }
        Some(Self {
            digest: Sha256::digest(secret.as_bytes()).into(),
        })
    }

    /// 比较摘要，耗时与不匹配的位置无关
    pub fn verify(&self, candidate: &str) -> bool {
        let candidate: [u8; 32] = Sha256::digest(candidate.trim().as_bytes()).into();
        self.digest
            .iter()
            .zip(candidate.iter())
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
    }
}

impl std::fmt::Debug for AdminToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AdminToken(..)")
    }
}

/// 从 `Authorization: Bearer` 或 `x-admin-token` 中提取令牌
fn extract_token(headers: &HeaderMap) -> Option<&str> {
    let bearer = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "));

    bearer.or_else(|| {
        headers
            .get(ADMIN_TOKEN_HEADER)
            .and_then(|v| v.to_str().ok())
    })
}

/// 管理端认证中间件
/// 令牌缺失、错误或服务端未配置令牌时返回401
pub async fn admin_auth_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let Some(expected) = &state.admin_token else {
        tracing::warn!(path = %request.uri().path(), "admin token is not configured; rejecting request");
        return ApiError::Unauthorized.into_response();
    };

    let authorized = extract_token(request.headers()).is_some_and(|token| expected.verify(token));
    if !authorized {
        tracing::debug!(path = %request.uri().path(), "rejected admin request");
        return ApiError::Unauthorized.into_response();
    }

    next.run(request).await
}
