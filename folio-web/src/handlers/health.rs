/// 健康检查
/// GET /health
pub async fn health() -> &'static str {
    "OK"
}
