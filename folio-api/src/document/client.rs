use crate::document::{Document, StoreResult};
use async_trait::async_trait;

/// DocumentClient trait 定义文档的点查、全量扫描、单文档upsert和删除
///
/// 实现只需要保证单文档操作的原子性，不提供跨文档事务。
#[async_trait]
pub trait DocumentClient: Send + Sync {
    async fn fetch<D: Document>(&self, key: &str) -> StoreResult<Option<D>>;
    async fn list<D: Document>(&self) -> StoreResult<Vec<D>>;
    async fn upsert<D: Document>(&self, document: D) -> StoreResult<D>;
    /// 删除文档，返回文档在删除前是否存在
    async fn delete<D: Document>(&self, key: &str) -> StoreResult<bool>;
}
