use dashmap::DashMap;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// 发票列表视图路径，同时作为缓存标签和重定向目标
pub const INVOICES_PATH: &str = "/dashboard/invoices";

/// 按路径缓存已渲染的页面
///
/// 写操作成功后调用 [`ViewCache::invalidate`]，下一次读取会从数据库重新渲染。
#[derive(Debug, Default)]
pub struct ViewCache {
    views: DashMap<String, Arc<str>>,
    invalidations: AtomicU64,
}

impl ViewCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, path: &str) -> Option<Arc<str>> {
        self.views.get(path).map(|entry| entry.value().clone())
    }

    pub fn insert(&self, path: &str, body: impl Into<Arc<str>>) -> Arc<str> {
        let body = body.into();
        self.views.insert(path.to_string(), body.clone());
        body
    }

    /// 命中直接返回，未命中时渲染并缓存；渲染失败不缓存
    ///
    /// 渲染期间发生过失效时，结果只返回给本次调用，不留在缓存中。
    pub async fn get_or_render<F, Fut, E>(&self, path: &str, render: F) -> Result<Arc<str>, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<String, E>>,
    {
        if let Some(hit) = self.get(path) {
            tracing::debug!("view cache hit: {}", path);
            return Ok(hit);
        }

        tracing::debug!("view cache miss: {}", path);
        let generation = self.invalidations();
        let body = self.insert(path, render().await?);

        if self.invalidations() != generation {
            self.views.remove_if(path, |_, cached| Arc::ptr_eq(cached, &body));
            tracing::debug!("view invalidated during render, not cached: {}", path);
        }
        Ok(body)
    }

    /// 标记视图失效，返回是否有缓存被移除
    pub fn invalidate(&self, path: &str) -> bool {
        self.invalidations.fetch_add(1, Ordering::SeqCst);
        let removed = self.views.remove(path).is_some();
        tracing::debug!("view invalidated: {} (cached: {})", path, removed);
        removed
    }

    /// 累计失效次数
    pub fn invalidations(&self) -> u64 {
        self.invalidations.load(Ordering::SeqCst)
    }
}
