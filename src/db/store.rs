use crate::db::queries;
use crate::error::StoreError;
use crate::models::{Customer, Invoice, InvoiceChanges, NewInvoice};
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

/// 发票持久化接口
///
/// 每个方法对应一条参数化语句，不做重试，不跨语句开启事务。
#[async_trait]
pub trait InvoiceStore: Send + Sync {
    async fn insert(&self, invoice: &NewInvoice) -> Result<(), StoreError>;

    /// 没有匹配行时返回 [`StoreError::NotFound`]
    async fn update(&self, id: &str, changes: &InvoiceChanges) -> Result<(), StoreError>;

    /// 返回是否删除了一行；id 不存在不算错误
    async fn delete(&self, id: &str) -> Result<bool, StoreError>;

    async fn find(&self, id: &str) -> Result<Option<Invoice>, StoreError>;

    async fn list(&self) -> Result<Vec<Invoice>, StoreError>;

    async fn customers(&self) -> Result<Vec<Customer>, StoreError>;
}

/// PostgreSQL 实现
#[derive(Clone)]
pub struct PgInvoiceStore {
    pool: PgPool,
}

impl PgInvoiceStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// 路径中的 id 不是 UUID 时视为不存在，不发给数据库
fn parse_id(id: &str) -> Option<Uuid> {
    match Uuid::parse_str(id) {
        Ok(uuid) => Some(uuid),
        Err(e) => {
            tracing::debug!("invoice id {:?} is not a uuid: {}", id, e);
            None
        }
    }
}

#[async_trait]
impl InvoiceStore for PgInvoiceStore {
    async fn insert(&self, invoice: &NewInvoice) -> Result<(), StoreError> {
        queries::insert_invoice(&self.pool, invoice).await?;
        Ok(())
    }

    async fn update(&self, id: &str, changes: &InvoiceChanges) -> Result<(), StoreError> {
        let Some(uuid) = parse_id(id) else {
            return Err(StoreError::NotFound(id.to_string()));
        };
        match queries::update_invoice(&self.pool, &uuid, changes).await? {
            0 => Err(StoreError::NotFound(id.to_string())),
            _ => Ok(()),
        }
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let Some(uuid) = parse_id(id) else {
            return Ok(false);
        };
        let affected = queries::delete_invoice(&self.pool, &uuid).await?;
        Ok(affected > 0)
    }

    async fn find(&self, id: &str) -> Result<Option<Invoice>, StoreError> {
        let Some(uuid) = parse_id(id) else {
            return Ok(None);
        };
        Ok(queries::get_invoice(&self.pool, &uuid).await?)
    }

    async fn list(&self) -> Result<Vec<Invoice>, StoreError> {
        Ok(queries::list_invoices(&self.pool).await?)
    }

    async fn customers(&self) -> Result<Vec<Customer>, StoreError> {
        Ok(queries::list_customers(&self.pool).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::InvoiceStatus;

    // 惰性连接池：只有真正执行语句时才会连接
    fn lazy_store() -> PgInvoiceStore {
        PgInvoiceStore::new(PgPool::connect_lazy("postgres://localhost/invoices").unwrap())
    }

    #[test]
    fn only_uuids_are_accepted_as_ids() {
        assert!(parse_id("3958dc9e-712f-4377-85e9-fec4b6a6442a").is_some());
        assert!(parse_id("nope").is_none());
        assert!(parse_id("1; DROP TABLE invoices").is_none());
        assert!(parse_id("").is_none());
    }

    #[tokio::test]
    async fn malformed_id_maps_to_absent_without_querying() {
        let store = lazy_store();

        assert!(store.find("nope").await.unwrap().is_none());
        assert!(!store.delete("nope").await.unwrap());

        let changes = InvoiceChanges {
            customer_id: "3958dc9e-712f-4377-85e9-fec4b6a6442a".to_string(),
            amount: 100,
            status: InvoiceStatus::Paid,
        };
        match store.update("nope", &changes).await {
            Err(StoreError::NotFound(id)) => assert_eq!(id, "nope"),
            other => panic!("expected not found, got {other:?}"),
        }
    }
}
