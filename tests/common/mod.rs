#![allow(dead_code)]

use async_trait::async_trait;
use dashmap::DashMap;
use invoice_dashboard::models::{Customer, Invoice, InvoiceChanges, NewInvoice};
use invoice_dashboard::{InvoiceStore, StoreError};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// 内存发票库，可切换为"数据库故障"模式
#[derive(Default)]
pub struct MemoryStore {
    invoices: DashMap<String, Invoice>,
    next_id: AtomicUsize,
    writes: AtomicUsize,
    failing: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_writes(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// 写操作调用次数 (包括失败的调用)
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn all(&self) -> Vec<Invoice> {
        let mut invoices: Vec<Invoice> = self.invoices.iter().map(|e| e.value().clone()).collect();
        invoices.sort_by(|a, b| a.id.cmp(&b.id));
        invoices
    }

    pub fn seed(&self, invoice: Invoice) {
        self.invoices.insert(invoice.id.clone(), invoice);
    }

    fn begin_write(&self) -> Result<(), StoreError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl InvoiceStore for MemoryStore {
    async fn insert(&self, invoice: &NewInvoice) -> Result<(), StoreError> {
        self.begin_write()?;
        let id = format!("inv-{}", self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        self.invoices.insert(
            id.clone(),
            Invoice {
                id,
                customer_id: invoice.customer_id.clone(),
                amount: invoice.amount,
                status: invoice.status.as_str().to_string(),
                date: invoice.date,
            },
        );
        Ok(())
    }

    async fn update(&self, id: &str, changes: &InvoiceChanges) -> Result<(), StoreError> {
        self.begin_write()?;
        let mut entry = self
            .invoices
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        entry.customer_id = changes.customer_id.clone();
        entry.amount = changes.amount;
        entry.status = changes.status.as_str().to_string();
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        self.begin_write()?;
        Ok(self.invoices.remove(id).is_some())
    }

    async fn find(&self, id: &str) -> Result<Option<Invoice>, StoreError> {
        Ok(self.invoices.get(id).map(|e| e.value().clone()))
    }

    async fn list(&self) -> Result<Vec<Invoice>, StoreError> {
        Ok(self.all())
    }

    async fn customers(&self) -> Result<Vec<Customer>, StoreError> {
        Ok(vec![
            Customer { id: "c1".to_string(), name: "Evil Rabbit".to_string() },
            Customer { id: "c2".to_string(), name: "Lee Robinson".to_string() },
        ])
    }
}
