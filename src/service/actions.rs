use crate::db::InvoiceStore;
use crate::error::InvoiceError;
use crate::models::{ActionOutcome, FormState, InvoiceChanges, InvoiceForm, NewInvoice};
use crate::service::cache::{ViewCache, INVOICES_PATH};
use crate::service::validation::validate_invoice;
use chrono::Utc;
use std::sync::Arc;

#[derive(Debug, Clone, Copy)]
enum Operation {
    Create,
    Update,
    Delete,
}

impl Operation {
    fn verb(self) -> &'static str {
        match self {
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
        }
    }

    fn missing_fields_message(self) -> String {
        format!("Missing Fields. Failed to {} invoice.", self.verb())
    }

    fn database_error_message(self) -> String {
        format!("Database Error: Failed to {} invoice.", self.verb())
    }
}

/// 发票写操作：校验 -> 入库 -> 失效列表视图 -> 重定向
pub struct InvoiceActions {
    store: Arc<dyn InvoiceStore>,
    cache: Arc<ViewCache>,
}

impl InvoiceActions {
    pub fn new(store: Arc<dyn InvoiceStore>, cache: Arc<ViewCache>) -> Self {
        Self { store, cache }
    }

    pub async fn create_invoice(&self, form: InvoiceForm) -> ActionOutcome {
        let result = self.try_create(&form).await;
        self.finish(Operation::Create, result)
    }

    pub async fn update_invoice(&self, id: &str, form: InvoiceForm) -> ActionOutcome {
        let result = self.try_update(id, &form).await;
        self.finish(Operation::Update, result)
    }

    /// 删除不做校验；无论成功与否都失效列表视图
    pub async fn delete_invoice(&self, id: &str) -> ActionOutcome {
        let result = self.store.delete(id).await;
        self.cache.invalidate(INVOICES_PATH);

        match result {
            Ok(deleted) => {
                if deleted {
                    tracing::info!("Invoice {} deleted", id);
                } else {
                    tracing::info!("Invoice {} already absent, nothing deleted", id);
                }
                ActionOutcome::Redirect(INVOICES_PATH.to_string())
            }
            Err(e) => {
                tracing::error!("删除发票 {} 失败: {}", id, e);
                ActionOutcome::Form(FormState::failed(Operation::Delete.database_error_message()))
            }
        }
    }

    async fn try_create(&self, form: &InvoiceForm) -> Result<(), InvoiceError> {
        let valid = validate_invoice(form)?;
        let amount = valid.amount_in_cents();

        let invoice = NewInvoice {
            customer_id: valid.customer_id,
            amount,
            status: valid.status,
            date: Utc::now().date_naive(),
        };
        self.store.insert(&invoice).await?;

        tracing::info!(
            "Invoice created: customer {}, amount {}, status {}, date {}",
            invoice.customer_id, invoice.amount, invoice.status, invoice.date
        );
        Ok(())
    }

    async fn try_update(&self, id: &str, form: &InvoiceForm) -> Result<(), InvoiceError> {
        let valid = validate_invoice(form)?;
        let amount = valid.amount_in_cents();

        let changes = InvoiceChanges {
            customer_id: valid.customer_id,
            amount,
            status: valid.status,
        };
        self.store.update(id, &changes).await?;

        tracing::info!("Invoice {} updated", id);
        Ok(())
    }

    fn finish(&self, operation: Operation, result: Result<(), InvoiceError>) -> ActionOutcome {
        match result {
            Ok(()) => {
                self.cache.invalidate(INVOICES_PATH);
                ActionOutcome::Redirect(INVOICES_PATH.to_string())
            }
            Err(InvoiceError::Validation(errors)) => {
                tracing::info!(
                    "{} invoice rejected, invalid fields: {:?}",
                    operation.verb(),
                    errors.fields().collect::<Vec<_>>()
                );
                ActionOutcome::Form(FormState::invalid(errors, operation.missing_fields_message()))
            }
            Err(InvoiceError::Persistence(e)) => {
                tracing::error!("{} invoice failed: {}", operation.verb(), e);
                ActionOutcome::Form(FormState::failed(operation.database_error_message()))
            }
        }
    }
}
