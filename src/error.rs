use crate::models::FieldErrors;
use thiserror::Error;

/// 持久化层错误
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("invoice {0} not found")]
    NotFound(String),
}

/// 发票操作错误：校验失败或持久化失败
#[derive(Debug, Error)]
pub enum InvoiceError {
    #[error("invalid invoice fields: {}", .0.fields().collect::<Vec<_>>().join(", "))]
    Validation(FieldErrors),

    #[error(transparent)]
    Persistence(#[from] StoreError),
}

impl From<FieldErrors> for InvoiceError {
    fn from(errors: FieldErrors) -> Self {
        InvoiceError::Validation(errors)
    }
}
