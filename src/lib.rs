pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod service;
pub mod ui;

pub use api::{router, AppState};
pub use config::AppConfig;
pub use db::{create_pool, InvoiceStore, PgInvoiceStore};
pub use error::{InvoiceError, StoreError};
pub use service::{InvoiceActions, ViewCache};
