pub mod actions;
pub mod cache;
pub mod validation;

pub use actions::InvoiceActions;
pub use cache::{ViewCache, INVOICES_PATH};
pub use validation::{validate_invoice, ValidatedInvoice};
