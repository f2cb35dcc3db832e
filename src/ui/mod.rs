pub mod form_error;
pub mod pages;
mod templates;

pub use pages::{InvoiceFormPage, Pages};
