pub mod form;
pub mod invoice;

pub use form::{
    ActionOutcome, FieldErrors, FormState, InvoiceForm, FIELD_AMOUNT, FIELD_CUSTOMER_ID,
    FIELD_STATUS,
};
pub use invoice::{
    format_currency, Customer, Invoice, InvoiceChanges, InvoiceStatus, NewInvoice, UnknownStatus,
};
