use crate::models::{
    format_currency, Customer, FormState, Invoice, InvoiceForm, FIELD_AMOUNT, FIELD_CUSTOMER_ID,
    FIELD_STATUS,
};
use crate::ui::{form_error, templates};
use serde::Serialize;
use serde_json::json;
use std::collections::HashMap;
use tera::{Context, Tera};

/// 列表中的一行 (已格式化)
#[derive(Debug, Serialize)]
struct InvoiceRow<'a> {
    id: &'a str,
    customer: &'a str,
    amount: String,
    status: &'a str,
    date: String,
}

/// 创建/编辑页的参数
#[derive(Debug)]
pub struct InvoiceFormPage<'a> {
    pub title: &'a str,
    pub action: String,
    pub submit_label: &'a str,
    pub customers: &'a [Customer],
    pub values: &'a InvoiceForm,
    pub state: &'a FormState,
}

/// 服务端渲染的页面
pub struct Pages {
    tera: Tera,
}

impl Pages {
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("layout.html", templates::LAYOUT),
            ("invoices.html", templates::INVOICE_LIST),
            ("invoice_form.html", templates::INVOICE_FORM),
        ])?;
        Ok(Self { tera })
    }

    pub fn invoice_list(
        &self,
        invoices: &[Invoice],
        customers: &[Customer],
        message: Option<&str>,
    ) -> Result<String, tera::Error> {
        let names: HashMap<&str, &str> = customers
            .iter()
            .map(|c| (c.id.as_str(), c.name.as_str()))
            .collect();

        let rows: Vec<InvoiceRow> = invoices
            .iter()
            .map(|invoice| InvoiceRow {
                id: &invoice.id,
                customer: names
                    .get(invoice.customer_id.as_str())
                    .copied()
                    .unwrap_or(invoice.customer_id.as_str()),
                amount: format_currency(invoice.amount),
                status: &invoice.status,
                date: invoice.date.to_string(),
            })
            .collect();

        let context = Context::from_serialize(json!({
            "invoices": rows,
            "message": message,
        }))?;
        self.tera.render("invoices.html", &context)
    }

    pub fn invoice_form(&self, page: &InvoiceFormPage<'_>) -> Result<String, tera::Error> {
        let state = page.state;
        let context = Context::from_serialize(json!({
            "title": page.title,
            "action": page.action,
            "submit_label": page.submit_label,
            "customers": page.customers,
            "values": {
                "customer_id": page.values.customer_id.as_deref().unwrap_or_default(),
                "amount": page.values.amount.as_deref().unwrap_or_default(),
                "status": page.values.status.as_deref().unwrap_or_default(),
            },
            "customer_error": form_error::render("customer-error", state.field_errors(FIELD_CUSTOMER_ID)),
            "amount_error": form_error::render("amount-error", state.field_errors(FIELD_AMOUNT)),
            "status_error": form_error::render("status-error", state.field_errors(FIELD_STATUS)),
            "message": state.message,
        }))?;
        self.tera.render("invoice_form.html", &context)
    }
}
