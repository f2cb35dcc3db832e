use crate::models::Invoice;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// 表单字段名 (与页面 `name` 属性一致)
pub const FIELD_CUSTOMER_ID: &str = "customer-id";
pub const FIELD_AMOUNT: &str = "amount";
pub const FIELD_STATUS: &str = "status";

/// 提交的原始表单字段
///
/// 缺失字段保持 `None`，由校验器决定如何处理。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InvoiceForm {
    #[serde(rename = "customer-id", default)]
    pub customer_id: Option<String>,
    #[serde(default)]
    pub amount: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl InvoiceForm {
    pub fn new(customer_id: &str, amount: &str, status: &str) -> Self {
        Self {
            customer_id: Some(customer_id.to_string()),
            amount: Some(amount.to_string()),
            status: Some(status.to_string()),
        }
    }

    /// 编辑页初始值，金额由分换回主币单位
    pub fn from_invoice(invoice: &Invoice) -> Self {
        let cents = i64::from(invoice.amount);
        Self {
            customer_id: Some(invoice.customer_id.clone()),
            amount: Some(format!("{}.{:02}", cents / 100, cents % 100)),
            status: Some(invoice.status.clone()),
        }
    }
}

/// 字段名 -> 有序错误信息列表
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(IndexMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_string()).or_default().push(message.into());
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

/// 页面表单状态：最近一次提交的校验/持久化结果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl FormState {
    pub fn invalid(errors: FieldErrors, message: impl Into<String>) -> Self {
        Self {
            errors: Some(errors),
            message: Some(message.into()),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            errors: None,
            message: Some(message.into()),
        }
    }

    pub fn field_errors(&self, field: &str) -> Option<&[String]> {
        self.errors.as_ref().and_then(|e| e.get(field))
    }

    pub fn has_field_errors(&self) -> bool {
        self.errors.as_ref().is_some_and(|e| !e.is_empty())
    }
}

/// 操作结果：成功时重定向，否则带回表单状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Redirect(String),
    Form(FormState),
}

impl ActionOutcome {
    pub fn is_redirect(&self) -> bool {
        matches!(self, ActionOutcome::Redirect(_))
    }
}
