use crate::models::{
    FieldErrors, InvoiceForm, InvoiceStatus, UnknownStatus, FIELD_AMOUNT, FIELD_CUSTOMER_ID,
    FIELD_STATUS,
};
use bigdecimal::{BigDecimal, Signed, ToPrimitive, Zero};
use std::borrow::Cow;
use std::str::FromStr;
use validator::{Validate, ValidationError, ValidationErrors};

pub const CUSTOMER_MESSAGE: &str = "Please select a customer.";
pub const AMOUNT_MESSAGE: &str = "Please enter an amount greater than $0";
pub const AMOUNT_TOO_LARGE_MESSAGE: &str = "Please enter a smaller amount.";
pub const STATUS_MESSAGE: &str = "Please select an invoice status.";

/// 金额解析结果
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
enum ParsedAmount {
    Valid { amount: BigDecimal, cents: i32 },
    NotPositive,
    TooLarge,
}

/// 校验模式：字段在构造时解析一次，校验函数只检查解析结果
#[derive(Debug, Validate)]
struct InvoiceSchema {
    #[validate(length(min = 1, message = "Please select a customer."))]
    customer_id: String,
    #[validate(custom(function = "validate_amount"))]
    amount: ParsedAmount,
    #[validate(custom(function = "validate_status"))]
    status: Result<InvoiceStatus, UnknownStatus>,
}

/// 校验通过的发票数据
///
/// `amount` 仍为主币单位 (元/美元)，入库前通过 [`ValidatedInvoice::amount_in_cents`] 换算。
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedInvoice {
    pub customer_id: String,
    pub amount: BigDecimal,
    pub status: InvoiceStatus,
    cents: i32,
}

impl ValidatedInvoice {
    pub fn amount_in_cents(&self) -> i32 {
        self.cents
    }
}

/// 金额原文长度上限
const MAX_AMOUNT_LEN: usize = 32;
/// 小数位 (scale) 允许范围；超出后不做任何 BigDecimal 运算
const MAX_SCALE: i64 = 64;
const MIN_SCALE: i64 = -18;

/// 字符串 -> 数值，规则：去除首尾空白，空串视为 0，非数字返回 None
pub fn coerce_amount(raw: &str) -> Option<BigDecimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(BigDecimal::zero());
    }
    if trimmed.len() > MAX_AMOUNT_LEN {
        return None;
    }
    BigDecimal::from_str(trimmed).ok()
}

/// 主币单位 -> 分 (四舍五入)，超出 i32 范围返回 None
pub fn to_minor_units(amount: &BigDecimal) -> Option<i32> {
    let (_, scale) = amount.as_bigint_and_exponent();
    if scale < MIN_SCALE {
        return None;
    }
    if scale > MAX_SCALE {
        // 尾数不超过 32 位，数值小于 1e-32
        return Some(0);
    }
    (amount * &BigDecimal::from(100)).round(0).to_i32()
}

fn parse_amount(raw: &str) -> ParsedAmount {
    let Some(amount) = coerce_amount(raw) else {
        return ParsedAmount::NotPositive;
    };
    if !amount.is_positive() {
        return ParsedAmount::NotPositive;
    }
    match to_minor_units(&amount) {
        None => ParsedAmount::TooLarge,
        Some(cents) if cents > 0 => ParsedAmount::Valid { amount, cents },
        Some(_) => ParsedAmount::NotPositive,
    }
}

fn validate_amount(amount: &ParsedAmount) -> Result<(), ValidationError> {
    match amount {
        ParsedAmount::Valid { .. } => Ok(()),
        ParsedAmount::TooLarge => Err(ValidationError::new("amount_range")
            .with_message(Cow::Borrowed(AMOUNT_TOO_LARGE_MESSAGE))),
        ParsedAmount::NotPositive => {
            Err(ValidationError::new("amount_positive").with_message(Cow::Borrowed(AMOUNT_MESSAGE)))
        }
    }
}

fn validate_status(status: &Result<InvoiceStatus, UnknownStatus>) -> Result<(), ValidationError> {
    match status {
        Ok(_) => Ok(()),
        Err(_) => Err(ValidationError::new("status").with_message(Cow::Borrowed(STATUS_MESSAGE))),
    }
}

/// 校验表单，聚合所有字段错误 (按表单字段顺序)
pub fn validate_invoice(form: &InvoiceForm) -> Result<ValidatedInvoice, FieldErrors> {
    let schema = InvoiceSchema {
        customer_id: form.customer_id.clone().unwrap_or_default(),
        amount: parse_amount(form.amount.as_deref().unwrap_or_default()),
        status: InvoiceStatus::from_str(form.status.as_deref().unwrap_or_default()),
    };

    let checked = schema.validate();
    match (checked, schema) {
        (
            Ok(()),
            InvoiceSchema {
                customer_id,
                amount: ParsedAmount::Valid { amount, cents },
                status: Ok(status),
            },
        ) => Ok(ValidatedInvoice {
            customer_id,
            amount,
            status,
            cents,
        }),
        (checked, _) => Err(collect_field_errors(
            &checked.err().unwrap_or_else(ValidationErrors::new),
        )),
    }
}

/// validator 的字段名 -> 表单字段名
const SCHEMA_FIELDS: [(&str, &str); 3] = [
    ("customer_id", FIELD_CUSTOMER_ID),
    ("amount", FIELD_AMOUNT),
    ("status", FIELD_STATUS),
];

fn collect_field_errors(errors: &ValidationErrors) -> FieldErrors {
    let by_field = errors.field_errors();
    let mut collected = FieldErrors::new();

    for (schema_field, form_field) in SCHEMA_FIELDS {
        let Some(field_errors) = by_field.get(schema_field) else {
            continue;
        };
        for error in field_errors.iter() {
            let message = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| error.code.to_string());
            collected.add(form_field, message);
        }
    }

    collected
}
