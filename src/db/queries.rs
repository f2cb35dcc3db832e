use crate::models::{Customer, Invoice, InvoiceChanges, NewInvoice};
use sqlx::PgPool;
use uuid::Uuid;

/// 插入发票 (id 由数据库生成)
pub async fn insert_invoice(pool: &PgPool, invoice: &NewInvoice) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO invoices (customer_id, amount, status, date)
        VALUES ($1::uuid, $2, $3, $4)
        "#,
    )
    .bind(&invoice.customer_id)
    .bind(invoice.amount)
    .bind(invoice.status.as_str())
    .bind(invoice.date)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

/// 按 id 更新发票，返回影响行数
pub async fn update_invoice(
    pool: &PgPool,
    id: &Uuid,
    changes: &InvoiceChanges,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE invoices
        SET customer_id = $1::uuid, amount = $2, status = $3
        WHERE id = $4
        "#,
    )
    .bind(&changes.customer_id)
    .bind(changes.amount)
    .bind(changes.status.as_str())
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

/// 按 id 删除发票，返回影响行数
pub async fn delete_invoice(pool: &PgPool, id: &Uuid) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM invoices WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

/// 查询单张发票 (编辑页)
pub async fn get_invoice(pool: &PgPool, id: &Uuid) -> Result<Option<Invoice>, sqlx::Error> {
    sqlx::query_as::<_, Invoice>(
        r#"
        SELECT id::text AS id,
               customer_id::text AS customer_id,
               amount,
               status,
               date
        FROM invoices
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// 发票列表 (日期降序)
pub async fn list_invoices(pool: &PgPool) -> Result<Vec<Invoice>, sqlx::Error> {
    sqlx::query_as::<_, Invoice>(
        r#"
        SELECT id::text AS id,
               customer_id::text AS customer_id,
               amount,
               status,
               date
        FROM invoices
        ORDER BY date DESC, id
        "#,
    )
    .fetch_all(pool)
    .await
}

/// 客户下拉选项 (按名称升序)
pub async fn list_customers(pool: &PgPool) -> Result<Vec<Customer>, sqlx::Error> {
    sqlx::query_as::<_, Customer>(
        r#"
        SELECT id::text AS id, name
        FROM customers
        ORDER BY name ASC
        "#,
    )
    .fetch_all(pool)
    .await
}
