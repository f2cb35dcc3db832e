use crate::api::{AppError, AppState};
use crate::models::{ActionOutcome, FormState, InvoiceForm};
use crate::service::INVOICES_PATH;
use crate::ui::InvoiceFormPage;
use axum::{
    extract::{Form, Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};

/// 健康检查
pub async fn health_check() -> &'static str {
    "OK"
}

/// 发票列表 (带视图缓存)
pub async fn list_invoices(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let AppState { store, cache, pages, .. } = state;
    let body = cache
        .get_or_render(INVOICES_PATH, || async move {
            let invoices = store.list().await?;
            let customers = store.customers().await?;
            Ok::<_, AppError>(pages.invoice_list(&invoices, &customers, None)?)
        })
        .await?;

    Ok(Html(body.to_string()))
}

/// 创建页
pub async fn create_form(State(state): State<AppState>) -> Result<Response, AppError> {
    render_create_form(&state, &InvoiceForm::default(), &FormState::default(), StatusCode::OK).await
}

/// 创建发票
pub async fn create_invoice(
    State(state): State<AppState>,
    Form(form): Form<InvoiceForm>,
) -> Result<Response, AppError> {
    match state.actions.create_invoice(form.clone()).await {
        ActionOutcome::Redirect(target) => Ok(Redirect::to(&target).into_response()),
        ActionOutcome::Form(form_state) => {
            render_create_form(&state, &form, &form_state, status_for(&form_state)).await
        }
    }
}

/// 编辑页
pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let invoice = state
        .store
        .find(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("invoice {}", id)))?;

    let values = InvoiceForm::from_invoice(&invoice);
    render_edit_form(&state, &id, &values, &FormState::default(), StatusCode::OK).await
}

/// 更新发票
pub async fn update_invoice(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<InvoiceForm>,
) -> Result<Response, AppError> {
    match state.actions.update_invoice(&id, form.clone()).await {
        ActionOutcome::Redirect(target) => Ok(Redirect::to(&target).into_response()),
        ActionOutcome::Form(form_state) => {
            render_edit_form(&state, &id, &form, &form_state, status_for(&form_state)).await
        }
    }
}

/// 删除发票；失败时在列表页显示错误 (不缓存)
pub async fn delete_invoice(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    match state.actions.delete_invoice(&id).await {
        ActionOutcome::Redirect(target) => Ok(Redirect::to(&target).into_response()),
        ActionOutcome::Form(form_state) => {
            let invoices = state.store.list().await.unwrap_or_else(|e| {
                tracing::warn!("无法加载发票列表: {}", e);
                Vec::new()
            });
            let customers = load_customers(&state).await;
            let body = state
                .pages
                .invoice_list(&invoices, &customers, form_state.message.as_deref())?;
            Ok((status_for(&form_state), Html(body)).into_response())
        }
    }
}

/// 字段错误 -> 422，数据库错误 -> 500
fn status_for(form_state: &FormState) -> StatusCode {
    if form_state.has_field_errors() {
        StatusCode::UNPROCESSABLE_ENTITY
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

async fn load_customers(state: &AppState) -> Vec<crate::models::Customer> {
    state.store.customers().await.unwrap_or_else(|e| {
        tracing::warn!("无法加载客户列表: {}", e);
        Vec::new()
    })
}

async fn render_create_form(
    state: &AppState,
    values: &InvoiceForm,
    form_state: &FormState,
    status: StatusCode,
) -> Result<Response, AppError> {
    let customers = load_customers(state).await;
    let body = state.pages.invoice_form(&InvoiceFormPage {
        title: "Create Invoice",
        action: format!("{}/create", INVOICES_PATH),
        submit_label: "Create Invoice",
        customers: &customers,
        values,
        state: form_state,
    })?;
    Ok((status, Html(body)).into_response())
}

async fn render_edit_form(
    state: &AppState,
    id: &str,
    values: &InvoiceForm,
    form_state: &FormState,
    status: StatusCode,
) -> Result<Response, AppError> {
    let customers = load_customers(state).await;
    let body = state.pages.invoice_form(&InvoiceFormPage {
        title: "Edit Invoice",
        action: format!("{}/{}/edit", INVOICES_PATH, id),
        submit_label: "Edit Invoice",
        customers: &customers,
        values,
        state: form_state,
    })?;
    Ok((status, Html(body)).into_response())
}
