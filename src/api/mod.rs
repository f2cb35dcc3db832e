pub mod handlers;

use crate::db::InvoiceStore;
use crate::error::StoreError;
use crate::service::{InvoiceActions, ViewCache};
use crate::ui::Pages;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use thiserror::Error;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// 共享状态：连接池句柄经由 store 显式传入，无全局变量
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn InvoiceStore>,
    pub cache: Arc<ViewCache>,
    pub actions: Arc<InvoiceActions>,
    pub pages: Arc<Pages>,
}

impl AppState {
    pub fn new(store: Arc<dyn InvoiceStore>) -> Result<Self, tera::Error> {
        let cache = Arc::new(ViewCache::new());
        let actions = Arc::new(InvoiceActions::new(store.clone(), cache.clone()));
        Ok(Self {
            store,
            cache,
            actions,
            pages: Arc::new(Pages::new()?),
        })
    }
}

/// 页面处理器错误
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("render error: {0}")]
    Render(#[from] tera::Error),

    #[error("{0} not found")]
    NotFound(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NotFound(_) | AppError::Store(StoreError::NotFound(_)) => StatusCode::NOT_FOUND,
            AppError::Store(_) | AppError::Render(_) => {
                tracing::error!("request failed: {}", self);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let message = match status {
            StatusCode::NOT_FOUND => "Not Found",
            _ => "Something went wrong!",
        };
        (status, Html(format!("<h1>{}</h1>", message))).into_response()
    }
}

/// 构建路由
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/dashboard/invoices", get(handlers::list_invoices))
        .route(
            "/dashboard/invoices/create",
            get(handlers::create_form).post(handlers::create_invoice),
        )
        .route(
            "/dashboard/invoices/:id/edit",
            get(handlers::edit_form).post(handlers::update_invoice),
        )
        .route("/dashboard/invoices/:id/delete", post(handlers::delete_invoice))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}
