//! # 系统处理器

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::api::response;
use crate::api::server::AppState;
use crate::error::AppError;

/// 存活检查，同时探测数据库连接
pub async fn ping(State(state): State<AppState>) -> Response {
    match state.db.ping().await {
        Ok(()) => response::success(json!({ "status": "ok" })),
        Err(e) => AppError::database_with_source("数据库不可用", e).into_response(),
    }
}

pub async fn not_found() -> Response {
    response::error(StatusCode::NOT_FOUND, "NOT_FOUND", "接口不存在")
}
