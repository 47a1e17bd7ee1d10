//! # 请求处理器

pub mod cookbook;
pub mod system;
pub mod user;

use axum::Json;
use axum::extract::rejection::JsonRejection;

use crate::error::{AppError, Result};

/// 请求体解析失败统一按参数校验错误返回
pub(crate) fn parse_body<T>(payload: std::result::Result<Json<T>, JsonRejection>) -> Result<T> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| AppError::validation("body", rejection.body_text()))
}
