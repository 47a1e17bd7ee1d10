//! # Cookbook 处理器
//!
//! 凭口令返回接口清单及每个接口的访问策略

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Extension, State};
use axum::response::Response;

use crate::api::middleware::RequestId;
use crate::api::response;
use crate::api::server::AppState;
use crate::error::{AppError, Result};
use crate::linfo;
use crate::logging::{LogComponent, LogStage};

const WRONG_PASSWORD: &str = "Only with the correct parameters can Cookbook be accessed";

pub async fn cookbook(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    payload: std::result::Result<Json<String>, JsonRejection>,
) -> Result<Response> {
    let password = super::parse_body(payload)?;
    if password != state.config.cookbook.password {
        return Err(AppError::business(WRONG_PASSWORD));
    }

    linfo!(
        request_id,
        LogStage::BusinessLogic,
        LogComponent::Cookbook,
        "cookbook",
        "route catalog served"
    );
    Ok(response::success(state.routes.entries()))
}
