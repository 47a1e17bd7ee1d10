//! # 用户处理器

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Extension, State};
use axum::http::HeaderMap;
use axum::response::Response;
use serde::Deserialize;

use super::parse_body;
use crate::api::middleware::RequestId;
use crate::api::response;
use crate::api::server::AppState;
use crate::api::services::users::{CreateUserRequest, UsersService};
use crate::auth::{AuthHeaders, LoginRequest};
use crate::error::Result;

#[derive(Debug, Default, Deserialize)]
pub struct QueryUserRequest {
    #[serde(default)]
    pub uid: Option<i32>,
}

/// 查询用户资料：指定 uid，否则取访问令牌中的用户
pub async fn query_user(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    headers: HeaderMap,
    payload: std::result::Result<Json<QueryUserRequest>, JsonRejection>,
) -> Result<Response> {
    let request = parse_body(payload)?;
    let access_token = AuthHeaders::from_header_map(&headers).access_token;

    let profile = UsersService::new(&state)
        .query(&request_id, request.uid, access_token)
        .await?;
    Ok(response::success(profile))
}

pub async fn create_user(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    payload: std::result::Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<Response> {
    let request = parse_body(payload)?;
    UsersService::new(&state).create(&request_id, request).await?;
    Ok(response::success_without_data("用户创建成功"))
}

pub async fn login(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    payload: std::result::Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Response> {
    let request = parse_body(payload)?;
    let pair = state.auth.login(&request_id, &request).await?;
    Ok(response::success_with_message(pair, "登录成功"))
}

/// 刷新令牌来自 `X-Refresh-Token`，请求体忽略
pub async fn refresh(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    headers: HeaderMap,
) -> Result<Response> {
    let refresh_token = AuthHeaders::from_header_map(&headers).refresh_token;
    let pair = state.auth.refresh(&request_id, refresh_token)?;
    Ok(response::success(pair))
}
