//! # 登录门禁中间件
//!
//! 按路由表取出访问策略，交给 `AuthGateway` 判定；拒绝时直接返回 401。

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use super::request_id::RequestId;
use crate::api::server::AppState;
use crate::auth::{AuthDecision, AuthHeaders};
use crate::error::AppError;
use crate::logging::{LogComponent, LogStage};
use crate::{ldebug, lwarn};

pub async fn ensure_logged_in(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let request_id = request
        .extensions()
        .get::<RequestId>()
        .map_or_else(|| "-".to_string(), ToString::to_string);
    let path = request.uri().path().to_string();
    let policy = state.routes.policy_for(&path);

    let decision = state
        .gateway
        .authorize(&AuthHeaders::from_header_map(request.headers()), policy);

    match decision {
        AuthDecision::Allow => {
            ldebug!(
                request_id,
                LogStage::Authentication,
                LogComponent::Gateway,
                "allow",
                format!("{path} allowed")
            );
            next.run(request).await
        }
        AuthDecision::Deny(denial) => {
            lwarn!(
                request_id,
                LogStage::Authentication,
                LogComponent::Gateway,
                "deny",
                format!("{path} denied: {denial}")
            );
            AppError::auth(denial).into_response()
        }
    }
}
