//! # 路由配置
//!
//! API 路由与每条路由的访问策略。门禁中间件只认这里登记的策略，
//! 未登记的路径按受保护处理。

use axum::Router;
use axum::middleware::{from_fn, from_fn_with_state};
use axum::routing::{get, post};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers::{cookbook, system, user};
use super::middleware::{ensure_logged_in, request_id_middleware};
use super::server::AppState;
use crate::auth::RoutePolicy;
use crate::auth::gateway::{ACCESS_TOKEN_HEADER, REFRESH_TOKEN_HEADER};

pub const USER_QUERY: &str = "/api/user";
pub const USER_CREATE: &str = "/api/user/create";
pub const USER_LOGIN: &str = "/api/user/login";
pub const USER_REFRESH: &str = "/api/user/refresh";
pub const COOKBOOK: &str = "/api/cookbook";

/// 路由表中的一项
#[derive(Debug, Clone, Serialize)]
pub struct RouteEntry {
    pub method: &'static str,
    pub path: &'static str,
    pub policy: RoutePolicy,
    pub description: &'static str,
}

/// 路径 -> 访问策略
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    pub fn register(
        &mut self,
        path: &'static str,
        policy: RoutePolicy,
        description: &'static str,
    ) -> &mut Self {
        self.entries.push(RouteEntry {
            method: "POST",
            path,
            policy,
            description,
        });
        self
    }

    /// 未登记的路径返回默认策略（需要登录）
    #[must_use]
    pub fn policy_for(&self, path: &str) -> RoutePolicy {
        let path = path.strip_suffix('/').filter(|p| !p.is_empty()).unwrap_or(path);
        self.entries
            .iter()
            .find(|entry| entry.path == path)
            .map_or_else(RoutePolicy::default, |entry| entry.policy)
    }

    #[must_use]
    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }
}

/// 全部 API 路由的访问策略
#[must_use]
pub fn route_table() -> RouteTable {
    let mut table = RouteTable::default();
    table
        .register(USER_QUERY, RoutePolicy::PUBLIC, "查询用户资料")
        .register(USER_CREATE, RoutePolicy::PROTECTED, "创建用户")
        .register(USER_LOGIN, RoutePolicy::PUBLIC, "用户名或邮箱登录")
        .register(USER_REFRESH, RoutePolicy::REFRESHABLE, "使用刷新令牌换取新令牌")
        .register(COOKBOOK, RoutePolicy::PUBLIC, "接口清单");
    table
}

/// 创建所有路由
pub fn create_routes(state: AppState) -> Router {
    let api_routes = Router::new()
        .route(USER_QUERY, post(user::query_user))
        .route(USER_CREATE, post(user::create_user))
        .route(USER_LOGIN, post(user::login))
        .route(USER_REFRESH, post(user::refresh))
        .route(COOKBOOK, post(cookbook::cookbook))
        .route_layer(from_fn_with_state(state.clone(), ensure_logged_in));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::HeaderName::from_static(ACCESS_TOKEN_HEADER),
            axum::http::HeaderName::from_static(REFRESH_TOKEN_HEADER),
        ]);

    Router::new()
        .merge(api_routes)
        .route("/ping", get(system::ping))
        .fallback(system::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
