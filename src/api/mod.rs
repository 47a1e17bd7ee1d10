//! # HTTP API
//!
//! 路由、门禁中间件、处理器与响应格式

pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod services;

pub use routes::{RouteTable, create_routes, route_table};
pub use server::{ApiServer, AppState};
