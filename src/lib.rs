//! # Press API Library
//!
//! 内容站点后端核心库：用户注册、登录、资料查询，以及 JWT 访问/刷新令牌的签发与请求门禁

pub mod api;
pub mod app;
pub mod auth;
pub mod config;
pub mod database;
pub mod error;
pub mod logging;
pub mod testing;

// Re-export commonly used types
pub use config::AppConfig;
pub use error::{AppError, Result};
