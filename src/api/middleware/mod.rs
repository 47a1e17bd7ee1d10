//! # 中间件

pub mod auth;
pub mod request_id;

pub use auth::ensure_logged_in;
pub use request_id::{RequestId, request_id_middleware};
