//! # 服务层
//!
//! 封装 HTTP handler 背后的业务逻辑

pub mod users;

pub use users::{CreateUserRequest, UserProfile, UsersService};
