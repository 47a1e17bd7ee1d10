//! # 认证模块
//!
//! 令牌签发与校验、请求门禁、登录与刷新

pub mod gateway;
pub mod jwt;
pub mod password;
pub mod service;
pub mod store;
pub mod types;

pub use gateway::{AuthDecision, AuthDenial, AuthGateway, AuthHeaders, RoutePolicy};
pub use jwt::{JwtManager, VerifyError};
pub use password::{BcryptPasswordVerifier, PasswordVerifier};
pub use service::AuthService;
pub use store::{NewUser, SeaOrmUserStore, UserStore};
pub use types::{JwtClaims, LoginRequest, TokenKind, TokenPair, TokenPayload};
