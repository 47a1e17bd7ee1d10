//! # 请求门禁
//!
//! 根据路由访问策略和请求携带的令牌决定放行或拒绝，在业务逻辑之前执行一次。

use axum::http::HeaderMap;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

use crate::auth::jwt::JwtManager;

/// 访问令牌请求头
pub const ACCESS_TOKEN_HEADER: &str = "authorization";
/// 刷新令牌请求头
pub const REFRESH_TOKEN_HEADER: &str = "x-refresh-token";

// 头存在但不是 UTF-8 时的替代值，不可能通过校验
const UNREADABLE_TOKEN: &str = "unreadable";

/// 路由访问策略
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutePolicy {
    /// 无需登录即可访问
    pub allow_without_login: bool,
    /// 接受只携带刷新令牌的请求
    pub allow_refresh_token: bool,
}

impl RoutePolicy {
    /// 需要有效的访问令牌
    pub const PROTECTED: Self = Self {
        allow_without_login: false,
        allow_refresh_token: false,
    };
    /// 公开访问
    pub const PUBLIC: Self = Self {
        allow_without_login: true,
        allow_refresh_token: false,
    };
    /// 刷新令牌即可
    pub const REFRESHABLE: Self = Self {
        allow_without_login: false,
        allow_refresh_token: true,
    };
}

/// 请求中携带的凭证，空值视为未携带
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthHeaders<'a> {
    pub access_token: Option<&'a str>,
    pub refresh_token: Option<&'a str>,
}

impl<'a> AuthHeaders<'a> {
    #[must_use]
    pub fn new(access_token: Option<&'a str>, refresh_token: Option<&'a str>) -> Self {
        Self {
            access_token: access_token.filter(|t| !t.is_empty()),
            refresh_token: refresh_token.filter(|t| !t.is_empty()),
        }
    }

    /// 从 HTTP 头读取；非 UTF-8 的值视为携带了无效令牌
    #[must_use]
    pub fn from_header_map(headers: &'a HeaderMap) -> Self {
        let read = |name: &str| {
            headers
                .get(name)
                .map(|v| v.to_str().unwrap_or(UNREADABLE_TOKEN))
        };
        Self::new(read(ACCESS_TOKEN_HEADER), read(REFRESH_TOKEN_HEADER))
    }

    const fn is_empty(&self) -> bool {
        self.access_token.is_none() && self.refresh_token.is_none()
    }
}

/// 拒绝原因，`code()` 是对外稳定的错误码
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthDenial {
    /// 受保护路由上没有任何令牌
    DeviceNotLogin,
    /// 该路由不接受刷新令牌，或刷新接口缺少刷新令牌
    RefreshTokenNeeded,
    /// 令牌校验失败
    InvalidToken,
}

impl AuthDenial {
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::DeviceNotLogin => "DEVICE_NOT_LOGIN",
            Self::RefreshTokenNeeded => "REFRESH_TOKEN_NEEDED",
            Self::InvalidToken => "INVALID_TOKEN",
        }
    }

    #[must_use]
    pub const fn default_message(self) -> &'static str {
        match self {
            Self::DeviceNotLogin => "设备未登录",
            Self::RefreshTokenNeeded => "需要有效的访问令牌",
            Self::InvalidToken => "令牌无效或已过期",
        }
    }
}

impl fmt::Display for AuthDenial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// 门禁判定结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthDecision {
    Allow,
    Deny(AuthDenial),
}

impl AuthDecision {
    #[must_use]
    pub const fn is_allowed(self) -> bool {
        matches!(self, Self::Allow)
    }
}

/// 请求门禁
#[derive(Debug, Clone)]
pub struct AuthGateway {
    jwt: Arc<JwtManager>,
}

impl AuthGateway {
    #[must_use]
    pub const fn new(jwt: Arc<JwtManager>) -> Self {
        Self { jwt }
    }

    /// 判定请求是否放行
    ///
    /// 访问令牌总是先于刷新令牌校验；无效的访问令牌不会立即拒绝，
    /// 而是继续尝试刷新令牌。这里不区分令牌种类。
    #[must_use]
    pub fn authorize(&self, headers: &AuthHeaders<'_>, policy: RoutePolicy) -> AuthDecision {
        if policy.allow_without_login {
            return AuthDecision::Allow;
        }

        if headers.is_empty() {
            return AuthDecision::Deny(AuthDenial::DeviceNotLogin);
        }

        let access_valid = headers
            .access_token
            .is_some_and(|token| self.jwt.verify(token).is_some());
        if access_valid {
            return AuthDecision::Allow;
        }

        if let Some(token) = headers.refresh_token {
            return match self.jwt.verify(token) {
                Some(_) if policy.allow_refresh_token => AuthDecision::Allow,
                Some(_) => AuthDecision::Deny(AuthDenial::RefreshTokenNeeded),
                None => AuthDecision::Deny(AuthDenial::InvalidToken),
            };
        }

        AuthDecision::Deny(AuthDenial::InvalidToken)
    }
}
