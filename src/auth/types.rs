//! # 认证模块类型定义

use serde::{Deserialize, Serialize};

/// JWT 载荷
///
/// 线上字段名保持为 `uid` / `refresh`，与已签发的令牌兼容。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtClaims {
    /// 用户ID
    pub uid: i32,
    /// 刷新令牌标记，只在刷新令牌上出现且为 true
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh: Option<bool>,
    /// 签发时间
    pub iat: i64,
    /// 过期时间
    pub exp: i64,
}

impl JwtClaims {
    #[must_use]
    pub fn new(uid: i32, kind: TokenKind, issued_at: i64, lifetime_seconds: i64) -> Self {
        Self {
            uid,
            refresh: kind.is_refresh().then_some(true),
            iat: issued_at,
            exp: issued_at.saturating_add(lifetime_seconds),
        }
    }

    #[must_use]
    pub fn kind(&self) -> TokenKind {
        if self.refresh == Some(true) {
            TokenKind::Refresh
        } else {
            TokenKind::Access
        }
    }
}

/// 令牌种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

impl TokenKind {
    #[must_use]
    pub const fn is_refresh(self) -> bool {
        matches!(self, Self::Refresh)
    }
}

/// 校验通过后的令牌内容
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenPayload {
    pub subject: i32,
    pub kind: TokenKind,
    pub issued_at: i64,
    pub expires_at: i64,
}

impl From<JwtClaims> for TokenPayload {
    fn from(claims: JwtClaims) -> Self {
        Self {
            subject: claims.uid,
            kind: claims.kind(),
            issued_at: claims.iat,
            expires_at: claims.exp,
        }
    }
}

/// 令牌对
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// 登录请求，`username` 与 `email` 二选一
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    pub password: String,
}
