//! Authentication service
//!
//! Password login and refresh-token exchange

use std::sync::Arc;

use crate::auth::gateway::AuthDenial;
use crate::auth::jwt::JwtManager;
use crate::auth::password::PasswordVerifier;
use crate::auth::store::UserStore;
use crate::auth::types::{LoginRequest, TokenKind, TokenPair};
use crate::error::{AppError, Result};
use crate::logging::{LogComponent, LogStage};
use crate::{linfo, lwarn};

const INVALID_CREDENTIALS: &str = "用户名或密码错误";
const MISSING_REFRESH_TOKEN: &str = "缺少刷新令牌";

/// Authentication service
pub struct AuthService {
    jwt: Arc<JwtManager>,
    users: Arc<dyn UserStore>,
    passwords: Arc<dyn PasswordVerifier>,
}

impl AuthService {
    #[must_use]
    pub fn new(
        jwt: Arc<JwtManager>,
        users: Arc<dyn UserStore>,
        passwords: Arc<dyn PasswordVerifier>,
    ) -> Self {
        Self {
            jwt,
            users,
            passwords,
        }
    }

    /// 用户名或邮箱 + 密码登录
    ///
    /// 用户不存在、没有密码、密码不匹配都返回同一个业务错误。
    pub async fn login(&self, request_id: &str, request: &LoginRequest) -> Result<TokenPair> {
        let username = request.username.as_deref().filter(|s| !s.is_empty());
        let email = request.email.as_deref().filter(|s| !s.is_empty());

        let user = match (username, email) {
            (Some(username), _) => self.users.find_by_username(username).await?,
            (None, Some(email)) => self.users.find_by_email(email).await?,
            (None, None) => return Err(AppError::business(INVALID_CREDENTIALS)),
        };

        let Some(user) = user else {
            lwarn!(
                request_id,
                LogStage::Authentication,
                LogComponent::Auth,
                "login_failed",
                "user not found"
            );
            return Err(AppError::business(INVALID_CREDENTIALS));
        };

        let matched = user
            .password
            .as_deref()
            .is_some_and(|hash| self.passwords.verify(&request.password, hash));
        if !matched {
            lwarn!(
                request_id,
                LogStage::Authentication,
                LogComponent::Auth,
                "login_failed",
                format!("password mismatch for uid={}", user.uid)
            );
            return Err(AppError::business(INVALID_CREDENTIALS));
        }

        let pair = self.jwt.mint_pair(user.uid)?;
        self.users.touch_logged(user.uid).await?;

        linfo!(
            request_id,
            LogStage::Authentication,
            LogComponent::Auth,
            "login_success",
            format!("uid={} logged in", user.uid)
        );
        Ok(pair)
    }

    /// 用刷新令牌换取新的令牌对
    ///
    /// 旧的刷新令牌不会失效，直到自然过期。
    pub fn refresh(&self, request_id: &str, refresh_token: Option<&str>) -> Result<TokenPair> {
        let token = refresh_token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| {
                AppError::auth_with_message(AuthDenial::RefreshTokenNeeded, MISSING_REFRESH_TOKEN)
            })?;

        let payload = self
            .jwt
            .verify(token)
            .filter(|payload| payload.kind == TokenKind::Refresh)
            .ok_or_else(|| AppError::auth(AuthDenial::InvalidToken))?;

        linfo!(
            request_id,
            LogStage::Authentication,
            LogComponent::Auth,
            "refresh_token",
            format!("uid={} refreshed tokens", payload.subject)
        );
        self.jwt.mint_pair(payload.subject)
    }
}
