//! # 用户服务
//!
//! 资料查询与注册

use std::sync::LazyLock;

use chrono::NaiveDateTime;
use entity::user;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::api::server::AppState;
use crate::auth::{AuthDenial, NewUser};
use crate::error::{AppError, Result};
use crate::logging::{LogComponent, LogStage};
use crate::{ensure_business, linfo};

static EMAIL_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?)+$").ok()
});

/// 对外公开的用户资料
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub username: String,
    pub screen_name: Option<String>,
    pub email: String,
    pub url: Option<String>,
    pub logged: Option<NaiveDateTime>,
    pub activated: Option<NaiveDateTime>,
}

impl From<user::Model> for UserProfile {
    fn from(model: user::Model) -> Self {
        Self {
            username: model.username,
            screen_name: model.screen_name,
            email: model.email,
            url: model.url,
            logged: model.logged,
            activated: model.activated,
        }
    }
}

/// 注册请求
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub username: String,
    pub password: String,
    pub email: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub screen_name: Option<String>,
}

impl CreateUserRequest {
    /// 字段长度按字符计
    pub fn validate(&self) -> Result<()> {
        check_length("username", &self.username, 3, 32)?;
        check_length("password", &self.password, 5, 64)?;
        check_length("email", &self.email, 0, 200)?;
        if !is_email(&self.email) {
            return Err(AppError::validation("email", "邮箱格式不正确"));
        }
        if let Some(url) = self.url.as_deref() {
            check_length("url", url, 0, 200)?;
            if !is_http_url(url) {
                return Err(AppError::validation("url", "链接格式不正确"));
            }
        }
        if let Some(screen_name) = self.screen_name.as_deref() {
            check_length("screenName", screen_name, 0, 32)?;
        }
        Ok(())
    }
}

fn check_length(field: &str, value: &str, min: usize, max: usize) -> Result<()> {
    let len = value.chars().count();
    if len < min || len > max {
        return Err(AppError::validation(
            field,
            format!("长度必须在 {min} 到 {max} 之间"),
        ));
    }
    Ok(())
}

fn is_email(value: &str) -> bool {
    EMAIL_PATTERN
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(value))
}

fn is_http_url(value: &str) -> bool {
    url::Url::parse(value)
        .is_ok_and(|url| matches!(url.scheme(), "http" | "https") && url.host().is_some())
}

pub struct UsersService<'a> {
    state: &'a AppState,
}

impl<'a> UsersService<'a> {
    #[must_use]
    pub const fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// 查询用户资料
    ///
    /// 优先按 `uid` 查；未指定时取访问令牌中的用户，令牌无效返回 `INVALID_TOKEN`。
    pub async fn query(
        &self,
        request_id: &str,
        uid: Option<i32>,
        access_token: Option<&str>,
    ) -> Result<UserProfile> {
        let uid = match (uid, access_token) {
            (Some(uid), _) => uid,
            (None, Some(token)) => {
                self.state
                    .jwt
                    .verify(token)
                    .ok_or_else(|| AppError::auth(AuthDenial::InvalidToken))?
                    .subject
            }
            (None, None) => return Err(AppError::not_found("用户")),
        };

        let user = self
            .state
            .users
            .find_by_uid(uid)
            .await?
            .ok_or_else(|| AppError::not_found("用户"))?;

        linfo!(
            request_id,
            LogStage::BusinessLogic,
            LogComponent::User,
            "query_user",
            format!("profile uid={uid}")
        );
        Ok(user.into())
    }

    /// 注册新用户：先查用户名，再查邮箱
    pub async fn create(&self, request_id: &str, request: CreateUserRequest) -> Result<user::Model> {
        request.validate()?;

        let users = &self.state.users;
        ensure_business!(
            users.find_by_username(&request.username).await?.is_none(),
            "用户名已存在"
        );
        ensure_business!(
            users.find_by_email(&request.email).await?.is_none(),
            "邮箱已存在"
        );

        let password_hash = self.state.passwords.hash(&request.password)?;
        let screen_name = request
            .screen_name
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| request.username.clone());

        let created = users
            .insert(NewUser {
                username: request.username,
                password_hash,
                email: request.email,
                url: request.url.unwrap_or_default(),
                screen_name,
            })
            .await?;

        linfo!(
            request_id,
            LogStage::Db,
            LogComponent::User,
            "create_user",
            format!("created uid={}", created.uid)
        );
        Ok(created)
    }
}
