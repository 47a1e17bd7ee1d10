//! # 错误类型定义

use axum::http::StatusCode;
use thiserror::Error;

use crate::auth::gateway::AuthDenial;

/// 应用主要错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 配置相关错误（启动期致命）
    #[error("配置错误: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// 数据库相关错误
    #[error("数据库错误: {message}")]
    Database {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// 请求门禁拒绝
    #[error("认证错误: {denial}")]
    Auth {
        denial: AuthDenial,
        message: Option<String>,
    },

    /// 业务逻辑错误
    #[error("业务错误: {message}")]
    Business { message: String },

    /// 资源不存在
    #[error("资源不存在: {resource}")]
    NotFound { resource: String },

    /// 参数校验错误
    #[error("参数校验失败: {field}: {message}")]
    Validation { field: String, message: String },

    /// 系统内部错误
    #[error("内部错误: {message}")]
    Internal {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// IO相关错误
    #[error("IO错误: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// 序列化/反序列化错误
    #[error("序列化错误: {message}")]
    Serialization {
        message: String,
        #[source]
        source: anyhow::Error,
    },

    /// 服务器启动错误
    #[error("服务器启动错误: {message}")]
    ServerStart {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },
}

impl AppError {
    /// 将错误转换为HTTP状态码和错误代码
    #[must_use]
    pub const fn to_http_response_parts(&self) -> (StatusCode, &'static str) {
        match self {
            Self::Config { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "CONFIG_ERROR"),
            Self::Database { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "DATABASE_ERROR"),
            Self::Auth { denial, .. } => (StatusCode::UNAUTHORIZED, denial.code()),
            Self::Business { .. } => (StatusCode::BAD_REQUEST, "BUSINESS_FAIL"),
            Self::NotFound { .. } => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            Self::Validation { .. } => (StatusCode::BAD_REQUEST, "TYPE_SAFE_ERROR"),
            Self::Internal { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
            Self::Io { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "IO_ERROR"),
            Self::Serialization { .. } => (StatusCode::BAD_REQUEST, "SERIALIZATION_ERROR"),
            Self::ServerStart { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "SERVER_START_ERROR"),
        }
    }

    /// 对外暴露的错误信息
    ///
    /// 服务端内部错误只返回笼统描述，细节只进日志。
    #[must_use]
    pub fn public_message(&self) -> String {
        match self {
            Self::Auth { denial, message } => message
                .clone()
                .unwrap_or_else(|| denial.default_message().to_string()),
            Self::Business { message } => message.clone(),
            Self::NotFound { resource } => format!("{resource}不存在"),
            Self::Validation { field, message } => format!("{field}: {message}"),
            Self::Serialization { message, .. } => message.clone(),
            Self::Config { .. }
            | Self::Database { .. }
            | Self::Internal { .. }
            | Self::Io { .. }
            | Self::ServerStart { .. } => "服务器内部错误".to_string(),
        }
    }

    /// 是否为服务端错误（5xx）
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        self.to_http_response_parts().0.is_server_error()
    }

    /// 创建配置错误
    pub fn config<T: Into<String>>(message: T) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// 创建带来源的配置错误
    pub fn config_with_source<T: Into<String>, E: Into<anyhow::Error>>(
        message: T,
        source: E,
    ) -> Self {
        Self::Config {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// 创建数据库错误
    pub fn database<T: Into<String>>(message: T) -> Self {
        Self::Database {
            message: message.into(),
            source: None,
        }
    }

    /// 创建带来源的数据库错误
    pub fn database_with_source<T: Into<String>, E: Into<anyhow::Error>>(
        message: T,
        source: E,
    ) -> Self {
        Self::Database {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// 创建门禁拒绝错误
    #[must_use]
    pub const fn auth(denial: AuthDenial) -> Self {
        Self::Auth {
            denial,
            message: None,
        }
    }

    /// 创建带自定义说明的门禁拒绝错误
    pub fn auth_with_message<T: Into<String>>(denial: AuthDenial, message: T) -> Self {
        Self::Auth {
            denial,
            message: Some(message.into()),
        }
    }

    /// 创建业务错误
    pub fn business<T: Into<String>>(message: T) -> Self {
        Self::Business {
            message: message.into(),
        }
    }

    /// 创建资源不存在错误
    pub fn not_found<T: Into<String>>(resource: T) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// 创建参数校验错误
    pub fn validation<F: Into<String>, T: Into<String>>(field: F, message: T) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// 创建内部错误
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal {
            message: message.into(),
            source: None,
        }
    }

    /// 创建带来源的内部错误
    pub fn internal_with_source<T: Into<String>, E: Into<anyhow::Error>>(
        message: T,
        source: E,
    ) -> Self {
        Self::Internal {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// 创建带来源的服务器启动错误
    pub fn server_start_with_source<T: Into<String>, E: Into<anyhow::Error>>(
        message: T,
        source: E,
    ) -> Self {
        Self::ServerStart {
            message: message.into(),
            source: Some(source.into()),
        }
    }
}

// 自动转换常见错误类型
impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: "文件操作失败".to_string(),
            source: err,
        }
    }
}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        Self::config_with_source("TOML解析失败", err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            message: "JSON处理失败".to_string(),
            source: err.into(),
        }
    }
}

impl From<sea_orm::error::DbErr> for AppError {
    fn from(err: sea_orm::error::DbErr) -> Self {
        Self::database_with_source("数据库操作失败", err)
    }
}

// Bcrypt错误转换
impl From<bcrypt::BcryptError> for AppError {
    fn from(err: bcrypt::BcryptError) -> Self {
        Self::internal_with_source("密码处理失败", err)
    }
}

// JWT错误转换（仅签发路径；校验失败走 VerifyError）
impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        Self::internal_with_source("JWT签发失败", err)
    }
}
