//! # 应用配置结构定义

use serde::{Deserialize, Serialize};

use super::duration::parse_lifetime;
use crate::error::Result;

/// 应用主配置结构
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP 服务配置
    pub server: ServerConfig,
    /// 数据库配置
    pub database: super::DatabaseConfig,
    /// JWT 配置
    pub jwt: JwtConfig,
    /// 日志配置
    pub log: LogConfig,
    /// Cookbook 配置
    pub cookbook: CookbookConfig,
}

/// HTTP 服务配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// 监听地址
    pub host: String,
    /// 监听端口
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 9000,
        }
    }
}

impl ServerConfig {
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// JWT 配置
///
/// `secret` 没有默认值，缺失时 `JwtManager::new` 失败，进程拒绝启动。
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct JwtConfig {
    /// 签名密钥
    pub secret: String,
    /// 访问令牌有效期
    pub access_token_expires: String,
    /// 刷新令牌有效期
    pub refresh_token_expires: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::new(),
            access_token_expires: "1h".to_string(),
            refresh_token_expires: "7d".to_string(),
        }
    }
}

// 密钥不进日志
impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &if self.secret.is_empty() { "" } else { "***" })
            .field("access_token_expires", &self.access_token_expires)
            .field("refresh_token_expires", &self.refresh_token_expires)
            .finish()
    }
}

impl JwtConfig {
    /// 访问令牌有效期
    pub fn access_ttl(&self) -> Result<chrono::Duration> {
        parse_lifetime(&self.access_token_expires)
    }

    /// 刷新令牌有效期
    pub fn refresh_ttl(&self) -> Result<chrono::Duration> {
        parse_lifetime(&self.refresh_token_expires)
    }
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Cookbook 配置
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CookbookConfig {
    /// 访问口令
    pub password: String,
}

impl Default for CookbookConfig {
    fn default() -> Self {
        Self {
            password: "Pa$$w0rd!".to_string(),
        }
    }
}

impl std::fmt::Debug for CookbookConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CookbookConfig")
            .field("password", &"***")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.bind_address(), "0.0.0.0:9000");
        assert_eq!(config.jwt.access_ttl().unwrap(), chrono::Duration::hours(1));
        assert_eq!(config.jwt.refresh_ttl().unwrap(), chrono::Duration::days(7));
        assert!(config.jwt.secret.is_empty());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [server]
            port = 8080

            [jwt]
            secret = "s3cret"
            "#,
        )
        .unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.jwt.secret, "s3cret");
        assert_eq!(config.jwt.refresh_token_expires, "7d");
        assert_eq!(config.database.max_connections, 10);
    }

    #[test]
    fn test_debug_masks_secret() {
        let jwt = JwtConfig {
            secret: "top-secret".to_string(),
            ..JwtConfig::default()
        };
        let rendered = format!("{jwt:?}");
        assert!(!rendered.contains("top-secret"));
        assert!(rendered.contains("***"));
    }
}
