//! # 配置加载与环境变量覆盖

use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::AppConfig;
use crate::error::{AppError, Result};

/// 环境变量前缀，例如 `PRESS_SERVER_PORT -> server.port`
const ENV_PREFIX: &str = "PRESS_";

/// 不带前缀、沿用既有部署习惯的环境变量
const PLAIN_ENV_KEYS: &[(&str, &str)] = &[
    ("JWT_SECRET", "jwt.secret"),
    ("JWT_ACCESS_TOKEN_EXPIRES", "jwt.access.token.expires"),
    ("JWT_REFRESH_TOKEN_EXPIRES", "jwt.refresh.token.expires"),
    ("DATABASE_URL", "database.url"),
];

/// 配置文件路径：`PRESS_CONFIG_PATH`，否则 `config/config.{RUST_ENV}.toml`
#[must_use]
pub fn resolve_config_path() -> PathBuf {
    if let Ok(path) = env::var("PRESS_CONFIG_PATH") {
        return PathBuf::from(path);
    }
    let env = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());
    PathBuf::from(format!("config/config.{env}.toml"))
}

/// 从文件和给定的环境变量构建配置
///
/// 文件不存在时使用默认值；文件存在但无法解析时报错。
pub fn load_from<I>(path: &Path, vars: I) -> Result<AppConfig>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut config = load_config_file(path)?;
    let overrides = build_env_overrides(vars);
    apply_env_overrides(&mut config, &overrides)?;
    super::validate_config(&config)?;
    Ok(config)
}

fn load_config_file(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        debug!("配置文件不存在，使用默认配置: {}", path.display());
        return Ok(AppConfig::default());
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        AppError::config_with_source(format!("读取配置文件失败: {}", path.display()), e)
    })?;

    toml::from_str(&content).map_err(|e| {
        AppError::config_with_source(format!("TOML解析失败 - 配置文件: {}", path.display()), e)
    })
}

/// 构建环境变量覆盖映射，带前缀的变量优先
fn build_env_overrides<I>(vars: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut plain = HashMap::new();
    let mut prefixed = HashMap::new();

    for (key, value) in vars {
        if let Some(config_key) = key.strip_prefix(ENV_PREFIX) {
            if config_key == "CONFIG_PATH" {
                continue;
            }
            let config_path = config_key.to_lowercase().replace('_', ".");
            prefixed.insert(config_path, value);
        } else if let Some((_, path)) = PLAIN_ENV_KEYS.iter().find(|(name, _)| *name == key) {
            plain.insert((*path).to_string(), value);
        }
    }

    plain.extend(prefixed);
    debug!("发现 {} 个环境变量覆盖", plain.len());
    plain
}

fn apply_env_overrides(config: &mut AppConfig, overrides: &HashMap<String, String>) -> Result<()> {
    for (path, value) in overrides {
        debug!(
            "应用环境变量覆盖: {} = {}",
            path,
            if path.contains("secret") || path.contains("password") {
                "***"
            } else {
                value
            }
        );
        apply_override_to_config(config, path, value)?;
    }
    Ok(())
}

fn apply_override_to_config(config: &mut AppConfig, path: &str, value: &str) -> Result<()> {
    let parts: Vec<&str> = path.split('.').collect();

    match parts.as_slice() {
        ["server", "host"] => config.server.host = value.to_string(),
        ["server", "port"] => {
            config.server.port = value.parse().map_err(|e| {
                AppError::config_with_source(format!("无效的端口号: {value}"), e)
            })?;
        }
        ["database", "url"] => config.database.url = value.to_string(),
        ["database", "max", "connections"] => {
            config.database.max_connections = value.parse().map_err(|e| {
                AppError::config_with_source(format!("无效的最大连接数: {value}"), e)
            })?;
        }
        ["database", "connect", "timeout"] => {
            config.database.connect_timeout = value.parse().map_err(|e| {
                AppError::config_with_source(format!("无效的连接超时: {value}"), e)
            })?;
        }
        ["jwt", "secret"] => config.jwt.secret = value.to_string(),
        ["jwt", "access", "token", "expires"] => {
            config.jwt.access_token_expires = value.to_string();
        }
        ["jwt", "refresh", "token", "expires"] => {
            config.jwt.refresh_token_expires = value.to_string();
        }
        ["log", "level"] => config.log.level = value.to_string(),
        ["cookbook", "password"] => config.cookbook.password = value.to_string(),
        _ => warn!("未知的配置路径，忽略环境变量覆盖: {}", path),
    }

    Ok(())
}
