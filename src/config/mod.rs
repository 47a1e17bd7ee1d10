//! # 配置管理模块
//!
//! 处理应用配置加载、验证和管理

mod app_config;
mod database;
pub mod duration;
mod manager;

pub use app_config::{AppConfig, CookbookConfig, JwtConfig, LogConfig, ServerConfig};
pub use database::DatabaseConfig;
pub use duration::parse_lifetime;
pub use manager::{load_from, resolve_config_path};

use crate::error::{AppError, Result};

/// 加载配置：配置文件 + 环境变量覆盖
pub fn load_config() -> Result<AppConfig> {
    load_from(&resolve_config_path(), std::env::vars())
}

/// 验证配置有效性
///
/// JWT 密钥是否存在由 `JwtManager::new` 检查。
pub fn validate_config(config: &AppConfig) -> Result<()> {
    if config.server.port == 0 {
        return Err(AppError::config(format!(
            "无效的服务器端口: {}",
            config.server.port
        )));
    }

    if config.database.url.is_empty() {
        return Err(AppError::config("数据库URL不能为空"));
    }

    if config.database.max_connections == 0 {
        return Err(AppError::config("数据库最大连接数必须大于0"));
    }

    config.jwt.access_ttl()?;
    config.jwt.refresh_ttl()?;

    Ok(())
}
