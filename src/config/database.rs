//! # 数据库配置

use crate::error::{AppError, Result};
use crate::{linfo, logging::{LogComponent, LogStage}};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 数据库配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// 数据库URL
    pub url: String,
    /// 最大连接数
    pub max_connections: u32,
    /// 连接超时时间（秒）
    pub connect_timeout: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://./data/press.db".to_string(),
            max_connections: 10,
            connect_timeout: 30,
        }
    }
}

impl DatabaseConfig {
    /// 确保数据库路径存在（仅对SQLite文件数据库）
    pub fn ensure_database_path(&self) -> Result<()> {
        let Some(path) = self.sqlite_file_path() else {
            return Ok(());
        };
        let db_path = Path::new(path);

        let parent = db_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty() && !p.exists());
        if let Some(parent) = parent {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_with_source(
                    format!("无法创建数据库目录: {}", parent.display()),
                    e,
                )
            })?;

            linfo!(
                "system",
                LogStage::Startup,
                LogComponent::Database,
                "create_db_dir",
                format!("创建数据库目录: {}", parent.display())
            );
        }

        if !db_path.exists() {
            linfo!(
                "system",
                LogStage::Startup,
                LogComponent::Database,
                "create_db_file_info",
                format!("数据库文件将在首次连接时创建: {}", db_path.display())
            );
        }

        Ok(())
    }

    /// 获取准备好的数据库连接字符串
    ///
    /// SQLite 文件库追加 `mode=rwc`，文件不存在时自动创建。
    pub fn get_connection_url(&self) -> Result<String> {
        self.ensure_database_path()?;
        if self.sqlite_file_path().is_some() && !self.url.contains("mode=") {
            let separator = if self.url.contains('?') { '&' } else { '?' };
            return Ok(format!("{}{separator}mode=rwc", self.url));
        }
        Ok(self.url.clone())
    }

    /// 检查是否为内存数据库
    #[must_use]
    pub fn is_memory_database(&self) -> bool {
        self.url.contains(":memory:")
    }

    /// 检查是否为SQLite数据库
    #[must_use]
    pub fn is_sqlite(&self) -> bool {
        self.url.starts_with("sqlite:")
    }

    fn sqlite_file_path(&self) -> Option<&str> {
        if !self.is_sqlite() || self.is_memory_database() {
            return None;
        }
        let rest = self
            .url
            .strip_prefix("sqlite://")
            .or_else(|| self.url.strip_prefix("sqlite:"))?;
        let path = rest.split('?').next().unwrap_or(rest);
        (!path.is_empty()).then_some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqlite_url_gets_create_mode() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("nested").join("press.db");
        let config = DatabaseConfig {
            url: format!("sqlite://{}", file.display()),
            ..DatabaseConfig::default()
        };

        let url = config.get_connection_url().unwrap();
        assert!(url.ends_with("?mode=rwc"));
        assert!(file.parent().unwrap().exists());
    }

    #[test]
    fn test_memory_database_untouched() {
        let config = DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            ..DatabaseConfig::default()
        };
        assert!(config.is_memory_database());
        assert_eq!(config.get_connection_url().unwrap(), "sqlite::memory:");
    }

    #[test]
    fn test_existing_mode_is_kept() {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}/a.db?mode=ro", dir.path().display());
        let config = DatabaseConfig {
            url: url.clone(),
            ..DatabaseConfig::default()
        };
        assert_eq!(config.get_connection_url().unwrap(), url);
    }
}
