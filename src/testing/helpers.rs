//! # 测试辅助函数
//!
//! 提供通用的测试工具和辅助函数

use sea_orm::{Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use std::sync::Once;
use tempfile::TempDir;

use crate::auth::JwtManager;
use crate::config::{AppConfig, JwtConfig};

static INIT: Once = Once::new();

/// 测试用 JWT 密钥
pub const TEST_JWT_SECRET: &str = "press-api-test-secret";

/// 初始化测试环境（日志输出到测试捕获）
pub fn init_test_env() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(crate::logging::default_filter("debug"))
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// 创建临时数据库文件并执行迁移
///
/// 返回的 `TempDir` 被丢弃时数据库文件随之删除。
pub async fn create_temp_db() -> (DatabaseConnection, TempDir) {
    init_test_env();
    let temp_dir = tempfile::tempdir().expect("创建临时目录失败");
    let db_path = temp_dir.path().join("test.db");
    let db_url = format!("sqlite:{}?mode=rwc", db_path.display());

    let db = Database::connect(&db_url).await.expect("连接测试数据库失败");
    migration::Migrator::up(&db, None)
        .await
        .expect("执行测试迁移失败");

    (db, temp_dir)
}

/// 测试用 JWT 配置
#[must_use]
pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: TEST_JWT_SECRET.to_string(),
        ..JwtConfig::default()
    }
}

#[must_use]
pub fn test_jwt_manager() -> JwtManager {
    JwtManager::new(&test_jwt_config()).expect("测试 JWT 配置无效")
}

/// 指向给定数据库的测试配置
#[must_use]
pub fn test_config(database_url: &str) -> AppConfig {
    let mut config = AppConfig::default();
    config.database.url = database_url.to_string();
    config.database.max_connections = 1;
    config.jwt = test_jwt_config();
    config
}
