//! 应用上下文（DI 容器）
//!
//! 统一持有跨模块共享的服务实例，便于在测试中注入替身实现。

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::api::routes::RouteTable;
use crate::auth::{
    AuthGateway, AuthService, BcryptPasswordVerifier, JwtManager, PasswordVerifier,
    SeaOrmUserStore, UserStore,
};
use crate::config::AppConfig;
use crate::database;
use crate::error::{AppError, Result};

#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<AppConfig>,
    pub db: DatabaseConnection,
    pub jwt: Arc<JwtManager>,
    pub gateway: AuthGateway,
    pub users: Arc<dyn UserStore>,
    pub passwords: Arc<dyn PasswordVerifier>,
    pub auth: Arc<AuthService>,
    pub routes: Arc<RouteTable>,
}

impl AppContext {
    /// 启动装配：先校验 JWT 配置，再连接数据库并执行迁移
    ///
    /// 密钥缺失时直接失败，不会创建或修改数据库。
    pub async fn bootstrap(config: AppConfig) -> Result<Self> {
        let jwt = Arc::new(JwtManager::new(&config.jwt)?);

        let db = database::init_database(&config.database)
            .await
            .map_err(|e| AppError::database_with_source("数据库连接失败", e))?;
        database::run_migrations(&db)
            .await
            .map_err(|e| AppError::database_with_source("数据库迁移失败", e))?;
        database::check_database_status(&db).await?;

        let users: Arc<dyn UserStore> = Arc::new(SeaOrmUserStore::new(db.clone()));
        let passwords: Arc<dyn PasswordVerifier> = Arc::new(BcryptPasswordVerifier::default());
        Ok(Self::assemble(config, db, jwt, users, passwords))
    }

    /// 注入自定义的用户存储与密码校验；JWT 密钥缺失时失败
    pub fn with_collaborators(
        config: AppConfig,
        db: DatabaseConnection,
        users: Arc<dyn UserStore>,
        passwords: Arc<dyn PasswordVerifier>,
    ) -> Result<Self> {
        let jwt = Arc::new(JwtManager::new(&config.jwt)?);
        Ok(Self::assemble(config, db, jwt, users, passwords))
    }

    fn assemble(
        config: AppConfig,
        db: DatabaseConnection,
        jwt: Arc<JwtManager>,
        users: Arc<dyn UserStore>,
        passwords: Arc<dyn PasswordVerifier>,
    ) -> Self {
        let auth = Arc::new(AuthService::new(
            jwt.clone(),
            users.clone(),
            passwords.clone(),
        ));

        Self {
            config: Arc::new(config),
            db,
            gateway: AuthGateway::new(jwt.clone()),
            jwt,
            users,
            passwords,
            auth,
            routes: Arc::new(crate::api::routes::route_table()),
        }
    }
}
