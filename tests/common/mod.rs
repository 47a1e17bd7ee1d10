//! 集成测试公共设施

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use sea_orm::Database;
use sea_orm_migration::MigratorTrait;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use press_api::api::{ApiServer, AppState};
use press_api::app::AppContext;
use press_api::auth::{BcryptPasswordVerifier, NewUser, PasswordVerifier, SeaOrmUserStore, UserStore};
use press_api::config::AppConfig;

pub const TEST_SECRET: &str = "press-api-integration-secret";
pub const TEST_PASSWORD: &str = "Pa$$w0rd!";

/// 一个完整装配好的应用，持有临时数据库目录
pub struct TestApp {
    pub router: Router,
    pub context: Arc<AppContext>,
    _dir: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let db_url = format!("sqlite:{}?mode=rwc", dir.path().join("it.db").display());
        let db = Database::connect(&db_url).await.unwrap();
        migration::Migrator::up(&db, None).await.unwrap();

        let mut config = AppConfig::default();
        config.database.url = db_url;
        config.jwt.secret = TEST_SECRET.to_string();

        let users: Arc<dyn UserStore> = Arc::new(SeaOrmUserStore::new(db.clone()));
        let passwords: Arc<dyn PasswordVerifier> = Arc::new(BcryptPasswordVerifier::new(4));
        let context = Arc::new(
            AppContext::with_collaborators(config.clone(), db, users, passwords).unwrap(),
        );
        let router = ApiServer::new(config.server, context.clone()).router();

        Self {
            router,
            context,
            _dir: dir,
        }
    }

    pub fn state(&self) -> AppState {
        AppState::new(self.context.clone())
    }

    /// 直接写库创建用户，返回 uid
    pub async fn seed_user(&self, username: &str, email: &str) -> i32 {
        let hash = self.context.passwords.hash(TEST_PASSWORD).unwrap();
        self.context
            .users
            .insert(NewUser {
                username: username.to_string(),
                password_hash: hash,
                email: email.to_string(),
                url: String::new(),
                screen_name: username.to_string(),
            })
            .await
            .unwrap()
            .uid
    }

    pub fn access_token(&self, uid: i32) -> String {
        self.context.jwt.mint_access(uid).unwrap()
    }

    pub fn refresh_token(&self, uid: i32) -> String {
        self.context.jwt.mint_refresh(uid).unwrap()
    }

    /// 发送 POST 请求，返回状态码和 JSON 响应体
    pub async fn post(
        &self,
        path: &str,
        headers: &[(&str, &str)],
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder()
            .method("POST")
            .uri(path)
            .header("content-type", "application/json");
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        let body = body.map_or_else(Body::empty, |b| Body::from(b.to_string()));
        self.send(builder.body(body).unwrap()).await
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }
}

/// 取出错误响应中的错误码
pub fn error_code(body: &Value) -> &str {
    body["error"]["code"].as_str().unwrap_or_default()
}
