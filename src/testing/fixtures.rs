//! # 测试数据

use entity::user;

use crate::auth::{NewUser, PasswordVerifier, UserStore};

/// 用户测试数据构建器
#[derive(Debug, Clone)]
pub struct UserFixture {
    pub username: String,
    pub email: String,
    pub password: String,
    pub url: String,
    pub screen_name: Option<String>,
}

impl Default for UserFixture {
    fn default() -> Self {
        Self {
            username: "milkio".to_string(),
            email: "i@mol.ink".to_string(),
            password: "Pa$$w0rd!".to_string(),
            url: "https://mol.ink".to_string(),
            screen_name: Some("Milkio".to_string()),
        }
    }
}

impl UserFixture {
    #[must_use]
    pub fn new(username: &str, email: &str) -> Self {
        Self {
            username: username.to_string(),
            email: email.to_string(),
            screen_name: None,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_password(mut self, password: &str) -> Self {
        self.password = password.to_string();
        self
    }

    /// 哈希密码后写入存储
    pub async fn insert(
        &self,
        users: &dyn UserStore,
        passwords: &dyn PasswordVerifier,
    ) -> user::Model {
        let password_hash = passwords.hash(&self.password).expect("哈希测试密码失败");
        users
            .insert(NewUser {
                username: self.username.clone(),
                password_hash,
                email: self.email.clone(),
                url: self.url.clone(),
                screen_name: self
                    .screen_name
                    .clone()
                    .unwrap_or_else(|| self.username.clone()),
            })
            .await
            .expect("写入测试用户失败")
    }
}
