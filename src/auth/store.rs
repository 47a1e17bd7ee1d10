//! # 用户存储
//!
//! 登录、刷新和资料查询依赖的用户查找能力

use async_trait::async_trait;
use chrono::Utc;
use entity::user;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};

use crate::error::Result;

/// 待插入的用户
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub email: String,
    pub url: String,
    pub screen_name: String,
}

/// 用户查找与写入
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_uid(&self, uid: i32) -> Result<Option<user::Model>>;

    async fn find_by_username(&self, username: &str) -> Result<Option<user::Model>>;

    async fn find_by_email(&self, email: &str) -> Result<Option<user::Model>>;

    /// 记录最近登录时间
    async fn touch_logged(&self, uid: i32) -> Result<()>;

    async fn insert(&self, new_user: NewUser) -> Result<user::Model>;
}

/// 基于 Sea-ORM 的实现
#[derive(Debug, Clone)]
pub struct SeaOrmUserStore {
    db: DatabaseConnection,
}

impl SeaOrmUserStore {
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserStore for SeaOrmUserStore {
    async fn find_by_uid(&self, uid: i32) -> Result<Option<user::Model>> {
        Ok(user::Entity::find_by_id(uid).one(&self.db).await?)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<user::Model>> {
        Ok(user::Entity::find()
            .filter(user::Column::Username.eq(username))
            .one(&self.db)
            .await?)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<user::Model>> {
        Ok(user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await?)
    }

    async fn touch_logged(&self, uid: i32) -> Result<()> {
        user::Entity::update_many()
            .col_expr(
                user::Column::Logged,
                sea_orm::sea_query::Expr::value(Utc::now().naive_utc()),
            )
            .filter(user::Column::Uid.eq(uid))
            .exec(&self.db)
            .await?;
        Ok(())
    }

    async fn insert(&self, new_user: NewUser) -> Result<user::Model> {
        let model = user::ActiveModel {
            username: Set(new_user.username),
            password: Set(Some(new_user.password_hash)),
            email: Set(new_user.email),
            url: Set(Some(new_user.url)),
            screen_name: Set(Some(new_user.screen_name)),
            created: Set(Some(Utc::now().naive_utc())),
            ..Default::default()
        };
        Ok(model.insert(&self.db).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::create_temp_db;

    fn new_user(username: &str, email: &str) -> NewUser {
        NewUser {
            username: username.to_string(),
            password_hash: "$2b$04$not-a-real-hash".to_string(),
            email: email.to_string(),
            url: String::new(),
            screen_name: username.to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let (db, _dir) = create_temp_db().await;
        let store = SeaOrmUserStore::new(db);

        let created = store.insert(new_user("milkio", "i@mol.ink")).await.unwrap();
        assert!(created.uid > 0);
        assert!(created.logged.is_none());

        let by_uid = store.find_by_uid(created.uid).await.unwrap().unwrap();
        assert_eq!(by_uid.username, "milkio");
        let by_name = store.find_by_username("milkio").await.unwrap().unwrap();
        assert_eq!(by_name.uid, created.uid);
        let by_mail = store.find_by_email("i@mol.ink").await.unwrap().unwrap();
        assert_eq!(by_mail.uid, created.uid);

        assert!(store.find_by_username("nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_touch_logged() {
        let (db, _dir) = create_temp_db().await;
        let store = SeaOrmUserStore::new(db);
        let created = store.insert(new_user("alice", "alice@example.com")).await.unwrap();

        store.touch_logged(created.uid).await.unwrap();

        let reloaded = store.find_by_uid(created.uid).await.unwrap().unwrap();
        assert!(reloaded.logged.is_some());
    }

    #[tokio::test]
    async fn test_duplicate_username_violates_constraint() {
        let (db, _dir) = create_temp_db().await;
        let store = SeaOrmUserStore::new(db);
        store.insert(new_user("bob", "bob@example.com")).await.unwrap();

        let err = store
            .insert(new_user("bob", "other@example.com"))
            .await
            .unwrap_err();
        assert!(err.is_server_error());
    }
}
