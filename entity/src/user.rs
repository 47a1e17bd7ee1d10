//! # 用户实体定义
//!
//! 用户基础信息表的 Sea-ORM 实体模型

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 用户实体
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub uid: i32,
    #[sea_orm(unique)]
    pub username: String,
    /// bcrypt 哈希
    #[serde(skip_serializing)]
    pub password: Option<String>,
    #[sea_orm(unique)]
    pub email: String,
    pub url: Option<String>,
    pub screen_name: Option<String>,
    pub created: Option<DateTime>,
    pub activated: Option<DateTime>,
    pub logged: Option<DateTime>,
    pub group: Option<String>,
    #[serde(skip_serializing)]
    pub auth_code: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
