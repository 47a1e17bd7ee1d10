//! # 内容实体定义
//!
//! 文章与页面

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "contents")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub cid: i32,
    pub title: Option<String>,
    pub slug: Option<String>,
    pub created: Option<DateTime>,
    pub modified: Option<DateTime>,
    #[sea_orm(column_type = "Text", nullable)]
    pub text: Option<String>,
    pub order: Option<i32>,
    pub author_id: Option<i32>,
    pub template: Option<String>,
    /// 内容类型，如 post / page
    #[sea_orm(column_name = "type")]
    pub kind: Option<String>,
    pub status: Option<String>,
    pub password: Option<String>,
    pub comments_num: Option<i32>,
    pub allow_comment: Option<String>,
    pub allow_ping: Option<String>,
    pub allow_feed: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::comments::Entity")]
    Comments,
    #[sea_orm(has_many = "super::relationships::Entity")]
    Relationships,
}

impl Related<super::comments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comments.def()
    }
}

impl Related<super::relationships::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Relationships.def()
    }
}

// 内容 <-> 分类/标签，经由 relationships
impl Related<super::metas::Entity> for Entity {
    fn to() -> RelationDef {
        super::relationships::Relation::Metas.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::relationships::Relation::Contents.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
