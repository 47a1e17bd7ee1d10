//! # 分类与标签实体定义

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "metas")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub mid: i32,
    pub name: Option<String>,
    pub slug: Option<String>,
    /// category / tag
    #[sea_orm(column_name = "type")]
    pub kind: Option<String>,
    pub description: Option<String>,
    pub count: Option<i32>,
    pub order: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::relationships::Entity")]
    Relationships,
}

impl Related<super::relationships::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Relationships.def()
    }
}

impl Related<super::contents::Entity> for Entity {
    fn to() -> RelationDef {
        super::relationships::Relation::Contents.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::relationships::Relation::Metas.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
