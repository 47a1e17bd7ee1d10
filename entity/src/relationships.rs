//! # 内容与分类关联实体定义

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "relationships")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub cid: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub mid: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::contents::Entity",
        from = "Column::Cid",
        to = "super::contents::Column::Cid"
    )]
    Contents,
    #[sea_orm(
        belongs_to = "super::metas::Entity",
        from = "Column::Mid",
        to = "super::metas::Column::Mid"
    )]
    Metas,
}

impl Related<super::contents::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Contents.def()
    }
}

impl Related<super::metas::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Metas.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
