//! # Entity 模块
//!
//! 包含所有 Sea-ORM 实体定义

pub mod comments;
pub mod contents;
pub mod metas;
pub mod options;
pub mod relationships;
pub mod user;

pub use comments::Entity as Comments;
pub use contents::Entity as Contents;
pub use metas::Entity as Metas;
pub use options::Entity as Options;
pub use relationships::Entity as Relationships;
pub use user::Entity as User;

#[cfg(test)]
mod tests;
