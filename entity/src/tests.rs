//! # 实体定义测试

use crate::{comments, contents, options, relationships, user};
use sea_orm::{ActiveValue, EntityName, Iden, PrimaryKeyToColumn, Set};

#[test]
fn test_user_active_model() {
    let model = user::ActiveModel {
        username: Set("milkio".to_string()),
        email: Set("i@mol.ink".to_string()),
        password: Set(Some("$2b$10$hash".to_string())),
        ..Default::default()
    };

    assert_eq!(model.username.as_ref(), "milkio");
    assert!(matches!(model.uid, ActiveValue::NotSet));
}

#[test]
fn test_table_names() {
    assert_eq!(user::Entity.table_name(), "user");
    assert_eq!(contents::Entity.table_name(), "contents");
    assert_eq!(comments::Entity.table_name(), "comments");
    assert_eq!(options::Entity.table_name(), "options");
    assert_eq!(relationships::Entity.table_name(), "relationships");
}

#[test]
fn test_reserved_word_columns() {
    assert_eq!(contents::Column::Kind.to_string(), "type");
    assert_eq!(contents::Column::Order.to_string(), "order");
    assert_eq!(user::Column::ScreenName.to_string(), "screen_name");
}

#[test]
fn test_composite_primary_keys() {
    assert_eq!(
        options::PrimaryKey::Name.into_column().to_string(),
        "name"
    );
    assert_eq!(
        relationships::PrimaryKey::Mid.into_column().to_string(),
        "mid"
    );
}

#[test]
fn test_user_serialization_hides_secrets() {
    let model = user::Model {
        uid: 1,
        username: "milkio".to_string(),
        password: Some("$2b$10$hash".to_string()),
        email: "i@mol.ink".to_string(),
        url: None,
        screen_name: Some("Milkio".to_string()),
        created: None,
        activated: None,
        logged: None,
        group: None,
        auth_code: Some("code".to_string()),
    };

    let json = serde_json::to_value(&model).unwrap();
    assert!(json.get("password").is_none());
    assert!(json.get("auth_code").is_none());
    assert_eq!(json["screen_name"], "Milkio");
}
