//! # 错误处理测试

use crate::auth::gateway::AuthDenial;
use crate::error::AppError;
use axum::http::StatusCode;
use std::error::Error;

#[test]
fn test_config_error_creation() {
    let err = AppError::config("缺少 JWT 密钥");
    assert!(matches!(err, AppError::Config { .. }));
    assert_eq!(err.to_string(), "配置错误: 缺少 JWT 密钥");
}

#[test]
fn test_config_error_with_source() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "文件不存在");
    let err = AppError::config_with_source("配置文件加载失败", io_err);

    assert!(err.to_string().contains("配置错误: 配置文件加载失败"));
    assert!(err.source().is_some());
}

#[test]
fn test_auth_error_maps_denial_code() {
    let err = AppError::auth(AuthDenial::RefreshTokenNeeded);
    let (status, code) = err.to_http_response_parts();

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(code, "REFRESH_TOKEN_NEEDED");
    assert_eq!(err.public_message(), AuthDenial::RefreshTokenNeeded.default_message());
}

#[test]
fn test_auth_error_with_custom_message() {
    let err = AppError::auth_with_message(AuthDenial::RefreshTokenNeeded, "缺少刷新令牌");

    assert_eq!(err.to_http_response_parts().1, "REFRESH_TOKEN_NEEDED");
    assert_eq!(err.public_message(), "缺少刷新令牌");
}

#[test]
fn test_business_and_validation_codes() {
    let (status, code) = AppError::business("用户名已存在").to_http_response_parts();
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(code, "BUSINESS_FAIL");

    let err = AppError::validation("username", "长度必须在 3 到 32 之间");
    assert_eq!(err.to_http_response_parts().1, "TYPE_SAFE_ERROR");
    assert_eq!(err.public_message(), "username: 长度必须在 3 到 32 之间");
}

#[test]
fn test_not_found_mapping() {
    let err = AppError::not_found("用户");
    assert_eq!(err.to_http_response_parts(), (StatusCode::NOT_FOUND, "NOT_FOUND"));
    assert_eq!(err.public_message(), "用户不存在");
}

#[test]
fn test_internal_details_are_hidden() {
    let err = AppError::database("UNIQUE constraint failed: user.username");
    assert!(err.is_server_error());
    assert_eq!(err.public_message(), "服务器内部错误");
}

#[test]
fn test_auto_conversion_from_io_error() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "文件不存在");
    let err: AppError = io_err.into();

    assert!(matches!(err, AppError::Io { .. }));
    assert_eq!(err.to_http_response_parts().1, "IO_ERROR");
}

#[test]
fn test_business_error_macro() {
    fn check(name: &str) -> crate::error::Result<()> {
        crate::ensure_business!(name != "admin", "用户名 {} 已存在", name);
        Ok(())
    }

    assert!(check("alice").is_ok());
    let err = check("admin").unwrap_err();
    assert_eq!(err.public_message(), "用户名 admin 已存在");
}
