//! # 令牌性能基准测试
//!
//! 签发、校验与门禁判定的开销

use std::hint::black_box;
use std::sync::Arc;

use criterion::{Criterion, criterion_group, criterion_main};
use press_api::auth::{AuthGateway, AuthHeaders, JwtManager, RoutePolicy};
use press_api::config::JwtConfig;

fn create_jwt_manager() -> JwtManager {
    JwtManager::new(&JwtConfig {
        secret: "press-api-bench-secret".to_string(),
        ..JwtConfig::default()
    })
    .expect("创建 JWT 管理器失败")
}

fn bench_mint(c: &mut Criterion) {
    let jwt = create_jwt_manager();

    c.bench_function("mint_access_token", |b| {
        b.iter(|| jwt.mint_access(black_box(42)).unwrap());
    });
    c.bench_function("mint_token_pair", |b| {
        b.iter(|| jwt.mint_pair(black_box(42)).unwrap());
    });
}

fn bench_verify(c: &mut Criterion) {
    let jwt = create_jwt_manager();
    let token = jwt.mint_access(42).unwrap();
    let mut tampered = token.clone();
    tampered.push('x');

    c.bench_function("verify_valid_token", |b| {
        b.iter(|| jwt.verify(black_box(&token)));
    });
    c.bench_function("verify_tampered_token", |b| {
        b.iter(|| jwt.verify(black_box(&tampered)));
    });
}

fn bench_gateway(c: &mut Criterion) {
    let jwt = Arc::new(create_jwt_manager());
    let gateway = AuthGateway::new(jwt.clone());
    let access = jwt.mint_access(42).unwrap();
    let refresh = jwt.mint_refresh(42).unwrap();

    c.bench_function("authorize_access_token", |b| {
        b.iter(|| {
            let headers = AuthHeaders::new(Some(&access), None);
            gateway.authorize(black_box(&headers), RoutePolicy::PROTECTED)
        });
    });
    c.bench_function("authorize_refresh_token", |b| {
        b.iter(|| {
            let headers = AuthHeaders::new(None, Some(&refresh));
            gateway.authorize(black_box(&headers), RoutePolicy::REFRESHABLE)
        });
    });
}

criterion_group!(benches, bench_mint, bench_verify, bench_gateway);
criterion_main!(benches);
