//! # HTTP 服务器
//!
//! 应用状态与服务器生命周期

use std::ops::Deref;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;

use crate::app::AppContext;
use crate::config::ServerConfig;
use crate::error::{AppError, Result};
use crate::linfo;
use crate::logging::{LogComponent, LogStage};

/// 应用状态
#[derive(Clone)]
pub struct AppState {
    context: Arc<AppContext>,
}

impl AppState {
    #[must_use]
    pub const fn new(context: Arc<AppContext>) -> Self {
        Self { context }
    }
}

impl Deref for AppState {
    type Target = AppContext;

    fn deref(&self) -> &Self::Target {
        &self.context
    }
}

/// API 服务器
pub struct ApiServer {
    config: ServerConfig,
    router: Router,
}

impl ApiServer {
    #[must_use]
    pub fn new(config: ServerConfig, context: Arc<AppContext>) -> Self {
        let router = super::routes::create_routes(AppState::new(context));
        Self { config, router }
    }

    /// 构建好的路由，供测试直接驱动
    #[must_use]
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// 启动服务器，收到 Ctrl-C 后优雅退出
    pub async fn serve(self) -> Result<()> {
        let addr = self.config.bind_address();
        let listener = TcpListener::bind(&addr).await.map_err(|e| {
            AppError::server_start_with_source(format!("无法绑定地址 {addr}"), e)
        })?;

        linfo!(
            "system",
            LogStage::Startup,
            LogComponent::ServerSetup,
            "server_start",
            format!("Starting API server on {addr}")
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| AppError::server_start_with_source("API server error", e))?;

        linfo!(
            "system",
            LogStage::Shutdown,
            LogComponent::ServerSetup,
            "server_stop",
            "API server stopped"
        );
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("无法监听 Ctrl-C 信号: {e}");
        std::future::pending::<()>().await;
    }
}
