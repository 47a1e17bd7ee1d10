//! # Press API 主程序
//!
//! 用户注册、登录与 JWT 令牌服务

use std::sync::Arc;

use press_api::{
    Result,
    api::ApiServer,
    app::AppContext,
    config, lerror, linfo,
    logging::{self, LogComponent, LogStage},
};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        lerror!(
            "system",
            LogStage::Startup,
            LogComponent::Main,
            "service_start_failed",
            format!("服务启动失败: {e:?}")
        );
        std::process::exit(1);
    }

    linfo!(
        "system",
        LogStage::Shutdown,
        LogComponent::Main,
        "service_shutdown",
        "服务正常关闭"
    );
}

async fn run() -> Result<()> {
    let config = match config::load_config() {
        Ok(config) => config,
        Err(e) => {
            logging::init_logging(None);
            return Err(e);
        }
    };
    logging::init_logging(Some(&config.log.level));

    linfo!(
        "system",
        LogStage::Startup,
        LogComponent::Config,
        "config_loaded",
        format!(
            "配置加载完成: bind={}, database={}",
            config.server.bind_address(),
            if config.database.is_sqlite() { "sqlite" } else { "external" }
        )
    );

    let server_config = config.server.clone();
    let context = Arc::new(AppContext::bootstrap(config).await?);

    linfo!(
        "system",
        LogStage::Startup,
        LogComponent::Main,
        "service_starting",
        "服务启动"
    );
    ApiServer::new(server_config, context).serve().await
}
