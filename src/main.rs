use actix_web::{web, HttpServer};
use anyhow::Context;
use std::time::Duration;

use chat_relay::routes;
use chat_relay::service::RelayService;
use chat_relay::utils::init;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 初始化应用配置和日志系统
    let config = init::init().context("初始化应用程序失败").map_err(std::io::Error::other)?;

    let relay = RelayService::from_config(&config)
        .context("初始化转发服务失败")
        .map_err(std::io::Error::other)?;
    let relay = web::Data::new(relay);

    let server_config = config.server.clone();

    log::info!("Listening on {}:{}", server_config.host, server_config.port);

    HttpServer::new(move || routes::app(relay.clone()))
        .client_request_timeout(Duration::from_secs(server_config.client_request_timeout))
        .bind((server_config.host.as_str(), server_config.port))?
        .shutdown_timeout(server_config.shutdown_timeout) // 优雅关闭等待时间
        .run()
        .await
}
