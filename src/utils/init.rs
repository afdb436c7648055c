use anyhow::Context;
use log::{info, warn, LevelFilter};
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::path::Path;

use crate::utils::config::AppConfig;

const CONSOLE_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S%.3f)} {h({l}):<5} {t} - {m}{n}";

/// 加载应用配置并初始化日志系统
pub fn init() -> anyhow::Result<AppConfig> {
    let config_path = AppConfig::config_path();
    let config_exists = Path::new(&config_path).exists();
    let config =
        if config_exists { AppConfig::load(&config_path)? } else { AppConfig::default() };

    init_logging(&config.logging.config_file)?;

    if config_exists {
        info!("Loaded configuration from {}", config_path);
    } else {
        warn!("Config file {} not found, using built-in defaults", config_path);
    }
    info!(
        "Relaying to {} ({}) with model {}",
        config.upstream.name,
        config.upstream.completions_url(),
        config.upstream.model
    );

    Ok(config)
}

/// Uses the log4rs file when present, a plain console logger otherwise.
fn init_logging(log_config: &str) -> anyhow::Result<()> {
    if Path::new(log_config).exists() {
        return log4rs::init_file(log_config, Default::default())
            .with_context(|| format!("Failed to initialise logging from {}", log_config));
    }

    let stdout =
        ConsoleAppender::builder().encoder(Box::new(PatternEncoder::new(CONSOLE_PATTERN))).build();
    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(LevelFilter::Info))
        .map_err(|e| anyhow::anyhow!("Invalid console logging config: {}", e))?;
    log4rs::init_config(config)?;
    Ok(())
}
