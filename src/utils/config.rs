use anyhow::Context;
use secrecy::SecretString;
use serde::Deserialize;

pub const DEFAULT_CONFIG_PATH: &str = "config/app.yml";
/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
pub const CONFIG_PATH_ENV: &str = "CHAT_RELAY_CONFIG";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub shutdown_timeout: u64,
    pub client_request_timeout: u64,
    pub max_payload_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8888,
            shutdown_timeout: 30,
            client_request_timeout: 30,
            max_payload_bytes: 1024 * 1024,
        }
    }
}

/// Completion provider settings. The credential is not part of the file;
/// `api_key_env` names the environment variable that holds it.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UpstreamConfig {
    pub name: String,
    pub base_url: String,
    pub model: String,
    pub referer: Option<String>,
    pub title: Option<String>,
    pub timeout_secs: Option<u64>,
    pub api_key_env: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            name: "OpenRouter".to_string(),
            base_url: "https://openrouter.ai/api/v1".to_string(),
            model: "mistralai/mistral-7b-instruct:free".to_string(),
            referer: None,
            title: None,
            timeout_secs: None,
            api_key_env: "OPENROUTER_API_KEY".to_string(),
        }
    }
}

impl UpstreamConfig {
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub config_file: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { config_file: "config/log4rs.yml".to_string() }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    pub fn load(config_path: &str) -> anyhow::Result<Self> {
        let config_file = std::fs::File::open(config_path)
            .with_context(|| format!("Failed to open config file {}", config_path))?;
        let config: Self = serde_yaml::from_reader(config_file)
            .with_context(|| format!("Failed to parse config file {}", config_path))?;
        Ok(config)
    }

    pub fn from_yaml_str(source: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(source)?)
    }

    /// Path from `CHAT_RELAY_CONFIG`, or the default location.
    pub fn config_path() -> String {
        std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string())
    }

    /// Reads the provider credential once. Empty values count as absent.
    pub fn api_key(&self) -> Option<SecretString> {
        std::env::var(&self.upstream.api_key_env)
            .ok()
            .filter(|key| !key.is_empty())
            .map(SecretString::from)
    }
}
