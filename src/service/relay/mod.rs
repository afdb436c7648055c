//! 聊天转发服务
//!
//! Validates the inbound transcript, wraps it with the extraction prompt and
//! hands it to a [`CompletionClient`]. The upstream reply is returned untouched.

pub mod completion_client;
pub mod openrouter;
pub mod prompt;

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};

pub use completion_client::CompletionClient;
pub use openrouter::OpenRouterClient;

use crate::entities::{CompletionPayload, RelayRequest};
use crate::error::AppError;
use crate::utils::config::AppConfig;
use prompt::EXTRACTION_PROMPT;

pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

pub struct RelayService {
    client: Arc<dyn CompletionClient>,
    model: String,
    api_key: Option<SecretString>,
    max_body_bytes: usize,
}

impl RelayService {
    pub fn new(
        client: Arc<dyn CompletionClient>,
        model: impl Into<String>,
        api_key: Option<SecretString>,
    ) -> Self {
        Self { client, model: model.into(), api_key, max_body_bytes: DEFAULT_MAX_BODY_BYTES }
    }

    pub fn with_max_body_bytes(mut self, max_body_bytes: usize) -> Self {
        self.max_body_bytes = max_body_bytes;
        self
    }

    /// Wires the reqwest client and the credential from the environment.
    pub fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let client = OpenRouterClient::new(&config.upstream)?;
        let api_key = config.api_key();
        if api_key.is_none() {
            log::warn!(
                "{} is not set; every relay request will fail until it is provided",
                config.upstream.api_key_env
            );
        }
        Ok(Self::new(Arc::new(client), config.upstream.model.clone(), api_key)
            .with_max_body_bytes(config.server.max_payload_bytes))
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn max_body_bytes(&self) -> usize {
        self.max_body_bytes
    }

    /// The configured credential; absent or empty keys fail with [`AppError::MissingApiKey`].
    pub fn api_key(&self) -> Result<&SecretString, AppError> {
        self.api_key
            .as_ref()
            .filter(|key| !key.expose_secret().is_empty())
            .ok_or(AppError::MissingApiKey)
    }

    /// Validates the body and makes the single outbound call.
    pub async fn relay(
        &self,
        api_key: &SecretString,
        body: &[u8],
    ) -> Result<serde_json::Value, AppError> {
        let chat_text = RelayRequest::parse(body)?;
        let payload = CompletionPayload::for_transcript(&self.model, EXTRACTION_PROMPT, &chat_text);

        self.client.complete(api_key, &payload).await
    }
}
