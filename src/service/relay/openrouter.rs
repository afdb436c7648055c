use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

use super::completion_client::CompletionClient;
use crate::entities::CompletionPayload;
use crate::error::AppError;
use crate::utils::config::UpstreamConfig;

/// reqwest-backed client for an OpenRouter-compatible chat-completions endpoint.
pub struct OpenRouterClient {
    client: reqwest::Client,
    provider: String,
    url: String,
    referer: Option<String>,
    title: Option<String>,
}

impl OpenRouterClient {
    pub fn new(config: &UpstreamConfig) -> Result<Self, AppError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            provider: config.name.clone(),
            url: config.completions_url(),
            referer: config.referer.clone(),
            title: config.title.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl CompletionClient for OpenRouterClient {
    async fn complete(
        &self,
        api_key: &SecretString,
        payload: &CompletionPayload,
    ) -> Result<serde_json::Value, AppError> {
        let mut request =
            self.client.post(&self.url).bearer_auth(api_key.expose_secret()).json(payload);
        if let Some(referer) = &self.referer {
            request = request.header("HTTP-Referer", referer);
        }
        if let Some(title) = &self.title {
            request = request.header("X-Title", title);
        }

        log::debug!("Sending completion request to {} (model: {})", self.url, payload.model);
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            match response.text().await {
                Ok(error_text) => {
                    log::error!("{} API error ({}): {}", self.provider, status.as_u16(), error_text)
                }
                Err(e) => log::error!(
                    "{} API error ({}), failed to read error body: {}",
                    self.provider,
                    status.as_u16(),
                    e
                ),
            }
            return Err(AppError::Upstream {
                provider: self.provider.clone(),
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown Status").to_string(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
