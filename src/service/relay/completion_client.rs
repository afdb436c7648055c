use async_trait::async_trait;
use secrecy::SecretString;

use crate::entities::CompletionPayload;
use crate::error::AppError;

/// Outbound side of the relay: one chat-completions call per invocation.
///
/// On success the upstream JSON body is returned as-is. A non-2xx reply must be
/// reported as [`AppError::Upstream`] carrying the upstream status.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(
        &self,
        api_key: &SecretString,
        payload: &CompletionPayload,
    ) -> Result<serde_json::Value, AppError>;
}
