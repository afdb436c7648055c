use serde::Deserialize;

use crate::error::AppError;

pub const NO_CHAT_TEXT: &str = "No chat text provided.";

/// Inbound body. Only `chatText` is read; other fields are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct RelayRequest {
    #[serde(rename = "chatText")]
    pub chat_text: Option<String>,
}

impl RelayRequest {
    /// Parses the raw body and returns the transcript, rejecting absent or empty text.
    pub fn parse(body: &[u8]) -> Result<String, AppError> {
        let request: RelayRequest = serde_json::from_slice(body)
            .map_err(|e| AppError::Validation(format!("Invalid request body: {}", e)))?;

        match request.chat_text {
            Some(text) if !text.is_empty() => Ok(text),
            _ => Err(AppError::Validation(NO_CHAT_TEXT.to_string())),
        }
    }
}
