use serde::{Deserialize, Serialize};

use super::chat_completion_message::ChatCompletionMessage;

/// Body of the outbound chat-completions call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionPayload {
    pub model: String,
    pub messages: Vec<ChatCompletionMessage>,
}

impl CompletionPayload {
    /// The instruction as system message, then the transcript, untouched.
    pub fn for_transcript(model: &str, instruction: &str, chat_text: &str) -> Self {
        Self {
            model: model.to_string(),
            messages: vec![
                ChatCompletionMessage::system(instruction),
                ChatCompletionMessage::user(chat_text),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::chat_completion_message::{ROLE_SYSTEM, ROLE_USER};

    const INSTRUCTION: &str = "Extract the transactions.";

    #[test]
    fn builds_system_then_user_message() {
        let payload = CompletionPayload::for_transcript("test/model", INSTRUCTION, "Ravi paid 50");

        assert_eq!(payload.model, "test/model");
        assert_eq!(payload.messages.len(), 2);
        assert_eq!(payload.messages[0].role, ROLE_SYSTEM);
        assert_eq!(payload.messages[0].content, INSTRUCTION);
        assert_eq!(payload.messages[1].role, ROLE_USER);
        assert_eq!(payload.messages[1].content, "Ravi paid 50");
    }

    #[test]
    fn transcript_is_forwarded_byte_for_byte() {
        let transcript = "  [12/03, 9:14] Asha: gpay 20 ✅\r\n[12/03, 9:15] Ravi: \"paid\" 500 rs\t";
        let payload = CompletionPayload::for_transcript("m", INSTRUCTION, transcript);
        assert_eq!(payload.messages[1].content.as_bytes(), transcript.as_bytes());
    }

    #[test]
    fn serializes_to_chat_completions_shape() {
        let payload = CompletionPayload::for_transcript("m", INSTRUCTION, "hi");
        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(value["model"], "m");
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][1], serde_json::json!({ "role": "user", "content": "hi" }));
        assert_eq!(value.as_object().unwrap().len(), 2);
    }
}
