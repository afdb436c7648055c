pub mod chat_completion_message;
pub mod completion_payload;
pub mod relay_request;

pub use chat_completion_message::ChatCompletionMessage;
pub use completion_payload::CompletionPayload;
pub use relay_request::RelayRequest;
