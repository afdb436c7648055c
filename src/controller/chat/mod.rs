pub mod process_chat;

pub use process_chat::{method_not_allowed, not_found, process_chat};
