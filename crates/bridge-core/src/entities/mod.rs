//! Domain entities - core business objects

mod chat_message;

pub use chat_message::ChatMessage;
