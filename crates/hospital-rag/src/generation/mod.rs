//! Answer generation over retrieved records

pub mod chat;
pub mod prompt;

pub use chat::ChatService;
pub use prompt::PromptBuilder;
