pub mod config;
pub mod deadline;
pub mod fences;
pub mod gemini;
pub mod prompts;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use config::GeminiConfig;
pub use deadline::with_deadline;
pub use fences::strip_code_fences;
pub use gemini::{GeminiClient, GeminiTransport};
pub use types::*;
