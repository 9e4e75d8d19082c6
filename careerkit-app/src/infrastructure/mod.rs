pub mod gemini;
pub mod processor;
pub mod prompt;
pub mod retry;
pub mod security;
