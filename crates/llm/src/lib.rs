//! Beonyeok LLM Integration
//!
//! OpenAI 호환 chat-completions 클라이언트와 번역 파이프라인

mod client;
mod prompts;
mod translate;
mod types;

pub use client::{CompletionClient, OpenAiClient};
pub use prompts::{build_instruction, glossary_block, NO_TERMS_PLACEHOLDER};
pub use translate::Translator;
pub use types::{ChatChoice, ChatMessage, ChatRequest, ChatResponse};
