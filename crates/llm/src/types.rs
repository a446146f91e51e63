use serde::{Deserialize, Serialize};

/// Chat-completions request
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    /// Model name (e.g., "gpt-4.1-mini")
    pub model: String,

    /// Conversation messages (system instruction + user text)
    pub messages: Vec<ChatMessage>,

    /// Sampling temperature
    pub temperature: f32,
}

/// One chat message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// "system" or "user" (or "assistant" in responses)
    pub role: String,

    /// Message text
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Chat-completions response
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    /// Returned completions (the service requests exactly one)
    pub choices: Vec<ChatChoice>,
}

/// One returned completion
#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    /// Assistant message carrying the completion text
    pub message: ChatMessage,
}
