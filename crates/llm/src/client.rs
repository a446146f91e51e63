use async_trait::async_trait;
use beonyeok_common::{BeonyeokError, Result};
use reqwest::Client;
use tracing::{debug, info};

use crate::types::{ChatMessage, ChatRequest, ChatResponse};

/// Seam over the external completion call, so the translate pipeline can be
/// exercised without a network.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Run one completion: system instruction plus user text, single attempt.
    async fn complete(&self, system: &str, user: &str) -> Result<String>;
}

/// OpenAI-compatible chat-completions client
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    base_url: String,
    api_key: String,
    model: String,
    temperature: f32,
    client: Client,
}

impl OpenAiClient {
    /// Create new client with a fixed model and temperature
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
        temperature: f32,
    ) -> Result<Self> {
        let base_url = base_url.into();
        let model = model.into();
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to create HTTP client: {}", e))?;

        info!("Completion client initialized: {} ({})", base_url, model);
        Ok(Self {
            base_url,
            api_key: api_key.into(),
            model,
            temperature,
            client,
        })
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    /// One attempt, no retry. A failed action is reported and the user
    /// re-invokes it manually.
    async fn complete(&self, system: &str, user: &str) -> Result<String> {
        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));

        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage::system(system), ChatMessage::user(user)],
            temperature: self.temperature,
        };

        debug!(
            "Sending completion request - Model: {}, System length: {}, User length: {}",
            request.model,
            system.len(),
            user.len()
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| BeonyeokError::network(format!("Failed to reach {}: {}", url, e)))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            BeonyeokError::translation(format!("Failed to read completion response: {}", e))
        })?;

        let content = extract_completion(status, &body)?;
        debug!("Received completion - Length: {}", content.len());
        Ok(content)
    }
}

/// Turn a raw completion response into its text.
///
/// Every provider-side failure (error status, unparseable body, empty choice
/// list) comes back as a `Translation` error for the UI to report.
fn extract_completion(status: reqwest::StatusCode, body: &str) -> Result<String> {
    if !status.is_success() {
        let snippet: String = body.chars().take(300).collect();
        return Err(BeonyeokError::translation(format!(
            "Completion API returned {}: {}",
            status, snippet
        )));
    }

    let result: ChatResponse = serde_json::from_str(body).map_err(|e| {
        BeonyeokError::translation(format!("Malformed completion response: {}", e))
    })?;

    result
        .choices
        .into_iter()
        .next()
        .map(|c| c.message.content)
        .ok_or_else(|| BeonyeokError::translation("Completion response had no choices"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_extract_completion_success() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"안녕하세요"}}]}"#;
        let content = extract_completion(StatusCode::OK, body).unwrap();
        assert_eq!(content, "안녕하세요");
    }

    #[test]
    fn test_error_status_is_translation_error() {
        let err = extract_completion(
            StatusCode::TOO_MANY_REQUESTS,
            r#"{"error":{"message":"rate limit"}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, BeonyeokError::Translation(_)));
        assert!(err.to_string().contains("429"));
    }

    #[test]
    fn test_malformed_body_is_translation_error() {
        let err = extract_completion(StatusCode::OK, "<html>gateway</html>").unwrap_err();
        assert!(matches!(err, BeonyeokError::Translation(_)));
    }

    #[test]
    fn test_empty_choices_is_translation_error() {
        let err = extract_completion(StatusCode::OK, r#"{"choices":[]}"#).unwrap_err();
        assert!(matches!(err, BeonyeokError::Translation(_)));
        assert!(err.to_string().contains("no choices"));
    }

    #[test]
    fn test_error_status_snippet_is_bounded() {
        let body = "x".repeat(5000);
        let err = extract_completion(StatusCode::BAD_GATEWAY, &body).unwrap_err();
        assert!(err.to_string().len() < 500);
    }
}
