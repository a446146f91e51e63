use beonyeok_common::Result;
use beonyeok_store::Glossary;
use std::sync::Arc;
use tracing::info;

use crate::client::CompletionClient;
use crate::prompts::build_instruction;

/// The translation pipeline: snapshot of glossary and style guide in, Korean
/// text out, with the actual translation delegated to the completion client.
#[derive(Clone)]
pub struct Translator {
    client: Arc<dyn CompletionClient>,
}

impl Translator {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    /// Translate one piece of English text.
    ///
    /// Whitespace-only input short-circuits to an empty result without any
    /// external call. Otherwise the assembled instruction goes out as the
    /// system message and the raw input as the user message; the trimmed
    /// completion comes back.
    pub async fn translate(
        &self,
        text: &str,
        glossary: &Glossary,
        style_guide: &str,
    ) -> Result<String> {
        if text.trim().is_empty() {
            return Ok(String::new());
        }

        let instruction = build_instruction(style_guide, glossary);
        info!(
            "Translating {} chars with {} glossary terms",
            text.len(),
            glossary.len()
        );

        let completion = self.client.complete(&instruction, text).await?;
        Ok(completion.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use beonyeok_common::BeonyeokError;
    use beonyeok_store::GlossaryEntry;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Records every call instead of hitting a network.
    struct MockClient {
        calls: AtomicUsize,
        last_system: Mutex<String>,
        reply: std::result::Result<String, String>,
    }

    impl MockClient {
        fn replying(text: &str) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                last_system: Mutex::new(String::new()),
                reply: Ok(text.to_string()),
            }
        }

        fn failing(msg: &str) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                last_system: Mutex::new(String::new()),
                reply: Err(msg.to_string()),
            }
        }
    }

    #[async_trait]
    impl CompletionClient for MockClient {
        async fn complete(&self, system: &str, _user: &str) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_system.lock().unwrap() = system.to_string();
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(msg) => Err(BeonyeokError::translation(msg.clone())),
            }
        }
    }

    #[tokio::test]
    async fn test_blank_input_short_circuits() {
        let client = Arc::new(MockClient::replying("무시됨"));
        let translator = Translator::new(client.clone());

        for input in ["", "   ", "\n\t  \n"] {
            let result = translator
                .translate(input, &Glossary::new(), "x")
                .await
                .unwrap();
            assert_eq!(result, "");
        }
        assert_eq!(client.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_sends_instruction_and_trims_reply() {
        let client = Arc::new(MockClient::replying("  고양이가 앉았다.\n"));
        let translator = Translator::new(client.clone());
        let glossary = Glossary::from_entries(vec![GlossaryEntry::new("cat", "고양이")]);

        let result = translator
            .translate("The cat sat.", &glossary, "Use formal tone.")
            .await
            .unwrap();

        assert_eq!(result, "고양이가 앉았다.");
        assert_eq!(client.calls.load(Ordering::SeqCst), 1);

        let system = client.last_system.lock().unwrap().clone();
        assert!(system.contains("Use formal tone."));
        assert!(system.contains("- cat: 고양이"));
    }

    #[tokio::test]
    async fn test_client_failure_surfaces_as_translation_error() {
        let client = Arc::new(MockClient::failing("rate limited"));
        let translator = Translator::new(client);

        let err = translator
            .translate("Hello", &Glossary::new(), "x")
            .await
            .unwrap_err();
        assert!(matches!(err, BeonyeokError::Translation(_)));
    }
}
