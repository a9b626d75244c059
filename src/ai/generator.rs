//! Configuration generation pipeline.
//!
//! One stateless request/response operation: gate on the credential, build
//! the prompt, call the backend once, and collapse every failure into a
//! displayable string. No retries, no shared state between calls.

use reqwest::Client;

use crate::ai::config::AiSettings;
use crate::ai::errors::GenerationError;
use crate::ai::prompt::build_prompt;
use crate::ai::provider::TextGenerator;
use crate::ai::providers::gemini::GeminiProvider;

/// Generates configuration text for `user_request` constrained by
/// `policy_context`.
///
/// Always returns a displayable string: the generated configuration, the
/// "No configuration generated." placeholder, or an error description.
/// Settings (credential included) are re-read from the environment on
/// every call.
pub async fn generate_configuration(user_request: &str, policy_context: &str) -> String {
    let settings = AiSettings::from_env();
    generate_with_settings(&settings, user_request, policy_context).await
}

/// Same as [`generate_configuration`], with caller-supplied settings.
pub async fn generate_with_settings(
    settings: &AiSettings,
    user_request: &str,
    policy_context: &str,
) -> String {
    generate_via(settings, build_gemini_provider, user_request, policy_context).await
}

/// Generation pipeline, generic over the backend so tests can substitute
/// one. The provider builder is the credential gate: when it fails, no
/// client is built and no call is attempted.
pub(crate) async fn generate_via<P, B>(
    settings: &AiSettings,
    build_provider: B,
    user_request: &str,
    policy_context: &str,
) -> String
where
    P: TextGenerator,
    B: FnOnce(&AiSettings) -> Result<P, GenerationError>,
{
    let provider = match build_provider(settings) {
        Ok(provider) => provider,
        Err(e) => return e.to_string(),
    };

    let client = match Client::builder().timeout(settings.timeout()).build() {
        Ok(client) => client,
        Err(e) => return GenerationError::Unexpected(e.to_string()).to_string(),
    };

    let prompt = build_prompt(user_request, policy_context);
    match provider.generate(&client, &prompt).await {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(
                "{} generation failed for model {}: {}",
                provider.provider_id(),
                provider.model_name(),
                e
            );
            e.to_string()
        }
    }
}

fn build_gemini_provider(settings: &AiSettings) -> Result<GeminiProvider, GenerationError> {
    let api_key = settings
        .api_key
        .clone()
        .ok_or(GenerationError::MissingCredential)?;

    Ok(GeminiProvider::new(
        settings.endpoint.clone(),
        settings.model.clone(),
        api_key,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::Future;
    use std::pin::Pin;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Clone)]
    struct MockGenerator {
        calls: Arc<AtomicUsize>,
        /// `None` makes the mock fail with an unexpected error.
        reply: Option<String>,
    }

    impl MockGenerator {
        fn replying(reply: &str) -> Self {
            Self {
                calls: Arc::new(AtomicUsize::new(0)),
                reply: Some(reply.to_string()),
            }
        }

        fn failing() -> Self {
            Self {
                calls: Arc::new(AtomicUsize::new(0)),
                reply: None,
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl TextGenerator for MockGenerator {
        fn provider_id(&self) -> &'static str {
            "mock"
        }

        fn model_name(&self) -> &str {
            "mock-model"
        }

        fn generate<'a>(
            &'a self,
            _client: &'a Client,
            _prompt: &'a str,
        ) -> Pin<Box<dyn Future<Output = Result<String, GenerationError>> + Send + 'a>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let reply = self.reply.clone();
            Box::pin(async move {
                reply.ok_or_else(|| GenerationError::Unexpected("mock backend down".to_string()))
            })
        }
    }

    fn settings_with_key(api_key: Option<&str>) -> AiSettings {
        AiSettings {
            endpoint: "https://generativelanguage.googleapis.com".to_string(),
            model: "gemini-2.0-flash-lite".to_string(),
            timeout_ms: 1000,
            api_key: api_key.map(str::to_string),
        }
    }

    fn gated_mock(
        mock: &MockGenerator,
    ) -> impl FnOnce(&AiSettings) -> Result<MockGenerator, GenerationError> + '_ {
        move |settings: &AiSettings| match settings.api_key {
            Some(_) => Ok(mock.clone()),
            None => Err(GenerationError::MissingCredential),
        }
    }

    #[tokio::test]
    async fn missing_credential_short_circuits_without_backend_call() {
        let mock = MockGenerator::replying("never used");
        let settings = settings_with_key(None);

        let out = generate_via(&settings, gated_mock(&mock), "anything", "anything").await;

        assert_eq!(out, GenerationError::MissingCredential.to_string());
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn successful_generation_returns_backend_text_exactly() {
        let generated = "interface Vlan10\n ip address 10.0.10.1 255.255.255.0";
        let mock = MockGenerator::replying(generated);
        let settings = settings_with_key(Some("test-key"));

        let out = generate_via(
            &settings,
            gated_mock(&mock),
            "Configure VLAN 10 with gateway 10.0.10.1",
            "Context: The DMZ web server must allow incoming traffic on ports 80 and 443.",
        )
        .await;

        assert_eq!(out, generated);
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn backend_failure_collapses_to_error_string() {
        let mock = MockGenerator::failing();
        let settings = settings_with_key(Some("test-key"));

        let out = generate_via(&settings, gated_mock(&mock), "req", "ctx").await;

        assert_eq!(out, "An unexpected error occurred: mock backend down");
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn generate_with_settings_reports_missing_credential() {
        let settings = settings_with_key(None);
        let out = generate_with_settings(&settings, "anything", "anything").await;
        assert!(out.contains("API key is not configured"));
    }
}
