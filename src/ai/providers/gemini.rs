use reqwest::Client;
use serde_json::json;
use std::future::Future;
use std::pin::Pin;

use crate::ai::errors::GenerationError;
use crate::ai::provider::{extract_generated_text, TextGenerator, NO_CONFIGURATION_FALLBACK};

// Fixed tuning values; identical for every request.
const TEMPERATURE: f64 = 0.5;
const MAX_OUTPUT_TOKENS: u32 = 1024;

#[derive(Debug, Clone)]
pub(crate) struct GeminiProvider {
    endpoint: String,
    model: String,
    api_key: String,
}

impl GeminiProvider {
    pub(crate) fn new(endpoint: String, model: String, api_key: String) -> Self {
        Self {
            endpoint,
            model,
            api_key,
        }
    }
}

/// Request body for `generateContent`: one content entry holding the
/// assembled prompt, plus the fixed generation configuration.
pub(crate) fn build_request_body(prompt: &str) -> serde_json::Value {
    json!({
        "contents": [{
            "parts": [{ "text": prompt }]
        }],
        "generationConfig": {
            "temperature": TEMPERATURE,
            "maxOutputTokens": MAX_OUTPUT_TOKENS
        }
    })
}

impl TextGenerator for GeminiProvider {
    fn provider_id(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.model
    }

    fn generate<'a>(
        &'a self,
        client: &'a Client,
        prompt: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String, GenerationError>> + Send + 'a>> {
        Box::pin(async move {
            let endpoint = self.endpoint.trim_end_matches('/');
            // The credential travels as a query parameter, not a header.
            let url = format!(
                "{}/v1beta/models/{}:generateContent?key={}",
                endpoint, self.model, self.api_key
            );

            let response = client
                .post(url)
                .json(&build_request_body(prompt))
                .send()
                .await?;

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(GenerationError::Http { status, body });
            }

            let payload: serde_json::Value = response
                .json()
                .await
                .map_err(|e| GenerationError::Unexpected(e.to_string()))?;

            // A 2xx body without the expected shape degrades to the
            // placeholder instead of failing the call.
            Ok(extract_generated_text(&payload)
                .unwrap_or(NO_CONFIGURATION_FALLBACK)
                .to_string())
        })
    }
}
