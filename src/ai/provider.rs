use reqwest::Client;
use std::future::Future;
use std::pin::Pin;

use crate::ai::errors::GenerationError;

/// Fallback text returned when a 2xx response carries no generated text.
pub const NO_CONFIGURATION_FALLBACK: &str = "No configuration generated.";

/// Seam between the generation pipeline and a concrete backend. Production
/// uses Gemini; tests substitute counting/canned implementations.
pub(crate) trait TextGenerator: Send + Sync {
    fn provider_id(&self) -> &'static str;
    fn model_name(&self) -> &str;
    fn generate<'a>(
        &'a self,
        client: &'a Client,
        prompt: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String, GenerationError>> + Send + 'a>>;
}

/// Walks `candidates[0].content.parts[0].text` in a generateContent
/// response. Tolerates a missing or differently shaped value at every
/// level, including an entirely empty object.
pub(crate) fn extract_generated_text(payload: &serde_json::Value) -> Option<&str> {
    payload
        .get("candidates")
        .and_then(|v| v.as_array())
        .and_then(|arr| arr.first())
        .and_then(|candidate| candidate.get("content"))
        .and_then(|content| content.get("parts"))
        .and_then(|parts| parts.as_array())
        .and_then(|parts| parts.first())
        .and_then(|part| part.get("text"))
        .and_then(|v| v.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extract_reads_first_candidate_text() {
        let payload = json!({
            "candidates": [
                { "content": { "parts": [ { "text": "interface Vlan10" } ] } },
                { "content": { "parts": [ { "text": "ignored" } ] } }
            ]
        });
        assert_eq!(extract_generated_text(&payload), Some("interface Vlan10"));
    }

    #[test]
    fn extract_tolerates_empty_object() {
        assert_eq!(extract_generated_text(&json!({})), None);
    }

    #[test]
    fn extract_tolerates_missing_levels() {
        let shapes = [
            json!({ "candidates": [] }),
            json!({ "candidates": [{}] }),
            json!({ "candidates": [ { "content": {} } ] }),
            json!({ "candidates": [ { "content": { "parts": [] } } ] }),
            json!({ "candidates": [ { "content": { "parts": [{}] } } ] }),
            json!({ "candidates": "not-an-array" }),
            json!({ "candidates": [ { "content": { "parts": [ { "text": 7 } ] } } ] }),
        ];
        for shape in &shapes {
            assert_eq!(extract_generated_text(shape), None, "shape: {}", shape);
        }
    }
}
