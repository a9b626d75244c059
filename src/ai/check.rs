use serde::{Deserialize, Serialize};

use crate::ai::config::AiSettings;

/// Readiness report for the generation backend. Built from configuration
/// alone; no network call is made.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiCheckReport {
    pub endpoint: String,
    pub model: String,
    pub timeout_ms: u64,
    pub api_key_configured: bool,
    pub overall_ok: bool,
}

pub fn run_ai_check() -> AiCheckReport {
    run_ai_check_with(&AiSettings::from_env())
}

pub fn run_ai_check_with(settings: &AiSettings) -> AiCheckReport {
    let api_key_configured = settings.api_key.is_some();
    AiCheckReport {
        endpoint: settings.endpoint.clone(),
        model: settings.model.clone(),
        timeout_ms: settings.timeout_ms,
        api_key_configured,
        overall_ok: api_key_configured,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(api_key: Option<&str>) -> AiSettings {
        AiSettings {
            endpoint: "https://generativelanguage.googleapis.com".to_string(),
            model: "gemini-2.0-flash-lite".to_string(),
            timeout_ms: 2000,
            api_key: api_key.map(str::to_string),
        }
    }

    #[test]
    fn check_fails_without_credential() {
        let report = run_ai_check_with(&settings(None));
        assert!(!report.api_key_configured);
        assert!(!report.overall_ok);
    }

    #[test]
    fn check_passes_with_credential_and_never_leaks_it() {
        let report = run_ai_check_with(&settings(Some("secret-key")));
        assert!(report.overall_ok);

        let rendered = serde_json::to_string(&report).expect("report should serialize");
        assert!(!rendered.contains("secret-key"));
    }
}
