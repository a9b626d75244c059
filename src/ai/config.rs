use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_AI_TIMEOUT_MS: u64 = 30_000;
const DEFAULT_GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash-lite";

/// Credential name in both the secrets file and the environment.
pub const API_KEY_NAME: &str = "GOOGLE_API_KEY";

/// Runtime AI settings (env-driven).
///
/// Settings are re-read on every resolution; nothing is cached between
/// generation calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiSettings {
    pub endpoint: String,
    pub model: String,
    pub timeout_ms: u64,
    /// Resolved from the secrets file first, then the environment.
    /// Never serialized into reports or logs.
    #[serde(skip_serializing, default)]
    pub api_key: Option<String>,
}

impl Default for AiSettings {
    fn default() -> Self {
        Self::from_env()
    }
}

impl AiSettings {
    pub fn from_env() -> Self {
        Self {
            endpoint: env_var("CONFGEN_AI_ENDPOINT")
                .unwrap_or_else(|| DEFAULT_GEMINI_ENDPOINT.to_string()),
            model: env_var("CONFGEN_AI_MODEL")
                .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            timeout_ms: env_parse_u64("CONFGEN_AI_TIMEOUT_MS", DEFAULT_AI_TIMEOUT_MS, 500, 120_000),
            api_key: resolve_api_key(),
        }
    }

    pub(crate) fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Resolves the API credential: secrets file first, environment second.
/// Absence is recoverable; callers report it instead of failing hard.
fn resolve_api_key() -> Option<String> {
    read_secrets_file()
        .and_then(|raw| parse_secrets_key(&raw))
        .or_else(|| env_var(API_KEY_NAME))
}

fn read_secrets_file() -> Option<String> {
    std::fs::read_to_string(secrets_file_path()?).ok()
}

/// Extracts the credential from the secrets file body (a JSON object
/// keyed by credential name).
fn parse_secrets_key(raw: &str) -> Option<String> {
    let secrets: serde_json::Value = serde_json::from_str(raw).ok()?;
    secrets
        .get(API_KEY_NAME)
        .and_then(|v| v.as_str())
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Secrets file location.
///
/// Returns: `%APPDATA%/confgen/secrets.json` on Windows,
///          `~/.config/confgen/secrets.json` on Linux/macOS.
pub fn secrets_file_path() -> Option<PathBuf> {
    let base_dir = if cfg!(target_os = "windows") {
        dirs::data_local_dir()?
    } else {
        dirs::config_dir()?
    };
    Some(base_dir.join("confgen").join("secrets.json"))
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn env_parse_u64(name: &str, default: u64, min: u64, max: u64) -> u64 {
    match env_var(name).and_then(|v| v.parse::<u64>().ok()) {
        Some(v) => v.clamp(min, max),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_secrets_key_reads_credential() {
        let raw = r#"{"GOOGLE_API_KEY": "test-key-123"}"#;
        assert_eq!(parse_secrets_key(raw), Some("test-key-123".to_string()));
    }

    #[test]
    fn parse_secrets_key_ignores_blank_or_missing_credential() {
        assert_eq!(parse_secrets_key(r#"{"GOOGLE_API_KEY": "   "}"#), None);
        assert_eq!(parse_secrets_key(r#"{"OTHER_KEY": "x"}"#), None);
        assert_eq!(parse_secrets_key("not json"), None);
    }

    #[test]
    fn secrets_file_path_targets_app_directory() {
        let path = secrets_file_path().expect("platform config dir should resolve");
        let rendered = path.to_string_lossy();
        assert!(rendered.contains("confgen"));
        assert!(rendered.ends_with("secrets.json"));
    }
}
