use thiserror::Error;

/// Failure modes of a single generation call.
///
/// Transport, HTTP-status, and decode failures stay distinguishable here;
/// every variant collapses to its display string at the
/// `generate_configuration` boundary, which always returns text.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// No credential in the secrets file or the environment. Checked
    /// before any transport activity.
    #[error("API key is not configured. Add GOOGLE_API_KEY to the secrets file or set the environment variable.")]
    MissingCredential,

    /// Connection-level failure before an HTTP status was received.
    #[error("Error communicating with the API: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-2xx status.
    #[error("Error communicating with the API: {status}: {body}")]
    Http {
        status: reqwest::StatusCode,
        body: String,
    },

    /// Anything else that went wrong during the call or decoding.
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}
