//! Error types.

use thiserror::Error;

/// A form field that failed validation. The first failing field wins.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// Name left blank
    #[error("Please enter your name")]
    MissingName,
    /// Email left blank
    #[error("Please enter your email address")]
    MissingEmail,
    /// Email present but malformed
    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
    /// Password left blank
    #[error("Please enter your password")]
    MissingPassword,
    /// Password shorter than the minimum
    #[error("Password must be at least {min} characters")]
    PasswordTooShort {
        /// Required minimum length
        min: usize,
    },
    /// Confirmation differs from password
    #[error("Passwords do not match")]
    PasswordMismatch,
    /// Terms checkbox unticked
    #[error("You must accept the terms to continue")]
    TermsNotAccepted,
    /// Date input not in `YYYY-MM-DD` form
    #[error("'{0}' is not a valid date")]
    InvalidDate(String),
    /// Range start after end
    #[error("Start date must be on or before end date")]
    InvertedRange,
    /// Suggestion text left blank
    #[error("Please write a suggestion first")]
    MissingSuggestion,
    /// Suggestion longer than the maximum
    #[error("Suggestions are limited to {max} characters")]
    SuggestionTooLong {
        /// Maximum length in characters
        max: usize,
    },
}

/// Failure talking to the auth backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request never produced a response
    #[error("Could not reach the server: {0}")]
    Transport(String),
    /// Non-success HTTP status
    #[error("{message} (HTTP {status})")]
    Status {
        /// HTTP status code
        status: u16,
        /// Server-supplied or generic message
        message: String,
    },
    /// Response body was not the expected JSON
    #[error("Unexpected response from server: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build a status error from a response body, preferring its
    /// `message` or `detail` field over the generic reason.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| {
                ["message", "detail", "error"]
                    .iter()
                    .find_map(|key| v.get(*key).and_then(|m| m.as_str()).map(str::to_owned))
            })
            .unwrap_or_else(|| match status {
                400 => "Invalid request".to_owned(),
                401 => "Incorrect email or password".to_owned(),
                409 => "An account with this email already exists".to_owned(),
                429 => "Too many attempts, try again later".to_owned(),
                500..=599 => "The server ran into a problem".to_owned(),
                _ => "Request failed".to_owned(),
            });
        ApiError::Status { status, message }
    }
}

/// Invalid runtime configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config blob was not valid JSON for [`crate::AppConfig`]
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    /// `api_url` is not an http(s) URL
    #[error("api_url must start with http:// or https://, got '{0}'")]
    InvalidApiUrl(String),
}
