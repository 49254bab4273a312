//! "Send a Suggestion" payloads.

use serde::Serialize;

use crate::error::FormError;

/// Path of the suggestion endpoint, relative to `api_url`.
pub const FEEDBACK_PATH: &str = "feedback";

/// Longest suggestion accepted, in characters.
pub const MAX_SUGGESTION_CHARS: usize = 2000;

/// Raw suggestion form
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SuggestionForm {
    /// Report the suggestion is about
    pub report_id: String,
    /// Text as typed
    pub text: String,
}

/// Body of `POST feedback`
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionRequest {
    /// Report the suggestion is about
    pub report_id: String,
    /// Trimmed suggestion text
    pub message: String,
}

impl SuggestionForm {
    /// Trim the text and check it is non-empty and within
    /// [`MAX_SUGGESTION_CHARS`].
    pub fn validate(&self) -> Result<SuggestionRequest, FormError> {
        let message = self.text.trim();
        if message.is_empty() {
            return Err(FormError::MissingSuggestion);
        }
        if message.chars().count() > MAX_SUGGESTION_CHARS {
            return Err(FormError::SuggestionTooLong {
                max: MAX_SUGGESTION_CHARS,
            });
        }
        Ok(SuggestionRequest {
            report_id: self.report_id.clone(),
            message: message.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn form(text: &str) -> SuggestionForm {
        SuggestionForm {
            report_id: "signup-funnel".into(),
            text: text.into(),
        }
    }

    #[test]
    fn blank_suggestion_is_rejected() {
        assert_eq!(form("  \n ").validate(), Err(FormError::MissingSuggestion));
    }

    #[test]
    fn overlong_suggestion_is_rejected() {
        let text = "x".repeat(MAX_SUGGESTION_CHARS + 1);
        assert_eq!(
            form(&text).validate(),
            Err(FormError::SuggestionTooLong {
                max: MAX_SUGGESTION_CHARS
            })
        );
    }

    #[test]
    fn payload_is_trimmed_and_camel_cased() {
        let request = form("  Split by country  ").validate().expect("valid");
        assert_eq!(request.message, "Split by country");
        assert_eq!(
            serde_json::to_value(&request).expect("serializes"),
            serde_json::json!({ "reportId": "signup-funnel", "message": "Split by country" })
        );
    }
}
