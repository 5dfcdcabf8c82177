use serde::{Deserialize, Serialize};

/// Error body returned by the backend on non-2xx responses.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// Human readable message, shown verbatim when present.
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorResponse {
    /// Creates an error response carrying `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
        }
    }

    /// The message when it is present and not blank.
    pub fn message(&self) -> Option<&str> {
        self.error.as_deref().filter(|text| !text.trim().is_empty())
    }
}

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message().unwrap_or("unknown error"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_new() {
        let error = ErrorResponse::new("Service inconnu");
        assert_eq!(error.message(), Some("Service inconnu"));
        assert_eq!(error.to_string(), "Service inconnu");
    }

    #[test]
    fn test_blank_message_is_absent() {
        let error: ErrorResponse = serde_json::from_str(r#"{"error":"  "}"#).unwrap();
        assert_eq!(error.message(), None);
        assert_eq!(error.to_string(), "unknown error");
    }

    #[test]
    fn test_missing_field() {
        let error: ErrorResponse = serde_json::from_str(r#"{"detail":"x"}"#).unwrap();
        assert_eq!(error, ErrorResponse::default());
    }
}
