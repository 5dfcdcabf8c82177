//! Error types shared by the portal crates.

use thiserror::Error;

/// Failure of a call to the portal backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The backend answered 401 for the supplied bearer token.
    #[error("unauthorized")]
    Unauthorized,
    /// Any other non-2xx answer, with the backend `error` text when it sent one.
    #[error("server returned {status}: {}", message.as_deref().unwrap_or("no message"))]
    Server {
        /// HTTP status code.
        status: u16,
        /// Backend provided message.
        message: Option<String>,
    },
    /// The request never completed.
    #[error("network error: {0}")]
    Network(String),
    /// The response body could not be decoded.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status carried by the error, when the backend answered.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized => Some(401),
            Self::Server { status, .. } => Some(*status),
            Self::Network(_) | Self::Decode(_) => None,
        }
    }

    /// The backend message, if any, suitable to show verbatim.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Server {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => Some(message),
            _ => None,
        }
    }
}

/// Local failures that do not involve the backend.
#[derive(Debug, Error)]
pub enum PortalError {
    /// The selected file could not be decoded or re-encoded as an image.
    #[error("image processing failed: {0}")]
    Image(#[from] image::ImageError),
    /// A persisted value could not be (de)serialized.
    #[error("invalid stored data: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::Unauthorized.status(), Some(401));
        assert_eq!(
            ApiError::Server {
                status: 503,
                message: None
            }
            .status(),
            Some(503)
        );
        assert_eq!(ApiError::Network("offline".into()).status(), None);
    }

    #[test]
    fn test_server_message_only_when_present() {
        let with_text = ApiError::Server {
            status: 400,
            message: Some("Fichier trop volumineux".into()),
        };
        let blank = ApiError::Server {
            status: 400,
            message: Some("   ".into()),
        };

        assert_eq!(with_text.server_message(), Some("Fichier trop volumineux"));
        assert_eq!(blank.server_message(), None);
        assert_eq!(ApiError::Unauthorized.server_message(), None);
    }

    #[test]
    fn test_display() {
        let error = ApiError::Server {
            status: 500,
            message: None,
        };
        assert_eq!(error.to_string(), "server returned 500: no message");
        assert_eq!(
            ApiError::Network("connection refused".into()).to_string(),
            "network error: connection refused"
        );
    }
}
