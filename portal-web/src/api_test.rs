//! Tests for the API client
//!
//! Covers URL building and the mapping of backend error bodies.

#[cfg(test)]
mod tests {
    use crate::api::{PortalClient, error_from_body};
    use shared::api::endpoints;
    use shared::errors::ApiError;

    #[test]
    fn test_api_url_joins_paths() {
        let client = PortalClient::new("https://portal.bcb.bi/");
        assert_eq!(
            client.api_url(endpoints::AGENCIES),
            "https://portal.bcb.bi/chatbot/agencies/"
        );
        assert_eq!(
            client.api_url(endpoints::CHAT_MESSAGE),
            "https://portal.bcb.bi/chatbot/api/message/"
        );
    }

    #[test]
    fn test_error_body_message_kept() {
        assert_eq!(
            error_from_body(400, r#"{"error":"Selfie manquant"}"#),
            ApiError::Server {
                status: 400,
                message: Some("Selfie manquant".into()),
            }
        );
    }

    #[test]
    fn test_error_body_without_message() {
        assert_eq!(
            error_from_body(500, "<html>Internal Server Error</html>"),
            ApiError::Server {
                status: 500,
                message: None,
            }
        );
        assert_eq!(
            error_from_body(502, r#"{"error":""}"#),
            ApiError::Server {
                status: 502,
                message: None,
            }
        );
    }
}
