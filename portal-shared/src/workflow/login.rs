//! Token login.
//!
//! There is no dedicated validation endpoint: a candidate token is accepted
//! when the agencies listing answers 2xx with it as bearer credential,
//! whatever the body holds.

use tracing::{debug, info, warn};

use crate::api::PortalApi;
use crate::errors::ApiError;
use crate::session::{KeyValueStore, SessionStore};

/// Shown when the token field is blank.
pub const EMPTY_TOKEN_MESSAGE: &str = "Veuillez saisir votre token d'authentification";
/// Shown when the backend rejects the token.
pub const INVALID_TOKEN_MESSAGE: &str = "Token d'authentification invalide";
/// Shown on any other non-2xx answer.
pub const LOGIN_FAILED_MESSAGE: &str = "Erreur de connexion. Veuillez réessayer.";
/// Shown when the backend cannot be reached.
pub const LOGIN_NETWORK_MESSAGE: &str = "Erreur de réseau. Vérifiez votre connexion.";
/// Destination after login when no return hint was given.
pub const DEFAULT_RETURN_PATH: &str = "/services";

/// Result of a login attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Token accepted and stored.
    Authenticated,
    /// Token not stored.
    Rejected {
        /// Error to display.
        message: String,
    },
}

impl LoginOutcome {
    fn rejected(message: &str) -> Self {
        Self::Rejected {
            message: message.to_string(),
        }
    }
}

/// Validate `candidate` against the backend and store it on success.
pub async fn login<A, S>(api: &A, session: &SessionStore<S>, candidate: &str) -> LoginOutcome
where
    A: PortalApi + ?Sized,
    S: KeyValueStore,
{
    let token = candidate.trim();
    if token.is_empty() {
        return LoginOutcome::rejected(EMPTY_TOKEN_MESSAGE);
    }

    debug!("probing token against the agencies endpoint");
    match api.check_token(token).await {
        Ok(_) => {
            session.set_token(token);
            info!("login succeeded");
            LoginOutcome::Authenticated
        }
        Err(ApiError::Unauthorized) => LoginOutcome::rejected(INVALID_TOKEN_MESSAGE),
        Err(ApiError::Server { status, .. }) => {
            warn!(status, "token check failed");
            LoginOutcome::rejected(LOGIN_FAILED_MESSAGE)
        }
        Err(err) => {
            warn!(error = %err, "token check did not complete");
            LoginOutcome::rejected(LOGIN_NETWORK_MESSAGE)
        }
    }
}
