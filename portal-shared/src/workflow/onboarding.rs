//! Document submission for a service request.

use tracing::{debug, warn};

use crate::api::{PortalApi, SubmissionRequest};
use crate::compression::prepare_selfie;
use crate::errors::ApiError;
use crate::models::UploadFile;
use crate::session::{KeyValueStore, SessionStore};

use super::NETWORK_ERROR_MESSAGE;

/// Shown when the form is submitted with a field missing.
pub const MISSING_FIELDS_MESSAGE: &str = "Veuillez remplir tous les champs requis";
/// Shown on success when the backend sends no message of its own.
pub const SUBMITTED_MESSAGE: &str = "Documents soumis avec succès !";
/// Shown when the backend refuses the submission without explanation.
pub const SUBMISSION_FAILED_MESSAGE: &str = "Erreur lors de la soumission";
/// Delay between the success message and the move to the agencies page.
pub const REDIRECT_DELAY_MS: u32 = 2_000;

/// A required input of the submission form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    /// The service being requested.
    Service,
    /// Identity card, passport or similar.
    IdentityDocument,
    /// Photo of the applicant.
    Selfie,
}

/// The three inputs of the onboarding form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionForm {
    /// Selected service name; empty until one is chosen.
    pub service: String,
    /// Identity document as selected.
    pub identity_document: Option<UploadFile>,
    /// Selfie, compressed when it is an image.
    pub selfie: Option<UploadFile>,
}

impl SubmissionForm {
    /// Form with `service` preselected.
    pub fn with_service(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            ..Self::default()
        }
    }

    /// Store the identity document as selected.
    pub fn set_identity_document(&mut self, file: UploadFile) {
        self.identity_document = Some(file);
    }

    /// Store the selfie, compressing it first when it is an image.
    pub fn set_selfie(&mut self, file: UploadFile) {
        self.selfie = Some(prepare_selfie(file));
    }

    /// Required fields that are still empty, in display order.
    pub fn missing_fields(&self) -> Vec<FormField> {
        let mut missing = Vec::new();
        if self.service.is_empty() {
            missing.push(FormField::Service);
        }
        if self.identity_document.is_none() {
            missing.push(FormField::IdentityDocument);
        }
        if self.selfie.is_none() {
            missing.push(FormField::Selfie);
        }
        missing
    }

    /// Whether the submit action may be enabled.
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Clear every field.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn to_request(&self) -> Option<SubmissionRequest> {
        if self.service.is_empty() {
            return None;
        }
        Some(SubmissionRequest {
            service_type: self.service.clone(),
            identity_document: self.identity_document.clone()?,
            selfie: self.selfie.clone()?,
        })
    }
}

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// No token is stored; nothing was sent.
    LoginRequired,
    /// A required field is missing; nothing was sent.
    Invalid {
        /// Validation message.
        message: String,
    },
    /// Documents accepted.
    Submitted {
        /// Confirmation to display.
        message: String,
        /// Id recorded in the session, when the backend returned one.
        submission_id: Option<i64>,
    },
    /// The token was rejected and has been cleared.
    Unauthorized,
    /// The backend refused the submission or could not be reached.
    Failed {
        /// Error to display.
        message: String,
    },
}

impl SubmitOutcome {
    /// Text to show inline, if the outcome has one.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Invalid { message }
            | Self::Submitted { message, .. }
            | Self::Failed { message } => Some(message),
            Self::LoginRequired | Self::Unauthorized => None,
        }
    }

    /// Whether the outcome redirects to the login page.
    pub const fn requires_login(&self) -> bool {
        matches!(self, Self::LoginRequired | Self::Unauthorized)
    }
}

/// Submit `form` with the stored bearer token.
///
/// The token is checked before the fields. On success the returned submission
/// id is persisted; on 401 the stored token is cleared.
pub async fn submit<A, S>(api: &A, session: &SessionStore<S>, form: &SubmissionForm) -> SubmitOutcome
where
    A: PortalApi + ?Sized,
    S: KeyValueStore,
{
    let Some(token) = session.token() else {
        debug!("submission attempted without a token");
        return SubmitOutcome::LoginRequired;
    };

    let Some(request) = form.to_request() else {
        debug!(missing = ?form.missing_fields(), "submission form incomplete");
        return SubmitOutcome::Invalid {
            message: MISSING_FIELDS_MESSAGE.to_string(),
        };
    };

    match api.submit_documents(&token, request).await {
        Ok(response) => {
            if let Some(id) = response.submission_id {
                session.set_submission_id(id);
            }
            SubmitOutcome::Submitted {
                message: response
                    .message
                    .filter(|text| !text.is_empty())
                    .unwrap_or_else(|| SUBMITTED_MESSAGE.to_string()),
                submission_id: response.submission_id,
            }
        }
        Err(ApiError::Unauthorized) => {
            warn!("submission token rejected, clearing session token");
            session.clear_token();
            SubmitOutcome::Unauthorized
        }
        Err(err @ ApiError::Server { .. }) => SubmitOutcome::Failed {
            message: err
                .server_message()
                .unwrap_or(SUBMISSION_FAILED_MESSAGE)
                .to_string(),
        },
        Err(err) => {
            warn!(error = %err, "submission request failed");
            SubmitOutcome::Failed {
                message: NETWORK_ERROR_MESSAGE.to_string(),
            }
        }
    }
}
