//! Appointment booking at a selected agency.

use tracing::{debug, warn};

use crate::api::PortalApi;
use crate::errors::ApiError;
use crate::models::{Agency, Appointment, AppointmentRequest};
use crate::session::{KeyValueStore, SessionStore};

use super::NETWORK_ERROR_MESSAGE;

/// Shown on the onboarding page when booking is attempted before submitting.
pub const SUBMISSION_REQUIRED_MESSAGE: &str =
    "Veuillez d'abord soumettre vos documents dans la section Demande";
/// Shown when the backend refuses the booking without explanation.
pub const BOOKING_FAILED_MESSAGE: &str = "Erreur lors de la réservation";

/// Result of a booking attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingOutcome {
    /// No token is stored; nothing was sent.
    LoginRequired,
    /// No submission id is stored; nothing was sent.
    SubmissionRequired {
        /// Notice carried to the onboarding page.
        message: String,
    },
    /// Appointment confirmed.
    Booked(Appointment),
    /// The backend refused the booking or could not be reached.
    Failed {
        /// Error to display.
        message: String,
    },
}

/// Book an appointment at `agency` for the stored submission.
///
/// Preconditions are checked in order (token, then submission id) and no
/// request is sent when either is missing.
pub async fn book<A, S>(api: &A, session: &SessionStore<S>, agency: &Agency) -> BookingOutcome
where
    A: PortalApi + ?Sized,
    S: KeyValueStore,
{
    let Some(token) = session.token() else {
        debug!(agency_id = agency.id, "booking attempted without a token");
        return BookingOutcome::LoginRequired;
    };
    let Some(submission_id) = session.submission_id() else {
        debug!(agency_id = agency.id, "booking attempted without a submission");
        return BookingOutcome::SubmissionRequired {
            message: SUBMISSION_REQUIRED_MESSAGE.to_string(),
        };
    };

    let request = AppointmentRequest {
        agency_id: agency.id,
        submission_id,
    };
    match api.book_appointment(&token, &request).await {
        Ok(mut appointment) => {
            appointment.agency_name = Some(agency.name.clone());
            BookingOutcome::Booked(appointment)
        }
        Err(err @ (ApiError::Server { .. } | ApiError::Unauthorized)) => BookingOutcome::Failed {
            message: err
                .server_message()
                .unwrap_or(BOOKING_FAILED_MESSAGE)
                .to_string(),
        },
        Err(err) => {
            warn!(error = %err, "booking request failed");
            BookingOutcome::Failed {
                message: NETWORK_ERROR_MESSAGE.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemoryStore;
    use crate::testing::{Call, FakeApi, agency};

    fn session_with(token: Option<&str>, submission_id: Option<i64>) -> SessionStore<MemoryStore> {
        let session = SessionStore::new(MemoryStore::new());
        if let Some(token) = token {
            session.set_token(token);
        }
        if let Some(id) = submission_id {
            session.set_submission_id(id);
        }
        session
    }

    #[tokio::test]
    async fn test_requires_token_first() {
        let api = FakeApi::default();
        let session = session_with(None, None);

        let outcome = book(&api, &session, &agency(1, "Agence Centrale")).await;

        assert_eq!(outcome, BookingOutcome::LoginRequired);
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_requires_submission() {
        let api = FakeApi::default();
        let session = session_with(Some("tok"), None);

        let outcome = book(&api, &session, &agency(1, "Agence Centrale")).await;

        assert_eq!(
            outcome,
            BookingOutcome::SubmissionRequired {
                message: SUBMISSION_REQUIRED_MESSAGE.to_string()
            }
        );
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_booked_fills_agency_name() {
        let api = FakeApi::default();
        let session = session_with(Some("tok"), Some(9));

        let outcome = book(&api, &session, &agency(4, "Agence Ngozi")).await;

        let BookingOutcome::Booked(appointment) = outcome else {
            panic!("expected a booked appointment, got {outcome:?}");
        };
        assert_eq!(appointment.agency_name.as_deref(), Some("Agence Ngozi"));
        assert_eq!(appointment.qr_code, "APT-1");
        assert_eq!(
            api.calls(),
            vec![Call::Book {
                token: "tok".into(),
                request: AppointmentRequest {
                    agency_id: 4,
                    submission_id: 9,
                },
            }]
        );
    }

    #[tokio::test]
    async fn test_server_error_text() {
        let api = FakeApi::default().with_appointment(Err(ApiError::Server {
            status: 409,
            message: Some("Créneau indisponible".into()),
        }));
        let session = session_with(Some("tok"), Some(9));

        let outcome = book(&api, &session, &agency(1, "Agence Centrale")).await;

        assert_eq!(
            outcome,
            BookingOutcome::Failed {
                message: "Créneau indisponible".into()
            }
        );
    }

    #[tokio::test]
    async fn test_unauthorized_keeps_token() {
        let api = FakeApi::default().with_appointment(Err(ApiError::Unauthorized));
        let session = session_with(Some("tok"), Some(9));

        let outcome = book(&api, &session, &agency(1, "Agence Centrale")).await;

        assert_eq!(
            outcome,
            BookingOutcome::Failed {
                message: BOOKING_FAILED_MESSAGE.into()
            }
        );
        assert_eq!(session.token().as_deref(), Some("tok"));
    }

    #[tokio::test]
    async fn test_network_failure() {
        let api =
            FakeApi::default().with_appointment(Err(ApiError::Network("timeout".into())));
        let session = session_with(Some("tok"), Some(9));

        let outcome = book(&api, &session, &agency(1, "Agence Centrale")).await;

        assert_eq!(
            outcome,
            BookingOutcome::Failed {
                message: NETWORK_ERROR_MESSAGE.into()
            }
        );
    }
}
