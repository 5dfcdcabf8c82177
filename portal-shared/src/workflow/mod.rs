//! # Workflows
//!
//! Request orchestration behind the gated pages: token login, document
//! submission, appointment booking and chat turns. Each workflow reads and
//! writes the session through [`SessionStore`](crate::session::SessionStore),
//! calls the backend through [`PortalApi`](crate::api::PortalApi) and returns
//! an outcome the UI turns into a message or a navigation. Preconditions are
//! checked before any request is issued.

pub mod booking;
pub mod chat;
pub mod login;
pub mod onboarding;

pub use booking::{BookingOutcome, book};
pub use chat::{ChatTranscript, PendingTurn, TurnPhase, TurnResolution, ask, run_turn};
pub use login::{LoginOutcome, login};
pub use onboarding::{FormField, SubmissionForm, SubmitOutcome, submit};

/// Shown when a request never reached the backend.
pub const NETWORK_ERROR_MESSAGE: &str = "Erreur de réseau. Veuillez réessayer.";
