//! Backend surface consumed by the portal.
//!
//! The workflows in [`crate::workflow`] only talk to the backend through
//! [`PortalApi`], so they run unchanged against the browser client and against
//! test doubles.

use async_trait::async_trait;

use crate::errors::ApiError;
use crate::models::{
    Agency, Appointment, AppointmentRequest, ChatReply, ChatRequest, Service, SubmissionResponse,
    UploadFile,
};

/// Endpoint paths, relative to the backend origin.
pub mod endpoints {
    /// `GET`, optionally authenticated. Also used to validate login tokens,
    /// where only the status matters.
    pub const AGENCIES: &str = "/chatbot/agencies/";
    /// `GET`, public.
    pub const SERVICES: &str = "/chatbot/api/services/";
    /// `POST` multipart, authenticated.
    pub const SUBMIT: &str = "/chatbot/submit/";
    /// `POST` JSON, authenticated.
    pub const APPOINTMENTS: &str = "/chatbot/appointments/";
    /// `POST` JSON, public.
    pub const CHAT_MESSAGE: &str = "/chatbot/api/message/";
}

/// Multipart payload of a document submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRequest {
    /// Selected service name, sent as `service_type`.
    pub service_type: String,
    /// Identity document, sent as `identity_document`.
    pub identity_document: UploadFile,
    /// Selfie, already compressed, sent as `selfie`.
    pub selfie: UploadFile,
}

/// Calls made to the portal backend.
///
/// Implementations map a 401 answer to [`ApiError::Unauthorized`], any other
/// non-2xx answer to [`ApiError::Server`] carrying the body's `error` text,
/// and transport failures to [`ApiError::Network`].
#[async_trait(?Send)]
pub trait PortalApi {
    /// List the bank's services.
    async fn list_services(&self) -> Result<Vec<Service>, ApiError>;

    /// List agencies, optionally presenting `token` as bearer credential.
    async fn list_agencies(&self, token: Option<&str>) -> Result<Vec<Agency>, ApiError>;

    /// Present `token` to the agencies endpoint and report only the status.
    ///
    /// The body is never decoded: any 2xx answer accepts the token.
    async fn check_token(&self, token: &str) -> Result<(), ApiError>;

    /// Upload the onboarding documents.
    async fn submit_documents(
        &self,
        token: &str,
        request: SubmissionRequest,
    ) -> Result<SubmissionResponse, ApiError>;

    /// Book an appointment for a previous submission.
    async fn book_appointment(
        &self,
        token: &str,
        request: &AppointmentRequest,
    ) -> Result<Appointment, ApiError>;

    /// Send one chat question and wait for the answer.
    async fn send_chat_message(&self, request: &ChatRequest) -> Result<ChatReply, ApiError>;
}
