//! Recording test double for [`PortalApi`].

use std::cell::RefCell;

use async_trait::async_trait;

use crate::api::{PortalApi, SubmissionRequest};
use crate::errors::ApiError;
use crate::models::{
    Agency, Appointment, AppointmentRequest, ChatReply, ChatRequest, Coordinates, Service,
    SubmissionResponse,
};

/// A call received by [`FakeApi`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ListServices,
    ListAgencies { token: Option<String> },
    CheckToken { token: String },
    Submit { token: String, service_type: String, selfie_mime: String },
    Book { token: String, request: AppointmentRequest },
    Chat { question: String },
}

/// Answers every call with a canned result and records it.
pub struct FakeApi {
    calls: RefCell<Vec<Call>>,
    services: Result<Vec<Service>, ApiError>,
    agencies: Result<Vec<Agency>, ApiError>,
    token_check: Result<(), ApiError>,
    submission: Result<SubmissionResponse, ApiError>,
    appointment: Result<Appointment, ApiError>,
    chat: Result<ChatReply, ApiError>,
}

impl Default for FakeApi {
    fn default() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            services: Ok(Vec::new()),
            agencies: Ok(vec![agency(1, "Agence Centrale")]),
            token_check: Ok(()),
            submission: Ok(SubmissionResponse::default()),
            appointment: Ok(Appointment {
                qr_code: "APT-1".into(),
                qr_code_file_url: "/media/qr/apt-1.png".into(),
                agency_name: None,
                appointment_time: None,
            }),
            chat: Ok(ChatReply::default()),
        }
    }
}

impl FakeApi {
    pub fn with_agencies(mut self, result: Result<Vec<Agency>, ApiError>) -> Self {
        self.agencies = result;
        self
    }

    pub fn with_token_check(mut self, result: Result<(), ApiError>) -> Self {
        self.token_check = result;
        self
    }

    pub fn with_submission(mut self, result: Result<SubmissionResponse, ApiError>) -> Self {
        self.submission = result;
        self
    }

    pub fn with_appointment(mut self, result: Result<Appointment, ApiError>) -> Self {
        self.appointment = result;
        self
    }

    pub fn with_chat(mut self, result: Result<ChatReply, ApiError>) -> Self {
        self.chat = result;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

pub fn agency(id: i64, name: &str) -> Agency {
    Agency {
        id,
        name: name.to_string(),
        coordinates: Coordinates {
            latitude: Some(-3.38),
            longitude: Some(29.36),
        },
        address: "Boulevard de l'Uprona, Bujumbura".to_string(),
    }
}

#[async_trait(?Send)]
impl PortalApi for FakeApi {
    async fn list_services(&self) -> Result<Vec<Service>, ApiError> {
        self.record(Call::ListServices);
        self.services.clone()
    }

    async fn list_agencies(&self, token: Option<&str>) -> Result<Vec<Agency>, ApiError> {
        self.record(Call::ListAgencies {
            token: token.map(str::to_string),
        });
        self.agencies.clone()
    }

    async fn check_token(&self, token: &str) -> Result<(), ApiError> {
        self.record(Call::CheckToken {
            token: token.to_string(),
        });
        self.token_check.clone()
    }

    async fn submit_documents(
        &self,
        token: &str,
        request: SubmissionRequest,
    ) -> Result<SubmissionResponse, ApiError> {
        self.record(Call::Submit {
            token: token.to_string(),
            service_type: request.service_type,
            selfie_mime: request.selfie.mime_type,
        });
        self.submission.clone()
    }

    async fn book_appointment(
        &self,
        token: &str,
        request: &AppointmentRequest,
    ) -> Result<Appointment, ApiError> {
        self.record(Call::Book {
            token: token.to_string(),
            request: request.clone(),
        });
        self.appointment.clone()
    }

    async fn send_chat_message(&self, request: &ChatRequest) -> Result<ChatReply, ApiError> {
        self.record(Call::Chat {
            question: request.question.clone(),
        });
        self.chat.clone()
    }
}
