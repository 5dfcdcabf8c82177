use std::cell::OnceCell;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use shared::api::{PortalApi, SubmissionRequest, endpoints};
use shared::errors::ApiError;
use shared::models::{
    Agency, Appointment, AppointmentRequest, ChatReply, ChatRequest, ErrorResponse, Service,
    SubmissionResponse, UploadFile,
};
use tracing::debug;

use crate::config::PortalConfig;

thread_local! {
    static SHARED_CLIENT: OnceCell<PortalClient> = const { OnceCell::new() };
}

/// `reqwest` implementation of [`PortalApi`].
#[derive(Clone, Debug)]
pub struct PortalClient {
    base_url: String,
    client: Client,
}

impl PortalClient {
    /// Create a client for the backend at `base_url`.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Client for the configured backend, created on first use.
    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| {
            cell.get_or_init(|| Self::new(&PortalConfig::new().api_origin()))
                .clone()
        })
    }

    pub(crate) fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn get(&self, path: &str) -> RequestBuilder {
        debug!(path, "GET");
        self.client.get(self.api_url(path))
    }

    fn post(&self, path: &str) -> RequestBuilder {
        debug!(path, "POST");
        self.client.post(self.api_url(path))
    }
}

fn file_part(file: UploadFile) -> Result<Part, ApiError> {
    let UploadFile {
        name,
        mime_type,
        bytes,
    } = file;
    let part = Part::bytes(bytes).file_name(name);
    if mime_type.is_empty() {
        return Ok(part);
    }
    part.mime_str(&mime_type)
        .map_err(|err| ApiError::Network(err.to_string()))
}

async fn send(request: RequestBuilder) -> Result<Response, ApiError> {
    let response = request
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if status == StatusCode::UNAUTHORIZED {
        return Err(ApiError::Unauthorized);
    }
    let body = response.text().await.unwrap_or_default();
    Err(error_from_body(status.as_u16(), &body))
}

/// Build the error for a non-2xx answer, keeping the backend `error` text.
pub(crate) fn error_from_body(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .and_then(|response| response.message().map(str::to_string));
    ApiError::Server { status, message }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}

#[async_trait(?Send)]
impl PortalApi for PortalClient {
    async fn list_services(&self) -> Result<Vec<Service>, ApiError> {
        decode(send(self.get(endpoints::SERVICES)).await?).await
    }

    async fn list_agencies(&self, token: Option<&str>) -> Result<Vec<Agency>, ApiError> {
        let mut request = self.get(endpoints::AGENCIES);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        decode(send(request).await?).await
    }

    async fn check_token(&self, token: &str) -> Result<(), ApiError> {
        send(self.get(endpoints::AGENCIES).bearer_auth(token)).await?;
        Ok(())
    }

    async fn submit_documents(
        &self,
        token: &str,
        request: SubmissionRequest,
    ) -> Result<SubmissionResponse, ApiError> {
        let form = Form::new()
            .text("service_type", request.service_type)
            .part("identity_document", file_part(request.identity_document)?)
            .part("selfie", file_part(request.selfie)?);
        let response = send(self.post(endpoints::SUBMIT).bearer_auth(token).multipart(form)).await?;
        decode(response).await
    }

    async fn book_appointment(
        &self,
        token: &str,
        request: &AppointmentRequest,
    ) -> Result<Appointment, ApiError> {
        let response = send(
            self.post(endpoints::APPOINTMENTS)
                .bearer_auth(token)
                .json(request),
        )
        .await?;
        decode(response).await
    }

    async fn send_chat_message(&self, request: &ChatRequest) -> Result<ChatReply, ApiError> {
        decode(send(self.post(endpoints::CHAT_MESSAGE).json(request)).await?).await
    }
}
