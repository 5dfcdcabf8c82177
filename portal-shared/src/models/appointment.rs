use serde::{Deserialize, Serialize};

/// Body of `POST /chatbot/appointments/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentRequest {
    /// Agency chosen by the user.
    pub agency_id: i64,
    /// Submission recorded after the onboarding upload.
    pub submission_id: i64,
}

/// Confirmed appointment returned by the booking endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    /// Opaque QR payload.
    #[serde(default)]
    pub qr_code: String,
    /// URL of the rendered QR image.
    #[serde(rename = "qr_code_file", default)]
    pub qr_code_file_url: String,
    /// Filled in locally from the selected agency.
    #[serde(default)]
    pub agency_name: Option<String>,
    /// Human readable slot, as formatted by the backend.
    #[serde(default)]
    pub appointment_time: Option<String>,
}

impl Appointment {
    /// File name offered when downloading the QR image.
    pub const QR_DOWNLOAD_NAME: &'static str = "rendez_vous_qr_code.png";

    /// Whether a QR image is available for display and download.
    pub fn has_qr_image(&self) -> bool {
        !self.qr_code_file_url.is_empty()
    }
}
