//! Wire and domain models exchanged with the portal backend.

/// Appointment booking request and confirmation.
pub mod appointment;
/// Services and agencies offered by the bank.
pub mod catalog;
/// Support chat messages and payloads.
pub mod chat;
/// Error bodies returned by the backend.
pub mod errors;
/// Document uploads and the submission answer.
pub mod submission;
/// RFC 3339 timestamps for chat messages.
pub mod timestamp;

pub use appointment::{Appointment, AppointmentRequest};
pub use catalog::{Agency, Coordinates, Service};
pub use chat::{ChatMessage, ChatReply, ChatRequest};
pub use errors::ErrorResponse;
pub use submission::{SubmissionResponse, UploadFile};
pub use timestamp::Timestamp;
