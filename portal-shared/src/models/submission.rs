use serde::{Deserialize, Serialize};

/// A file picked by the visitor, held in memory until upload.
#[derive(Clone, PartialEq, Eq)]
pub struct UploadFile {
    /// Original file name.
    pub name: String,
    /// MIME type reported by the browser, possibly empty.
    pub mime_type: String,
    /// File contents.
    pub bytes: Vec<u8>,
}

impl UploadFile {
    /// Build a file from its parts.
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// Whether the browser reported an `image/*` type.
    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with("image/")
    }

    /// Size in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the file has no content.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl std::fmt::Debug for UploadFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadFile")
            .field("name", &self.name)
            .field("mime_type", &self.mime_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Successful response of `POST /chatbot/submit/`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionResponse {
    /// Confirmation text to show the visitor.
    #[serde(default)]
    pub message: Option<String>,
    /// Identifier required later to book an appointment.
    #[serde(default)]
    pub submission_id: Option<i64>,
}
