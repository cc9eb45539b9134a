//! Media Blob - an uploaded file stored inline

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// An uploaded media file, payload base64-encoded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MediaBlob {
    id: String,
    filename: String,
    mime_type: String,
    data: String,
    uploaded_at: DateTime<Utc>,
}

impl MediaBlob {
    pub(crate) fn new(
        id: String,
        filename: impl Into<String>,
        mime_type: impl Into<String>,
        data: String,
    ) -> Self {
        Self {
            id,
            filename: filename.into(),
            mime_type: mime_type.into(),
            data,
            uploaded_at: Utc::now(),
        }
    }

    /// Get the blob id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the original filename.
    #[must_use]
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Get the MIME type.
    #[must_use]
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Get the base64-encoded payload.
    #[must_use]
    pub fn data(&self) -> &str {
        &self.data
    }

    /// Get the upload timestamp.
    #[must_use]
    pub const fn uploaded_at(&self) -> DateTime<Utc> {
        self.uploaded_at
    }

    /// Decode the payload back into raw bytes.
    ///
    /// # Errors
    ///
    /// Returns `Storage` if the stored payload is not valid base64.
    pub fn decode(&self) -> Result<Vec<u8>> {
        STANDARD
            .decode(&self.data)
            .map_err(|e| Error::Storage(format!("corrupt payload for blob {}: {e}", self.id)))
    }

    /// Encode raw bytes the way blobs store them.
    #[must_use]
    pub fn encode(bytes: &[u8]) -> String {
        STANDARD.encode(bytes)
    }
}
