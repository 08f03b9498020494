//! Clinical service port
//!
//! The remote processing service (image enhancement, note generation,
//! health) plus the read-only sample record resource.

use async_trait::async_trait;
use ehr_domain::{HealthReport, PatientRecord};
use serde_json::Value;

use crate::error::RequestError;

/// An image file selected for enhancement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    /// Original file name, sent as the multipart file name.
    pub file_name: String,
    /// Raw file contents.
    pub bytes: Vec<u8>,
    /// MIME type, if known. Guessed from the file name otherwise.
    pub content_type: Option<String>,
}

impl ImageUpload {
    /// Creates an upload with no explicit MIME type.
    #[must_use]
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
            content_type: None,
        }
    }

    /// Sets an explicit MIME type.
    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

/// Port for talking to the remote clinical-data service.
///
/// `check_health` and `load_patient_records` cannot fail: degraded results
/// are encoded in their return values. Only the two processing calls
/// surface a [`RequestError`].
#[async_trait]
pub trait ClinicalService: Send + Sync {
    /// Checks the service health endpoint.
    ///
    /// Any failure becomes a report with status `"error"`.
    async fn check_health(&self) -> HealthReport;

    /// Uploads an image to the enhancement endpoint.
    ///
    /// # Errors
    /// Returns a [`RequestError`] on a non-success status (carrying the
    /// server's `detail` when present) or on transport failure.
    async fn enhance_image(&self, upload: ImageUpload) -> Result<Value, RequestError>;

    /// Sends patient data to the note generation endpoint.
    ///
    /// # Errors
    /// Same contract as [`ClinicalService::enhance_image`].
    async fn generate_note(&self, patient_data: &Value) -> Result<Value, RequestError>;

    /// Loads the sample patient records.
    ///
    /// Returns an empty list when the resource is missing or malformed.
    async fn load_patient_records(&self) -> Vec<PatientRecord>;
}
