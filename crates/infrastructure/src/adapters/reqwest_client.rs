//! Clinical service client implementation using reqwest.
//!
//! This adapter implements the `ClinicalService` port. It owns all network
//! I/O to the remote processing service and normalizes every failure into
//! either a degraded result (health, records) or a `RequestError`.

use async_trait::async_trait;
use ehr_application::{ClinicalService, ImageUpload, RequestError};
use ehr_domain::{HealthReport, PatientRecord, StatusCode, error_detail};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, Url};
use serde_json::Value;

use super::record_source::RecordSource;

const HEALTH_PATH: &str = "health";
const ENHANCE_IMAGE_PATH: &str = "enhance-image";
const GENERATE_NOTE_PATH: &str = "generate-note";

/// Multipart field carrying the uploaded image.
const UPLOAD_FIELD: &str = "file";

const HEALTH_FAILED_MESSAGE: &str = "API not responding";
const ENHANCE_FAILED_MESSAGE: &str = "Image enhancement failed";
const NOTE_FAILED_MESSAGE: &str = "Note generation failed";

/// Error creating the underlying HTTP client.
#[derive(Debug, thiserror::Error)]
#[error("could not create HTTP client: {0}")]
pub struct ClientSetupError(#[from] reqwest::Error);

/// Why a best-effort read failed. Only ever logged.
#[derive(Debug, thiserror::Error)]
enum FetchError {
    #[error("{0}")]
    Request(#[from] RequestError),

    #[error("HTTP {0}")]
    Status(StatusCode),

    #[error("could not read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// HTTP client for the clinical processing service.
///
/// Sends one request per call with no retries and no client-side timeout;
/// a request the service never answers never settles.
#[derive(Debug, Clone)]
pub struct ReqwestClinicalClient {
    client: Client,
    base_url: Url,
    records: RecordSource,
}

impl ReqwestClinicalClient {
    /// Creates a client for the service at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(base_url: Url, records: RecordSource) -> Result<Self, ClientSetupError> {
        let client = Client::builder()
            .user_agent(concat!("ehr-client/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_client(client, base_url, records))
    }

    /// Creates a client around an existing reqwest client.
    #[must_use]
    pub fn with_client(client: Client, mut base_url: Url, records: RecordSource) -> Self {
        // Endpoints are joined relative to the base, which needs a trailing slash.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Self {
            client,
            base_url,
            records,
        }
    }

    /// Returns the service base URL.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, RequestError> {
        self.base_url
            .join(path)
            .map_err(|e| RequestError::Transport(format!("Invalid endpoint {path}: {e}")))
    }

    /// Maps reqwest errors to `RequestError`.
    fn map_error(error: &reqwest::Error) -> RequestError {
        if error.is_connect() {
            let host = error
                .url()
                .and_then(|u| u.host_str().map(ToString::to_string))
                .unwrap_or_else(|| "unknown".to_string());
            return RequestError::Transport(format!(
                "Could not connect to the processing service at {host}"
            ));
        }
        if error.is_timeout() {
            return RequestError::Transport("Request to the processing service timed out".into());
        }
        RequestError::Transport(error.to_string())
    }

    /// Sends a request and decodes a JSON success body.
    ///
    /// Non-success statuses become `RequestError::Rejected`, carrying the
    /// body's `detail` string or `fallback`.
    async fn send_for_json(request: RequestBuilder, fallback: &str) -> Result<Value, RequestError> {
        let response = request.send().await.map_err(|e| Self::map_error(&e))?;
        let status = StatusCode::new(response.status().as_u16());

        if !status.is_success() {
            let body = response.bytes().await.unwrap_or_default();
            let message = error_detail(&body).unwrap_or_else(|| fallback.to_string());
            return Err(RequestError::rejected(status.as_u16(), message));
        }

        let body = response.bytes().await.map_err(|e| Self::map_error(&e))?;
        serde_json::from_slice(&body)
            .map_err(|e| RequestError::InvalidResponse(format!("Invalid JSON response: {e}")))
    }

    async fn fetch_health(&self) -> Result<HealthReport, FetchError> {
        let url = self.endpoint(HEALTH_PATH)?;
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Self::map_error(&e))?;

        let status = StatusCode::new(response.status().as_u16());
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.bytes().await.map_err(|e| Self::map_error(&e))?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn fetch_records(&self) -> Result<Vec<PatientRecord>, FetchError> {
        let body = match &self.records {
            RecordSource::Http(url) => {
                let response = self
                    .client
                    .get(url.clone())
                    .send()
                    .await
                    .map_err(|e| Self::map_error(&e))?;
                let status = StatusCode::new(response.status().as_u16());
                if !status.is_success() {
                    return Err(FetchError::Status(status));
                }
                response
                    .bytes()
                    .await
                    .map_err(|e| Self::map_error(&e))?
                    .to_vec()
            }
            RecordSource::File(path) => {
                tokio::fs::read(path).await.map_err(|source| FetchError::Io {
                    path: path.display().to_string(),
                    source,
                })?
            }
        };
        Ok(serde_json::from_slice(&body)?)
    }

    /// Builds the multipart form for an upload.
    fn upload_form(upload: ImageUpload) -> Result<Form, RequestError> {
        let content_type = upload.content_type.unwrap_or_else(|| {
            mime_guess::from_path(&upload.file_name)
                .first_or(mime::APPLICATION_OCTET_STREAM)
                .to_string()
        });
        let part = Part::bytes(upload.bytes)
            .file_name(upload.file_name)
            .mime_str(&content_type)
            .map_err(|e| {
                RequestError::Transport(format!("Invalid content type {content_type}: {e}"))
            })?;
        Ok(Form::new().part(UPLOAD_FIELD, part))
    }
}

#[async_trait]
impl ClinicalService for ReqwestClinicalClient {
    async fn check_health(&self) -> HealthReport {
        match self.fetch_health().await {
            Ok(report) => report,
            Err(e) => {
                tracing::warn!(error = %e, "Health check failed");
                let message = match e {
                    FetchError::Request(inner) => inner.message().to_string(),
                    _ => HEALTH_FAILED_MESSAGE.to_string(),
                };
                HealthReport::failed(message)
            }
        }
    }

    async fn enhance_image(&self, upload: ImageUpload) -> Result<Value, RequestError> {
        let url = self.endpoint(ENHANCE_IMAGE_PATH)?;
        let form = Self::upload_form(upload)?;
        let request = self.client.post(url).multipart(form);
        Self::send_for_json(request, ENHANCE_FAILED_MESSAGE).await
    }

    async fn generate_note(&self, patient_data: &Value) -> Result<Value, RequestError> {
        let url = self.endpoint(GENERATE_NOTE_PATH)?;
        let request = self
            .client
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, mime::APPLICATION_JSON.as_ref())
            .body(patient_data.to_string());
        Self::send_for_json(request, NOTE_FAILED_MESSAGE).await
    }

    async fn load_patient_records(&self) -> Vec<PatientRecord> {
        match self.fetch_records().await {
            Ok(records) => {
                tracing::debug!(
                    count = records.len(),
                    source = %self.records,
                    "Loaded patient records"
                );
                records
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    source = %self.records,
                    "Failed to load patient records"
                );
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn client(base: &str) -> ReqwestClinicalClient {
        ReqwestClinicalClient::new(
            Url::parse(base).unwrap(),
            RecordSource::File(PathBuf::from("missing.json")),
        )
        .unwrap()
    }

    #[test]
    fn endpoints_join_onto_base() {
        let client = client("http://localhost:8000");
        assert_eq!(
            client.endpoint(HEALTH_PATH).unwrap().as_str(),
            "http://localhost:8000/health"
        );
    }

    #[test]
    fn base_path_is_preserved() {
        let client = client("https://ehr.example.org/api/v1");
        assert_eq!(client.base_url().as_str(), "https://ehr.example.org/api/v1/");
        assert_eq!(
            client.endpoint(GENERATE_NOTE_PATH).unwrap().as_str(),
            "https://ehr.example.org/api/v1/generate-note"
        );
    }

    #[test]
    fn upload_form_accepts_guessed_and_explicit_types() {
        assert!(ReqwestClinicalClient::upload_form(ImageUpload::new("xray.png", vec![0])).is_ok());
        assert!(ReqwestClinicalClient::upload_form(ImageUpload::new("scan.dcm", vec![0])).is_ok());
        assert!(
            ReqwestClinicalClient::upload_form(
                ImageUpload::new("scan", vec![0]).with_content_type("image/jpeg")
            )
            .is_ok()
        );
    }

    #[test]
    fn invalid_explicit_content_type_is_rejected() {
        let upload = ImageUpload::new("scan.png", vec![0]).with_content_type("not a mime");
        assert!(matches!(
            ReqwestClinicalClient::upload_form(upload),
            Err(RequestError::Transport(_))
        ));
    }

    #[tokio::test]
    async fn missing_record_file_yields_empty_list() {
        let client = client("http://localhost:8000");
        assert!(client.load_patient_records().await.is_empty());
    }
}
