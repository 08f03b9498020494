//! Enhance image use case.

use std::sync::Arc;

use ehr_domain::{RequestOutcome, Severity};

use crate::feedback::FeedbackCoordinator;
use crate::ports::{ClinicalService, ImageUpload};

/// Overlay text while an image is being enhanced.
pub const ENHANCE_LOADING_MESSAGE: &str = "Enhancing image...";

/// Toast text after a successful enhancement.
pub const ENHANCE_SUCCESS_MESSAGE: &str = "Image enhanced successfully";

/// Use case for uploading an image to the enhancement endpoint.
///
/// Shows the loading overlay for the duration of the request, clears it on
/// every exit path, and reports the result with a toast.
pub struct EnhanceImage<S: ClinicalService + ?Sized> {
    service: Arc<S>,
    feedback: FeedbackCoordinator,
}

impl<S: ClinicalService + ?Sized> EnhanceImage<S> {
    /// Creates a new `EnhanceImage` use case.
    #[must_use]
    pub const fn new(service: Arc<S>, feedback: FeedbackCoordinator) -> Self {
        Self { service, feedback }
    }

    /// Uploads the image and returns the settled outcome.
    ///
    /// Failures are not raised: they come back as
    /// [`RequestOutcome::Failure`] after an error toast has been shown.
    pub async fn execute(&self, upload: ImageUpload) -> RequestOutcome {
        tracing::info!(file = %upload.file_name, size = upload.bytes.len(), "Enhancing image");

        let result = self
            .feedback
            .with_loading(ENHANCE_LOADING_MESSAGE, self.service.enhance_image(upload))
            .await;

        match &result {
            Ok(_) => {
                self.feedback.notify(ENHANCE_SUCCESS_MESSAGE, Severity::Success);
            }
            Err(e) => {
                tracing::error!(error = %e, status = ?e.status(), "Image enhancement failed");
                self.feedback.notify(e.message(), Severity::Error);
            }
        }
        RequestOutcome::from(result)
    }
}
