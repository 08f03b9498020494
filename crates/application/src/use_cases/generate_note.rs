//! Generate clinical note use case.

use std::sync::Arc;

use ehr_domain::{RequestOutcome, Severity};
use serde_json::Value;

use crate::feedback::FeedbackCoordinator;
use crate::ports::ClinicalService;

/// Overlay text while a note is being generated.
pub const NOTE_LOADING_MESSAGE: &str = "Generating clinical note...";

/// Toast text after a note is generated.
pub const NOTE_SUCCESS_MESSAGE: &str = "Clinical note generated";

/// Use case for generating a clinical note with coding annotations.
pub struct GenerateNote<S: ClinicalService + ?Sized> {
    service: Arc<S>,
    feedback: FeedbackCoordinator,
}

impl<S: ClinicalService + ?Sized> GenerateNote<S> {
    /// Creates a new `GenerateNote` use case.
    #[must_use]
    pub const fn new(service: Arc<S>, feedback: FeedbackCoordinator) -> Self {
        Self { service, feedback }
    }

    /// Sends `patient_data` for note generation and returns the outcome.
    pub async fn execute(&self, patient_data: &Value) -> RequestOutcome {
        let loading = self.feedback.loading(NOTE_LOADING_MESSAGE);
        let result = self.service.generate_note(patient_data).await;
        drop(loading);

        match &result {
            Ok(_) => {
                self.feedback.notify(NOTE_SUCCESS_MESSAGE, Severity::Success);
            }
            Err(e) => {
                tracing::error!(error = %e, status = ?e.status(), "Note generation failed");
                self.feedback.notify(e.message(), Severity::Error);
            }
        }
        RequestOutcome::from(result)
    }
}
