//! End-to-end tests: the feedback coordinator driving the real HTTP client.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod common;

use std::path::PathBuf;
use std::sync::Arc;

use axum::http::StatusCode;
use ehr_application::{
    EnhanceImage, FeedbackCoordinator, FeedbackTimings, GenerateNote, ImageUpload,
};
use ehr_domain::{ApiStatus, RequestOutcome, Severity, ThemePreference};
use ehr_infrastructure::{
    FilePreferenceStore, MemoryPreferenceStore, RecordSource, ReqwestClinicalClient, SystemClock,
};
use serde_json::json;
use tempfile::tempdir;
use url::Url;

use common::{echo_service, failing_service, spawn_service};

fn wire(base: Url) -> (Arc<ReqwestClinicalClient>, FeedbackCoordinator) {
    let service = Arc::new(
        ReqwestClinicalClient::new(base, RecordSource::File(PathBuf::from("none.json"))).unwrap(),
    );
    let feedback = FeedbackCoordinator::new(
        service.clone(),
        Arc::new(MemoryPreferenceStore::new()),
        Arc::new(SystemClock::new()),
        FeedbackTimings::default(),
    );
    (service, feedback)
}

#[tokio::test]
async fn badge_goes_online_for_healthy_service() {
    let (_, feedback) = wire(spawn_service(echo_service()).await);

    assert_eq!(feedback.poll_status().await, ApiStatus::Online);
    assert_eq!(feedback.snapshot().api_status, Some(ApiStatus::Online));
}

#[tokio::test]
async fn badge_goes_offline_for_failing_service() {
    let base = spawn_service(failing_service(StatusCode::INTERNAL_SERVER_ERROR, "{}")).await;
    let (_, feedback) = wire(base);

    assert_eq!(feedback.poll_status().await, ApiStatus::Offline);
    assert_eq!(feedback.snapshot().api_status, Some(ApiStatus::Offline));
}

#[tokio::test]
async fn rejected_upload_ends_with_error_toast_and_no_overlay() {
    let base = spawn_service(failing_service(
        StatusCode::UNPROCESSABLE_ENTITY,
        r#"{"detail":"unsupported format"}"#,
    ))
    .await;
    let (service, feedback) = wire(base);

    let outcome = EnhanceImage::new(service, feedback.clone())
        .execute(ImageUpload::new("scan.tiff", vec![0; 16]))
        .await;

    assert_eq!(outcome, RequestOutcome::failure("unsupported format"));
    let state = feedback.snapshot();
    assert_eq!(state.overlay, None);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].severity, Severity::Error);
    assert_eq!(state.toasts[0].message, "unsupported format");
    feedback.shutdown();
}

#[tokio::test]
async fn generated_note_is_returned_verbatim() {
    let (service, feedback) = wire(spawn_service(echo_service()).await);
    let patient = json!({"patient_id": "P-7", "symptoms": ["cough"]});

    let outcome = GenerateNote::new(service, feedback.clone()).execute(&patient).await;

    assert_eq!(outcome.payload().map(|p| &p["received"]), Some(&patient));
    assert_eq!(feedback.snapshot().overlay, None);
    assert_eq!(feedback.snapshot().toasts[0].severity, Severity::Success);
    feedback.shutdown();
}

#[tokio::test]
async fn theme_survives_a_restart_through_the_file_store() {
    let dir = tempdir().unwrap();
    let prefs = dir.path().join("preferences.json");
    let base = spawn_service(echo_service()).await;

    let session = |base: Url| {
        let service = Arc::new(
            ReqwestClinicalClient::new(base, RecordSource::File(PathBuf::from("none.json")))
                .unwrap(),
        );
        FeedbackCoordinator::new(
            service,
            Arc::new(FilePreferenceStore::new(&prefs)),
            Arc::new(SystemClock::new()),
            FeedbackTimings::default(),
        )
    };

    let first = session(base.clone());
    assert_eq!(first.init_theme().await, ThemePreference::Dark);
    assert_eq!(first.toggle_theme().await, ThemePreference::Light);
    first.shutdown();

    let second = session(base);
    assert_eq!(second.init_theme().await, ThemePreference::Light);
    assert!(second.snapshot().toasts.is_empty());
}
