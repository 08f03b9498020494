//! EHR GenAI Client - Main Entry Point
//!
//! Wires the HTTP client, preference storage and feedback coordinator
//! together, then runs until interrupted. UI transitions are written to the
//! log so the client can be exercised without a front end.

mod render;

use std::sync::Arc;

use ehr_application::{ClinicalService, FeedbackCoordinator, PreferenceStore};
use ehr_infrastructure::{
    ClientConfig, FilePreferenceStore, MemoryPreferenceStore, ReqwestClinicalClient, SystemClock,
};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ClientConfig::from_env()?;
    let service = Arc::new(ReqwestClinicalClient::new(
        config.base_url()?,
        config.record_source()?,
    )?);
    tracing::info!(
        api = %service.base_url(),
        records = %config.records_location,
        "Starting EHR client"
    );

    let preferences: Arc<dyn PreferenceStore> = match config.preferences_path() {
        Some(path) => {
            tracing::debug!(path = %path.display(), "Using preferences file");
            Arc::new(FilePreferenceStore::new(path))
        }
        None => {
            tracing::warn!("No config directory available; preferences will not persist");
            Arc::new(MemoryPreferenceStore::new())
        }
    };

    let feedback = FeedbackCoordinator::new(
        service.clone(),
        preferences,
        Arc::new(SystemClock::new()),
        config.timings(),
    );

    let renderer = tokio::spawn(render::run(feedback.subscribe()));

    feedback.init_theme().await;
    let poller = feedback.start_status_polling();

    let records = service.load_patient_records().await;
    tracing::info!(count = records.len(), "Patient records ready");

    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutting down");

    poller.cancel();
    feedback.shutdown();
    renderer.abort();

    Ok(())
}
