//! In-memory port implementations for unit tests.

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use ehr_domain::{HealthReport, PatientRecord};
use parking_lot::Mutex;
use serde_json::Value;

use crate::error::{PreferenceError, RequestError};
use crate::ports::{ClinicalService, Clock, ImageUpload, PreferenceStore};

/// Scripted clinical service.
///
/// Health checks pop `(delay, report)` pairs; once the script is empty every
/// check answers `{"status": "ok"}` immediately.
#[derive(Default)]
pub struct FakeService {
    pub health_script: Mutex<VecDeque<(Duration, HealthReport)>>,
    pub health_calls: AtomicUsize,
    pub enhance_result: Mutex<Option<Result<Value, RequestError>>>,
    pub note_result: Mutex<Option<Result<Value, RequestError>>>,
    pub note_delay: Mutex<Duration>,
    pub last_upload: Mutex<Option<ImageUpload>>,
    pub last_note_input: Mutex<Option<Value>>,
}

impl FakeService {
    pub fn script_health(&self, delay: Duration, report: HealthReport) {
        self.health_script.lock().push_back((delay, report));
    }

    pub fn health_calls(&self) -> usize {
        self.health_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ClinicalService for FakeService {
    async fn check_health(&self) -> HealthReport {
        self.health_calls.fetch_add(1, Ordering::SeqCst);
        let next = self.health_script.lock().pop_front();
        match next {
            Some((delay, report)) => {
                tokio::time::sleep(delay).await;
                report
            }
            None => HealthReport::ok(),
        }
    }

    async fn enhance_image(&self, upload: ImageUpload) -> Result<Value, RequestError> {
        *self.last_upload.lock() = Some(upload);
        self.enhance_result
            .lock()
            .take()
            .unwrap_or_else(|| Ok(Value::Null))
    }

    async fn generate_note(&self, patient_data: &Value) -> Result<Value, RequestError> {
        *self.last_note_input.lock() = Some(patient_data.clone());
        let delay = *self.note_delay.lock();
        tokio::time::sleep(delay).await;
        self.note_result.lock().take().unwrap_or_else(|| Ok(Value::Null))
    }

    async fn load_patient_records(&self) -> Vec<PatientRecord> {
        Vec::new()
    }
}

/// Preference store backed by a map; can be switched to fail every call.
///
/// Writes wait for the next scripted delay, if any, before landing.
#[derive(Default)]
pub struct MapStore {
    pub values: Mutex<HashMap<String, String>>,
    pub write_delays: Mutex<VecDeque<Duration>>,
    pub failing: bool,
}

impl MapStore {
    pub fn with(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.values.lock().insert(key.to_string(), value.to_string());
        store
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn delay_writes(&self, delays: impl IntoIterator<Item = Duration>) {
        self.write_delays.lock().extend(delays);
    }

    pub fn value(&self, key: &str) -> Option<String> {
        self.values.lock().get(key).cloned()
    }
}

#[async_trait]
impl PreferenceStore for MapStore {
    async fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        if self.failing {
            return Err(PreferenceError::Unavailable("test store".to_string()));
        }
        Ok(self.values.lock().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        if self.failing {
            return Err(PreferenceError::Unavailable("test store".to_string()));
        }
        let delay = self.write_delays.lock().pop_front();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        self.values.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Clock pinned to a single instant.
pub struct FixedClock(pub DateTime<Utc>);

impl Default for FixedClock {
    fn default() -> Self {
        Self(
            Utc.with_ymd_and_hms(2024, 3, 5, 14, 30, 0)
                .single()
                .unwrap_or_default(),
        )
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
