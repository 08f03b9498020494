//! Client configuration.
//!
//! Every setting has a default; any of them can be overridden with an
//! `EHR_`-prefixed environment variable, e.g. `EHR_API_BASE_URL` or
//! `EHR_POLL_INTERVAL_MS`.

use std::path::PathBuf;

use config::{Config, Environment, Source};
use ehr_application::FeedbackTimings;
use serde::Deserialize;
use url::Url;

use crate::adapters::{RecordSource, RecordSourceError};
use crate::persistence::FilePreferenceStore;

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "EHR";

/// Default address of the processing service.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Default location of the sample patient records.
pub const DEFAULT_RECORDS_LOCATION: &str = "data/FINAL_CLINICAL_NOTES.json";

/// Errors loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A source could not be read or a value had the wrong type.
    #[error("invalid configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// The API base URL did not parse.
    #[error("invalid API base URL: {0}")]
    BaseUrl(#[from] url::ParseError),

    /// The records location did not parse.
    #[error("invalid records location: {0}")]
    Records(#[from] RecordSourceError),
}

/// Settings for the client.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the processing service.
    pub api_base_url: String,
    /// Records document: an `http(s)://` URL, `file://` URL, or path.
    pub records_location: String,
    /// Health poll period in milliseconds.
    pub poll_interval_ms: u64,
    /// Toast display time in milliseconds.
    pub toast_display_ms: u64,
    /// Toast fade time in milliseconds.
    pub toast_fade_ms: u64,
    /// Preferences file; the platform config directory when unset.
    pub preferences_path: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        let timings = FeedbackTimings::default();
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            records_location: DEFAULT_RECORDS_LOCATION.to_string(),
            poll_interval_ms: duration_ms(timings.poll_interval),
            toast_display_ms: duration_ms(timings.toast_display),
            toast_fade_ms: duration_ms(timings.toast_fade),
            preferences_path: None,
        }
    }
}

fn duration_ms(duration: std::time::Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

impl ClientConfig {
    /// Loads configuration from `EHR_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
    }

    /// Loads configuration from a single source layered over the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read or holds invalid values.
    pub fn from_source<S>(source: S) -> Result<Self, ConfigError>
    where
        S: Source + Send + Sync + 'static,
    {
        let settings = Config::builder().add_source(source).build()?;
        Ok(settings.try_deserialize()?)
    }

    /// Timer durations for the feedback coordinator.
    #[must_use]
    pub fn timings(&self) -> FeedbackTimings {
        FeedbackTimings::from_millis(
            self.toast_display_ms,
            self.toast_fade_ms,
            self.poll_interval_ms,
        )
    }

    /// Parsed API base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured value is not an absolute URL.
    pub fn base_url(&self) -> Result<Url, ConfigError> {
        Ok(Url::parse(&self.api_base_url)?)
    }

    /// Parsed records location.
    ///
    /// # Errors
    ///
    /// Returns an error if the location is a malformed URL.
    pub fn record_source(&self) -> Result<RecordSource, ConfigError> {
        Ok(self.records_location.parse()?)
    }

    /// Preferences file location, if one can be determined.
    #[must_use]
    pub fn preferences_path(&self) -> Option<PathBuf> {
        self.preferences_path
            .clone()
            .or_else(FilePreferenceStore::default_path)
    }
}
