//! EHR Domain - Core client types
//!
//! This crate defines the domain model for the EHR GenAI client.
//! All types here are pure Rust with no I/O dependencies.

pub mod error;
pub mod format;
pub mod health;
pub mod outcome;
pub mod record;
pub mod response;
pub mod settings;
pub mod toast;

pub use error::DomainError;
pub use format::format_timestamp;
pub use health::{ApiStatus, HealthReport};
pub use outcome::RequestOutcome;
pub use record::PatientRecord;
pub use response::{StatusCode, error_detail};
pub use settings::ThemePreference;
pub use toast::{Severity, ToastEntry, ToastId, ToastPhase};
