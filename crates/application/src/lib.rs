//! EHR Application - Ports, feedback coordination, and use cases
//!
//! This crate defines the application layer with:
//! - Port traits (interfaces to the remote service, preference storage, time)
//! - The feedback coordinator that owns all transient UI state
//! - Use cases pairing service calls with loading and toast feedback

pub mod error;
pub mod feedback;
pub mod ports;
pub mod use_cases;

#[cfg(test)]
mod testing;

pub use error::{PreferenceError, RequestError};
pub use feedback::{
    DEFAULT_LOADING_MESSAGE, FeedbackCoordinator, FeedbackTimings, LoadingGuard, LoadingOverlay,
    ScheduledTask, ThemeIcon, ThemeToggle, UiState, UiUpdate,
};
pub use ports::{ClinicalService, Clock, ImageUpload, PreferenceStore};
pub use use_cases::{EnhanceImage, GenerateNote};
