//! EHR Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer, plus client configuration.

pub mod adapters;
pub mod config;
pub mod persistence;
pub mod serialization;

pub use adapters::{
    ClientSetupError, RecordSource, RecordSourceError, ReqwestClinicalClient, SystemClock,
};
pub use self::config::{ClientConfig, ConfigError};
pub use persistence::{FilePreferenceStore, MemoryPreferenceStore};
pub use serialization::{SerializationError, from_json_bytes, to_json_stable_bytes};
