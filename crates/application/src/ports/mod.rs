//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the client core and the outside
//! world. Adapters in the infrastructure layer implement them.

mod clinical_service;
mod clock;
mod preference_store;

pub use clinical_service::{ClinicalService, ImageUpload};
pub use clock::Clock;
pub use preference_store::PreferenceStore;
