//! Persistent client-side state.

mod preference_store;

pub use preference_store::{FilePreferenceStore, MemoryPreferenceStore};
