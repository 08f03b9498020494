//! Patient records from the read-only sample data resource.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single patient record.
///
/// Records are opaque JSON objects; the client only displays them and
/// forwards them to note generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatientRecord(Value);

impl PatientRecord {
    /// Returns a top-level field, if the record is an object.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }
}
