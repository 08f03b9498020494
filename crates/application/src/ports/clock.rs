//! Clock port

use chrono::{DateTime, Utc};

/// Source of wall-clock time for toast timestamps.
///
/// Timer scheduling uses the async runtime's clock; this port only stamps
/// creation times, so tests can pin them.
pub trait Clock: Send + Sync {
    /// Returns the current UTC timestamp.
    fn now(&self) -> DateTime<Utc>;
}
