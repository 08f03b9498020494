//! Display formatting helpers.

use chrono::{DateTime, TimeZone};

/// Formats a timestamp for display, e.g. `"Mar 5, 2024, 02:30 PM"`.
///
/// Uses the timestamp's own offset; convert to the viewer's zone first.
#[must_use]
pub fn format_timestamp<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    at.format("%b %-d, %Y, %I:%M %p").to_string()
}
