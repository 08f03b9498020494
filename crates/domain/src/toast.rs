//! Toast notification entries.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a toast in the visible stack.
///
/// UUID v7, so ids sort by creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToastId(Uuid);

impl ToastId {
    /// Generates a fresh id.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Toast severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Neutral information (default).
    #[default]
    Info,
    /// An operation completed.
    Success,
    /// An operation failed.
    Error,
}

impl Severity {
    /// Style class name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    /// Icon shown beside the message.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Info => "info-circle",
            Self::Success => "check-circle",
            Self::Error => "x-circle",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Visual phase of a toast during its lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastPhase {
    /// Fully shown.
    #[default]
    Visible,
    /// Fade-out transition running; removal follows.
    FadingOut,
}

/// A toast in the visible stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastEntry {
    /// Unique id.
    pub id: ToastId,
    /// Message text.
    pub message: String,
    /// Severity.
    pub severity: Severity,
    /// When the toast was created.
    pub created_at: DateTime<Utc>,
    /// Current phase.
    #[serde(default)]
    pub phase: ToastPhase,
}

impl ToastEntry {
    /// Creates a visible toast.
    #[must_use]
    pub fn new(message: impl Into<String>, severity: Severity, created_at: DateTime<Utc>) -> Self {
        Self {
            id: ToastId::new(),
            message: message.into(),
            severity,
            created_at,
            phase: ToastPhase::Visible,
        }
    }

    /// Returns true once the fade-out has started.
    #[must_use]
    pub const fn is_fading(&self) -> bool {
        matches!(self.phase, ToastPhase::FadingOut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_severity_is_info() {
        assert_eq!(Severity::default(), Severity::Info);
    }

    #[test]
    fn severity_serializes_as_style_class() {
        for severity in [Severity::Info, Severity::Success, Severity::Error] {
            assert_eq!(
                serde_json::to_value(severity).ok(),
                Some(serde_json::Value::from(severity.as_str()))
            );
        }
    }

    #[test]
    fn new_toast_is_visible() {
        let toast = ToastEntry::new("Saved", Severity::Success, Utc::now());
        assert_eq!(toast.phase, ToastPhase::Visible);
        assert!(!toast.is_fading());
    }

    #[test]
    fn ids_are_unique() {
        assert_ne!(ToastId::new(), ToastId::new());
    }
}
