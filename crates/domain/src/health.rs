//! Health check report and the derived API status.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Status value the remote service reports when healthy.
pub const HEALTHY_STATUS: &str = "ok";

/// Status value substituted when the health check itself fails.
pub const ERROR_STATUS: &str = "error";

/// Body of a health check.
///
/// A failed check is still a valid report: its `status` is `"error"` and
/// `message` describes the failure. Only `status` is required of a service
/// body; anything else it sends, `message` included, lands in `extra`
/// whatever its shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    /// Service-reported status (`"ok"` when healthy).
    pub status: String,

    /// Failure description, set only on locally degraded reports.
    #[serde(skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Any further fields the service includes.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl HealthReport {
    /// Creates a healthy report with no extra fields.
    #[must_use]
    pub fn ok() -> Self {
        Self {
            status: HEALTHY_STATUS.to_string(),
            message: None,
            extra: Map::new(),
        }
    }

    /// Creates a degraded report describing why the check failed.
    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            status: ERROR_STATUS.to_string(),
            message: Some(message.into()),
            extra: Map::new(),
        }
    }

    /// Returns true if the service reported itself healthy.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == HEALTHY_STATUS
    }

    /// Human-readable reason: the local failure message, or a string
    /// `message` sent by the service.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        self.message
            .as_deref()
            .or_else(|| self.extra.get("message").and_then(Value::as_str))
    }

    /// Derives the badge status from this report.
    #[must_use]
    pub fn api_status(&self) -> ApiStatus {
        if self.is_ok() {
            ApiStatus::Online
        } else {
            ApiStatus::Offline
        }
    }
}

/// Reachability of the remote service as shown in the status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiStatus {
    /// Last completed poll reported `"ok"`.
    Online,
    /// Last completed poll failed or reported anything else.
    Offline,
}

impl ApiStatus {
    /// Badge text.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Online => "● Online",
            Self::Offline => "● Offline",
        }
    }

    /// Badge style class.
    #[must_use]
    pub const fn badge_class(self) -> &'static str {
        match self {
            Self::Online => "badge-success",
            Self::Offline => "badge-error",
        }
    }
}

impl From<&HealthReport> for ApiStatus {
    fn from(report: &HealthReport) -> Self {
        report.api_status()
    }
}
