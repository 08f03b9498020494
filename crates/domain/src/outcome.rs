//! Settled result of a transport operation.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Outcome of a single request, consumed once by its caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RequestOutcome {
    /// The service answered with a decoded JSON payload.
    Success {
        /// Response body, exactly as decoded.
        payload: Value,
    },

    /// The request failed; `reason` is the user-facing message.
    Failure {
        /// Failure message.
        reason: String,
    },
}

impl RequestOutcome {
    /// Creates a success outcome.
    #[must_use]
    pub const fn success(payload: Value) -> Self {
        Self::Success { payload }
    }

    /// Creates a failure outcome.
    #[must_use]
    pub fn failure(reason: impl Into<String>) -> Self {
        Self::Failure {
            reason: reason.into(),
        }
    }

    /// Returns true for a success outcome.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Returns the payload of a success outcome.
    #[must_use]
    pub const fn payload(&self) -> Option<&Value> {
        match self {
            Self::Success { payload } => Some(payload),
            Self::Failure { .. } => None,
        }
    }

    /// Returns the reason of a failure outcome.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { reason } => Some(reason),
        }
    }
}

impl<E: std::fmt::Display> From<Result<Value, E>> for RequestOutcome {
    fn from(result: Result<Value, E>) -> Self {
        match result {
            Ok(payload) => Self::success(payload),
            Err(e) => Self::failure(e.to_string()),
        }
    }
}
