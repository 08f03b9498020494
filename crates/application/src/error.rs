//! Application error types

use thiserror::Error;

/// Failure of an image enhancement or note generation request.
///
/// The `Display` output is the user-facing message and is shown verbatim
/// in the error toast.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RequestError {
    /// The service answered with a non-success status.
    #[error("{message}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Server-supplied `detail`, or the operation's generic message.
        message: String,
    },

    /// The service could not be reached or the exchange broke off.
    #[error("{0}")]
    Transport(String),

    /// The service answered with success but the body was not JSON.
    #[error("{0}")]
    InvalidResponse(String),
}

impl RequestError {
    /// Creates a rejection error.
    #[must_use]
    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            message: message.into(),
        }
    }

    /// Returns the user-facing message.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Rejected { message, .. } => message,
            Self::Transport(message) | Self::InvalidResponse(message) => message,
        }
    }

    /// Returns the HTTP status for rejections.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Errors from the key-value preference store.
#[derive(Debug, Error)]
pub enum PreferenceError {
    /// I/O error reading or writing the store.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stored document could not be (de)serialized.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// No location is available for the store.
    #[error("Preference store unavailable: {0}")]
    Unavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_displays_message_only() {
        let err = RequestError::rejected(422, "unsupported format");
        assert_eq!(err.to_string(), "unsupported format");
        assert_eq!(err.message(), "unsupported format");
        assert_eq!(err.status(), Some(422));
    }

    #[test]
    fn transport_has_no_status() {
        let err = RequestError::Transport("connection refused".to_string());
        assert_eq!(err.status(), None);
        assert_eq!(err.message(), "connection refused");
    }
}
