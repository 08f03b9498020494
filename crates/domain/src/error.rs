//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during validation or parsing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A stored theme value is neither `dark` nor `light`.
    #[error("invalid theme preference: {0}")]
    InvalidTheme(String),
}
