//! Theme Preference Domain Model
//!
//! The display theme is a two-state machine: `dark` and `light`, flipped
//! only by an explicit user toggle.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    /// Dark ("night") theme, the default.
    #[default]
    Dark,
    /// Light ("day") theme.
    Light,
}

impl ThemePreference {
    /// Key under which the preference is persisted.
    pub const STORAGE_KEY: &'static str = "theme";

    /// Returns the opposite theme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Returns the persisted / attribute value (`"dark"` or `"light"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Returns the user-facing mode name.
    #[must_use]
    pub const fn mode_label(self) -> &'static str {
        match self {
            Self::Dark => "Night Mode",
            Self::Light => "Day Mode",
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(DomainError::InvalidTheme(other.to_string())),
        }
    }
}
