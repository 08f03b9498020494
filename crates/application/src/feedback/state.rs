//! UI state owned by the feedback coordinator.
//!
//! Every mutator here is synchronous and reports whether anything changed,
//! so the coordinator only publishes real transitions.

use ehr_domain::{ApiStatus, ThemePreference, ToastEntry, ToastId, ToastPhase};
use serde::Serialize;

/// The loading overlay. At most one exists at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadingOverlay {
    /// Text shown under the spinner.
    pub message: String,
}

/// Icon on the theme toggle control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeIcon {
    /// Shown while the light theme is active.
    Sun,
    /// Shown while the dark theme is active.
    Moon,
}

/// Theme toggle control presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeToggle {
    /// Icon.
    pub icon: ThemeIcon,
    /// Label text.
    pub label: &'static str,
}

impl ThemeToggle {
    /// Presentation for the given active theme.
    #[must_use]
    pub const fn for_theme(theme: ThemePreference) -> Self {
        match theme {
            ThemePreference::Dark => Self {
                icon: ThemeIcon::Moon,
                label: ThemePreference::Dark.mode_label(),
            },
            ThemePreference::Light => Self {
                icon: ThemeIcon::Sun,
                label: ThemePreference::Light.mode_label(),
            },
        }
    }
}

/// Snapshot of all transient UI state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UiState {
    /// Visible toasts in insertion order.
    pub toasts: Vec<ToastEntry>,
    /// The loading overlay, if shown.
    pub overlay: Option<LoadingOverlay>,
    /// Result of the most recently completed health poll.
    pub api_status: Option<ApiStatus>,
    /// Active theme (the root display attribute).
    pub theme: ThemePreference,
    /// Theme toggle control presentation.
    pub theme_toggle: ThemeToggle,
    /// Whether the navigation sidebar is open.
    pub sidebar_open: bool,
}

impl Default for UiState {
    fn default() -> Self {
        let theme = ThemePreference::default();
        Self {
            toasts: Vec::new(),
            overlay: None,
            api_status: None,
            theme,
            theme_toggle: ThemeToggle::for_theme(theme),
            sidebar_open: false,
        }
    }
}

impl UiState {
    /// Appends a toast to the end of the stack.
    pub fn push_toast(&mut self, toast: ToastEntry) {
        self.toasts.push(toast);
    }

    /// Starts the fade-out of a toast. Returns false if it is gone.
    pub fn mark_fading(&mut self, id: ToastId) -> bool {
        self.toasts
            .iter_mut()
            .find(|t| t.id == id)
            .is_some_and(|t| {
                t.phase = ToastPhase::FadingOut;
                true
            })
    }

    /// Removes a toast. Returns false if it was already gone.
    pub fn remove_toast(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    /// Shows the overlay, replacing the message of an existing one.
    ///
    /// Returns true if an overlay was already shown.
    pub fn show_overlay(&mut self, message: impl Into<String>) -> bool {
        self.overlay
            .replace(LoadingOverlay {
                message: message.into(),
            })
            .is_some()
    }

    /// Hides the overlay. Returns false if none was shown.
    pub fn hide_overlay(&mut self) -> bool {
        self.overlay.take().is_some()
    }

    /// Records a poll result. Returns true if the badge changed.
    pub fn set_api_status(&mut self, status: ApiStatus) -> bool {
        self.api_status.replace(status) != Some(status)
    }

    /// Applies a theme to the display attribute and the toggle control.
    pub fn apply_theme(&mut self, theme: ThemePreference) {
        self.theme = theme;
        self.theme_toggle = ThemeToggle::for_theme(theme);
    }

    /// Flips the sidebar and returns the new state.
    pub fn toggle_sidebar(&mut self) -> bool {
        self.sidebar_open = !self.sidebar_open;
        self.sidebar_open
    }

    /// Closes the sidebar. Returns true if it was open.
    pub fn close_sidebar(&mut self) -> bool {
        std::mem::replace(&mut self.sidebar_open, false)
    }
}

/// A single UI state transition, published to renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UiUpdate {
    /// A toast was appended to the stack.
    ToastShown {
        /// The new toast.
        toast: ToastEntry,
    },
    /// A toast began fading out.
    ToastFading {
        /// Toast id.
        id: ToastId,
    },
    /// A toast left the stack.
    ToastRemoved {
        /// Toast id.
        id: ToastId,
    },
    /// The loading overlay appeared or changed its message.
    OverlayShown {
        /// Overlay text.
        message: String,
    },
    /// The loading overlay was removed.
    OverlayHidden,
    /// The status badge changed.
    ApiStatusChanged {
        /// New status.
        status: ApiStatus,
    },
    /// A theme was applied.
    ThemeApplied {
        /// Active theme.
        theme: ThemePreference,
    },
    /// The sidebar opened or closed.
    SidebarChanged {
        /// Whether it is open.
        open: bool,
    },
}
