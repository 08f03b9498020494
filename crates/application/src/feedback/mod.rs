//! Feedback coordination
//!
//! Turns request outcomes and timers into time-bounded UI state: the toast
//! stack, the loading overlay, the API status badge, the theme, and the
//! navigation sidebar. All of it lives in one [`UiState`] owned by the
//! [`FeedbackCoordinator`]; renderers observe it through [`UiUpdate`]s.

mod coordinator;
mod scheduler;
mod state;

use std::time::Duration;

pub use coordinator::{DEFAULT_LOADING_MESSAGE, FeedbackCoordinator, LoadingGuard};
pub use scheduler::ScheduledTask;
pub use state::{LoadingOverlay, ThemeIcon, ThemeToggle, UiState, UiUpdate};

/// Default time a toast stays fully visible.
pub const DEFAULT_TOAST_DISPLAY: Duration = Duration::from_millis(4000);

/// Default length of the toast fade-out.
pub const DEFAULT_TOAST_FADE: Duration = Duration::from_millis(300);

/// Default health poll period.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(30_000);

/// Timer durations used by the coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackTimings {
    /// How long a toast is shown before fading.
    pub toast_display: Duration,
    /// How long the fade lasts before removal.
    pub toast_fade: Duration,
    /// Health poll period.
    pub poll_interval: Duration,
}

impl FeedbackTimings {
    /// Builds timings from millisecond values.
    ///
    /// The poll interval is clamped to at least 1 ms.
    #[must_use]
    pub fn from_millis(toast_display_ms: u64, toast_fade_ms: u64, poll_interval_ms: u64) -> Self {
        Self {
            toast_display: Duration::from_millis(toast_display_ms),
            toast_fade: Duration::from_millis(toast_fade_ms),
            poll_interval: Duration::from_millis(poll_interval_ms.max(1)),
        }
    }

    /// Total lifetime of a toast, display plus fade.
    #[must_use]
    pub fn toast_lifetime(&self) -> Duration {
        self.toast_display + self.toast_fade
    }
}

impl Default for FeedbackTimings {
    fn default() -> Self {
        Self {
            toast_display: DEFAULT_TOAST_DISPLAY,
            toast_fade: DEFAULT_TOAST_FADE,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}
