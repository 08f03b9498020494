//! The feedback coordinator.

use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

use ehr_domain::{ApiStatus, Severity, ThemePreference, ToastEntry, ToastId};
use parking_lot::Mutex;
use tokio::sync::broadcast;
use tokio::task::JoinSet;
use tokio::time::MissedTickBehavior;

use super::FeedbackTimings;
use super::scheduler::ScheduledTask;
use super::state::{UiState, UiUpdate};
use crate::ports::{ClinicalService, Clock, PreferenceStore};

/// Overlay text used when the caller has nothing more specific to say.
pub const DEFAULT_LOADING_MESSAGE: &str = "Processing...";

const UPDATE_CHANNEL_CAPACITY: usize = 256;

struct Inner {
    state: Mutex<UiState>,
    toast_timers: Mutex<HashMap<ToastId, ScheduledTask>>,
    service: Arc<dyn ClinicalService>,
    preferences: Arc<dyn PreferenceStore>,
    clock: Arc<dyn Clock>,
    timings: FeedbackTimings,
    updates: broadcast::Sender<UiUpdate>,
    // One toggle at a time, so the last write is the theme on screen.
    theme_toggle: tokio::sync::Mutex<()>,
}

impl Inner {
    fn publish(&self, update: UiUpdate) {
        // Having no renderer attached is not an error.
        let _ = self.updates.send(update);
    }

    fn fade_toast(&self, id: ToastId) {
        if self.state.lock().mark_fading(id) {
            self.publish(UiUpdate::ToastFading { id });
        }
    }

    fn expire_toast(&self, id: ToastId) {
        if self.state.lock().remove_toast(id) {
            self.publish(UiUpdate::ToastRemoved { id });
        }
        if let Some(task) = self.toast_timers.lock().remove(&id) {
            task.detach();
        }
    }
}

/// Owns the transient UI state and drives it from outcomes and timers.
///
/// Construct one per application session and share it by cloning; clones
/// refer to the same state. Methods that schedule timers (`notify`,
/// `start_status_polling`, `toggle_theme`) must run inside a Tokio runtime.
#[derive(Clone)]
pub struct FeedbackCoordinator {
    inner: Arc<Inner>,
}

impl fmt::Debug for FeedbackCoordinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FeedbackCoordinator")
            .field("state", &*self.inner.state.lock())
            .field("timings", &self.inner.timings)
            .finish_non_exhaustive()
    }
}

impl FeedbackCoordinator {
    /// Creates a coordinator with default UI state.
    #[must_use]
    pub fn new(
        service: Arc<dyn ClinicalService>,
        preferences: Arc<dyn PreferenceStore>,
        clock: Arc<dyn Clock>,
        timings: FeedbackTimings,
    ) -> Self {
        let (updates, _) = broadcast::channel(UPDATE_CHANNEL_CAPACITY);
        Self {
            inner: Arc::new(Inner {
                state: Mutex::new(UiState::default()),
                toast_timers: Mutex::new(HashMap::new()),
                service,
                preferences,
                clock,
                timings,
                updates,
                theme_toggle: tokio::sync::Mutex::new(()),
            }),
        }
    }

    /// Subscribes to UI state transitions.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<UiUpdate> {
        self.inner.updates.subscribe()
    }

    /// Returns a copy of the current UI state.
    #[must_use]
    pub fn snapshot(&self) -> UiState {
        self.inner.state.lock().clone()
    }

    /// Returns the configured timer durations.
    #[must_use]
    pub fn timings(&self) -> FeedbackTimings {
        self.inner.timings
    }

    // --- Toasts ---

    /// Shows a toast.
    ///
    /// The toast is on the stack when this returns. It starts fading after
    /// the display duration and is removed once the fade completes. Toasts
    /// never coalesce; each has its own timer.
    pub fn notify(&self, message: impl Into<String>, severity: Severity) -> ToastId {
        let toast = ToastEntry::new(message, severity, self.inner.clock.now());
        let id = toast.id;
        tracing::debug!(%id, %severity, message = %toast.message, "Showing toast");

        self.inner.state.lock().push_toast(toast.clone());
        self.inner.publish(UiUpdate::ToastShown { toast });

        let weak = Arc::downgrade(&self.inner);
        let FeedbackTimings {
            toast_display,
            toast_fade,
            ..
        } = self.inner.timings;

        // Held across the spawn so the task cannot deregister before it is registered.
        let mut timers = self.inner.toast_timers.lock();
        let task = ScheduledTask::spawn(async move {
            tokio::time::sleep(toast_display).await;
            if let Some(inner) = weak.upgrade() {
                inner.fade_toast(id);
            }
            tokio::time::sleep(toast_fade).await;
            if let Some(inner) = weak.upgrade() {
                inner.expire_toast(id);
            }
        });
        timers.insert(id, task);
        id
    }

    /// Removes a toast before its timer runs out.
    ///
    /// Returns false if the toast was already gone.
    pub fn dismiss_toast(&self, id: ToastId) -> bool {
        if let Some(task) = self.inner.toast_timers.lock().remove(&id) {
            task.cancel();
        }
        let removed = self.inner.state.lock().remove_toast(id);
        if removed {
            self.inner.publish(UiUpdate::ToastRemoved { id });
        }
        removed
    }

    /// Number of toasts whose expiry is still scheduled.
    #[must_use]
    pub fn pending_toast_timers(&self) -> usize {
        self.inner.toast_timers.lock().len()
    }

    /// Cancels every pending toast timer.
    ///
    /// Toasts already on the stack stay there. Call on teardown so no timer
    /// outlives the session.
    pub fn shutdown(&self) {
        let cancelled = std::mem::take(&mut *self.inner.toast_timers.lock());
        tracing::debug!(count = cancelled.len(), "Cancelling pending toast timers");
        for task in cancelled.values() {
            task.cancel();
        }
    }

    // --- Loading overlay ---

    /// Shows the loading overlay.
    ///
    /// If one is already shown its message is replaced; there is never more
    /// than one. The overlay has no timeout: every call must be paired with
    /// [`end_loading`](Self::end_loading) on every exit path. Prefer
    /// [`loading`](Self::loading) or [`with_loading`](Self::with_loading).
    pub fn begin_loading(&self, message: impl Into<String>) {
        let message = message.into();
        if self.inner.state.lock().show_overlay(message.clone()) {
            tracing::debug!(%message, "Loading overlay already shown, replacing message");
        }
        self.inner.publish(UiUpdate::OverlayShown { message });
    }

    /// Removes the loading overlay. No-op if none is shown.
    pub fn end_loading(&self) {
        if self.inner.state.lock().hide_overlay() {
            self.inner.publish(UiUpdate::OverlayHidden);
        }
    }

    /// Shows the overlay until the returned guard is dropped.
    #[must_use = "the overlay is removed as soon as the guard is dropped"]
    pub fn loading(&self, message: impl Into<String>) -> LoadingGuard {
        self.begin_loading(message);
        LoadingGuard {
            coordinator: self.clone(),
        }
    }

    /// Runs `future` with the overlay shown.
    ///
    /// The overlay is removed when the future completes, and also if this
    /// future is dropped before completing.
    pub async fn with_loading<F, T>(&self, message: impl Into<String>, future: F) -> T
    where
        F: Future<Output = T>,
    {
        let _guard = self.loading(message);
        future.await
    }

    // --- API status ---

    /// Runs one health poll and updates the badge.
    ///
    /// Never fails: an unreachable service is reported as offline. The badge
    /// shows whichever poll completed last.
    pub async fn poll_status(&self) -> ApiStatus {
        let report = self.inner.service.check_health().await;
        let status = report.api_status();
        if status == ApiStatus::Offline {
            tracing::warn!(
                status = %report.status,
                message = report.reason().unwrap_or(""),
                "Remote service is offline"
            );
        }

        let changed = self.inner.state.lock().set_api_status(status);
        if changed {
            tracing::info!(?status, "API status changed");
            self.inner.publish(UiUpdate::ApiStatusChanged { status });
        }
        status
    }

    /// Starts the periodic health poller.
    ///
    /// Polls once immediately, then every poll interval. Each tick's poll
    /// runs on its own, so a slow poll does not delay the next one. The
    /// poller runs until the returned task is cancelled or dropped.
    #[must_use = "dropping the handle stops polling"]
    pub fn start_status_polling(&self) -> ScheduledTask {
        let coordinator = self.clone();
        let period = self.inner.timings.poll_interval;
        tracing::info!(interval = ?period, "Starting API status polling");

        ScheduledTask::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            let mut in_flight = JoinSet::new();
            loop {
                ticker.tick().await;
                while in_flight.try_join_next().is_some() {}
                let coordinator = coordinator.clone();
                in_flight.spawn(async move {
                    coordinator.poll_status().await;
                });
            }
        })
    }

    // --- Theme ---

    /// Applies the persisted theme, or the default if none is stored.
    ///
    /// Meant to run once at startup. Emits no toast.
    pub async fn init_theme(&self) -> ThemePreference {
        let theme = match self
            .inner
            .preferences
            .get(ThemePreference::STORAGE_KEY)
            .await
        {
            Ok(Some(stored)) => stored.parse::<ThemePreference>().unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Ignoring stored theme");
                ThemePreference::default()
            }),
            Ok(None) => ThemePreference::default(),
            Err(e) => {
                tracing::warn!(error = %e, "Could not read theme preference");
                ThemePreference::default()
            }
        };

        self.inner.state.lock().apply_theme(theme);
        self.inner.publish(UiUpdate::ThemeApplied { theme });
        tracing::debug!(%theme, "Theme initialised");
        theme
    }

    /// Flips the theme, persists it, and announces the new mode.
    ///
    /// The display flips even if persisting fails. Overlapping toggles run
    /// one after another, so the stored value always ends up matching the
    /// displayed one.
    pub async fn toggle_theme(&self) -> ThemePreference {
        let _serialized = self.inner.theme_toggle.lock().await;
        let theme = {
            let mut state = self.inner.state.lock();
            let theme = state.theme.toggled();
            state.apply_theme(theme);
            theme
        };
        self.inner.publish(UiUpdate::ThemeApplied { theme });

        if let Err(e) = self
            .inner
            .preferences
            .set(ThemePreference::STORAGE_KEY, theme.as_str())
            .await
        {
            tracing::warn!(error = %e, %theme, "Could not persist theme preference");
        }

        self.notify(format!("Switched to {}", theme.mode_label()), Severity::Info);
        theme
    }

    // --- Sidebar ---

    /// Opens or closes the navigation sidebar. Returns the new state.
    pub fn toggle_sidebar(&self) -> bool {
        let open = self.inner.state.lock().toggle_sidebar();
        self.inner.publish(UiUpdate::SidebarChanged { open });
        open
    }

    /// Closes the sidebar in response to an interaction outside it.
    pub fn dismiss_sidebar(&self) {
        if self.inner.state.lock().close_sidebar() {
            self.inner.publish(UiUpdate::SidebarChanged { open: false });
        }
    }
}

/// Removes the loading overlay when dropped.
#[derive(Debug)]
pub struct LoadingGuard {
    coordinator: FeedbackCoordinator,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.coordinator.end_loading();
    }
}
