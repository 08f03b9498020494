//! Cancellable delayed work.

use std::future::Future;

use tokio::task::JoinHandle;

/// A spawned timer-driven task that can be cancelled deterministically.
///
/// Dropping the handle cancels the task; use [`ScheduledTask::detach`] to
/// let it run to completion unobserved.
#[derive(Debug)]
pub struct ScheduledTask {
    handle: Option<JoinHandle<()>>,
}

impl ScheduledTask {
    /// Spawns `future` on the current Tokio runtime.
    ///
    /// # Panics
    /// Panics if called outside a Tokio runtime.
    pub fn spawn<F>(future: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        Self {
            handle: Some(tokio::spawn(future)),
        }
    }

    /// Cancels the task. Has no effect if it already finished.
    pub fn cancel(&self) {
        if let Some(handle) = &self.handle {
            handle.abort();
        }
    }

    /// Releases the handle without cancelling the task.
    pub fn detach(mut self) {
        self.handle.take();
    }
}

impl Drop for ScheduledTask {
    fn drop(&mut self) {
        self.cancel();
    }
}
