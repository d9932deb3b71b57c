//! Debounce timer
//!
//! Coalesces bursts of calls into one invocation that runs `interval` after
//! the last call. Runs on the ambient tokio runtime; calling [`Debouncer::call`]
//! outside a runtime panics the same way `tokio::spawn` does.

use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tracing::trace;

pub struct Debouncer {
    interval: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl Debouncer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            pending: Mutex::new(None),
        }
    }

    /// Schedule `f` after the interval, cancelling any call still waiting
    pub fn call<F>(&self, f: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let interval = self.interval;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(interval).await;
            f();
        });

        if let Some(previous) = self.pending.lock().replace(handle) {
            if !previous.is_finished() {
                trace!("Debounced call superseded before firing");
            }
            previous.abort();
        }
    }

    /// Cancel the waiting call, returning whether one was still pending
    pub fn cancel(&self) -> bool {
        match self.pending.lock().take() {
            Some(handle) => {
                let was_pending = !handle.is_finished();
                handle.abort();
                was_pending
            },
            None => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
            .lock()
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.get_mut().take() {
            handle.abort();
        }
    }
}

impl std::fmt::Debug for Debouncer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Debouncer")
            .field("interval", &self.interval)
            .field("pending", &self.is_pending())
            .finish()
    }
}
