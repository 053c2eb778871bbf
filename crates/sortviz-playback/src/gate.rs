//! Suspension primitives for the playback loop.
//!
//! Both are cooperative: the loop observes them only at its suspension
//! points, never in the middle of applying an event.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Notify;

/// A pause gate the playback loop blocks on while paused.
///
/// Backed by a single-permit [`Notify`]: a `resume` that lands before the
/// loop starts waiting is kept, so it is never lost.
#[derive(Debug, Default)]
pub struct PauseGate {
    paused: AtomicBool,
    notify: Notify,
}

impl PauseGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::SeqCst)
    }

    /// Close the gate. Returns `false` if it was already closed.
    pub fn pause(&self) -> bool {
        !self.paused.swap(true, Ordering::SeqCst)
    }

    /// Open the gate and wake the waiter. Returns `false` if it was open.
    pub fn resume(&self) -> bool {
        if self.paused.swap(false, Ordering::SeqCst) {
            self.notify.notify_one();
            true
        } else {
            false
        }
    }

    /// Wake the waiter without opening the gate, so it can notice an abort.
    pub fn release(&self) {
        self.notify.notify_one();
    }

    /// Wait until the gate is open or `abort` has fired.
    pub async fn wait(&self, abort: &AbortSignal) {
        while self.is_paused() && !abort.is_aborted() {
            self.notify.notified().await;
        }
    }
}

#[derive(Debug, Default)]
struct AbortInner {
    aborted: AtomicBool,
    notify: Notify,
}

/// One-shot cancellation flag shared between a run and its controller.
#[derive(Debug, Clone, Default)]
pub struct AbortSignal {
    inner: Arc<AbortInner>,
}

impl AbortSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire the signal. Returns `false` if it had already fired.
    pub fn abort(&self) -> bool {
        if self.inner.aborted.swap(true, Ordering::SeqCst) {
            return false;
        }
        self.inner.notify.notify_waiters();
        true
    }

    pub fn is_aborted(&self) -> bool {
        self.inner.aborted.load(Ordering::SeqCst)
    }

    /// Resolve once the signal has fired.
    pub async fn aborted(&self) {
        let notified = self.inner.notify.notified();
        tokio::pin!(notified);
        // Register before checking the flag so a concurrent abort is not missed
        notified.as_mut().enable();
        if self.is_aborted() {
            return;
        }
        notified.await;
    }
}
