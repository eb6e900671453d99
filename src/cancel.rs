use std::sync::{Arc, Condvar, Mutex};
use std::time::Duration;

use tokio_util::sync::CancellationToken;

// Blocking waiters park on the condvar, async waiters on the token.
// cancel() fires both; the signal is idempotent and irrevocable.
#[derive(Debug, Clone, Default)]
pub struct CancelHandle {
    inner: Arc<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    cancelled: Mutex<bool>,
    wake: Condvar,
    token: CancellationToken,
}

impl CancelHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        let mut cancelled = self
            .inner
            .cancelled
            .lock()
            .expect("cancel flag mutex poisoned");
        *cancelled = true;
        self.inner.wake.notify_all();
        self.inner.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.token.is_cancelled()
    }

    // Blocks for at most `timeout`; returns true if cancelled first.
    pub fn wait_timeout(&self, timeout: Duration) -> bool {
        let cancelled = self
            .inner
            .cancelled
            .lock()
            .expect("cancel flag mutex poisoned");
        let (cancelled, _) = self
            .inner
            .wake
            .wait_timeout_while(cancelled, timeout, |cancelled| !*cancelled)
            .expect("cancel flag mutex poisoned");
        *cancelled
    }

    pub async fn cancelled(&self) {
        self.inner.token.cancelled().await;
    }
}
