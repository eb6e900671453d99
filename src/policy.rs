use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};
use std::thread;
use std::time::Duration;

use tracing::{debug, warn};

use crate::cancel::CancelHandle;
use crate::classify::{Classify, FailureKind};
use crate::context::RetryContext;
use crate::error::ExhaustedRetryError;
use crate::strategy::{BackOffOutcome, RetryPolicy};

pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
pub const DEFAULT_BACK_OFF_PERIOD: Duration = Duration::from_millis(1000);

#[derive(Debug)]
pub struct FixedDelayPolicy {
    // The tunables are independent atomic cells. A reader racing a
    // reconfigure may observe an old value of one and a new value of the
    // other; each read is still a whole value.
    max_attempts: AtomicU32,
    back_off_ms: AtomicU64,
    retryable_kinds: Vec<FailureKind>,
}

impl FixedDelayPolicy {
    pub fn new(max_attempts: u32, back_off: Duration) -> Self {
        Self::with_retryable(max_attempts, back_off, vec![FailureKind::Any])
    }

    // An empty kind list matches nothing: once a failure is registered,
    // no retry is permitted.
    pub fn with_retryable(
        max_attempts: u32,
        back_off: Duration,
        retryable_kinds: Vec<FailureKind>,
    ) -> Self {
        Self {
            max_attempts: AtomicU32::new(max_attempts),
            back_off_ms: AtomicU64::new(millis(back_off)),
            retryable_kinds,
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts.load(Ordering::Relaxed)
    }

    pub fn set_max_attempts(&self, max_attempts: u32) {
        self.max_attempts.store(max_attempts, Ordering::Relaxed);
    }

    pub fn back_off_period(&self) -> Duration {
        Duration::from_millis(self.back_off_ms.load(Ordering::Relaxed))
    }

    pub fn set_back_off_period(&self, period: Duration) {
        self.back_off_ms.store(millis(period), Ordering::Relaxed);
    }

    pub fn retryable_kinds(&self) -> &[FailureKind] {
        &self.retryable_kinds
    }

    fn retry_for(&self, failure: &impl Classify) -> bool {
        let kind = failure.kind();
        self.retryable_kinds
            .iter()
            .any(|retryable| retryable.subsumes(kind))
    }
}

impl Default for FixedDelayPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS, DEFAULT_BACK_OFF_PERIOD)
    }
}

impl<E: Classify> RetryPolicy<E> for FixedDelayPolicy {
    fn should_retry(&self, context: &RetryContext<E>) -> bool {
        let permitted = match context.last_failure() {
            None => true,
            Some(failure) => self.retry_for(failure),
        };
        // The attempt ceiling counts the initial attempt, not only retries.
        permitted && context.retry_count() < self.max_attempts()
    }

    fn on_failure(&self, context: &mut RetryContext<E>, failure: E) {
        let kind = failure.kind();
        context.register_failure(failure);
        debug!(
            retry_count = context.retry_count(),
            kind = kind.as_str(),
            "registered failure"
        );
    }

    fn back_off(
        &self,
        _context: &RetryContext<E>,
        cancel: Option<&CancelHandle>,
    ) -> BackOffOutcome {
        let period = self.back_off_period();
        debug!(backoff_ms = period.as_millis(), "backing off");

        match cancel {
            Some(handle) => {
                if handle.wait_timeout(period) {
                    BackOffOutcome::Cancelled
                } else {
                    BackOffOutcome::Completed
                }
            }
            None => {
                if !period.is_zero() {
                    thread::sleep(period);
                }
                BackOffOutcome::Completed
            }
        }
    }

    fn back_off_async(
        &self,
        _context: &RetryContext<E>,
        cancel: Option<&CancelHandle>,
    ) -> impl Future<Output = BackOffOutcome> + Send {
        let period = self.back_off_period();
        debug!(backoff_ms = period.as_millis(), "backing off");

        async move {
            match cancel {
                Some(handle) => {
                    if handle.is_cancelled() {
                        return BackOffOutcome::Cancelled;
                    }
                    tokio::select! {
                        _ = tokio::time::sleep(period) => BackOffOutcome::Completed,
                        _ = handle.cancelled() => BackOffOutcome::Cancelled,
                    }
                }
                None => {
                    tokio::time::sleep(period).await;
                    BackOffOutcome::Completed
                }
            }
        }
    }

    fn on_exhausted<T>(&self, context: RetryContext<E>) -> Result<T, ExhaustedRetryError<E>> {
        warn!(
            retry_count = context.retry_count(),
            "retries exhausted, no recovery path"
        );
        Err(ExhaustedRetryError::new(context.into_last_failure()))
    }
}

fn millis(period: Duration) -> u64 {
    u64::try_from(period.as_millis()).unwrap_or(u64::MAX)
}
