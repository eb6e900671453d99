use crate::cancel::CancelHandle;
use crate::context::RetryContext;
use crate::error::ExhaustedRetryError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackOffOutcome {
    Completed,
    Cancelled,
}

pub trait RetryPolicy<E> {
    fn should_retry(&self, context: &RetryContext<E>) -> bool;

    // Seam for policies that add side effects (metrics, logging) on
    // registration; the context contract stays untouched.
    fn on_failure(&self, context: &mut RetryContext<E>, failure: E) {
        context.register_failure(failure);
    }

    fn back_off(&self, context: &RetryContext<E>, cancel: Option<&CancelHandle>) -> BackOffOutcome;

    fn back_off_async(
        &self,
        context: &RetryContext<E>,
        cancel: Option<&CancelHandle>,
    ) -> impl Future<Output = BackOffOutcome> + Send;

    // Terminal. A policy with a recovery path may return a fallback value
    // instead; the base behavior always errs with the last failure as cause.
    fn on_exhausted<T>(&self, context: RetryContext<E>) -> Result<T, ExhaustedRetryError<E>> {
        Err(ExhaustedRetryError::new(context.into_last_failure()))
    }
}
