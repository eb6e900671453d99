#[derive(Debug)]
pub struct RetryContext<E> {
    retry_count: u32,
    last_failure: Option<E>,
}

impl<E> RetryContext<E> {
    pub fn new() -> Self {
        Self {
            retry_count: 0,
            last_failure: None,
        }
    }

    // Attempts registered so far, the initial attempt included.
    pub fn retry_count(&self) -> u32 {
        self.retry_count
    }

    pub fn last_failure(&self) -> Option<&E> {
        self.last_failure.as_ref()
    }

    pub fn register_failure(&mut self, failure: E) {
        self.retry_count = self.retry_count.saturating_add(1);
        self.last_failure = Some(failure);
    }

    pub fn into_last_failure(self) -> Option<E> {
        self.last_failure
    }
}

impl<E> Default for RetryContext<E> {
    fn default() -> Self {
        Self::new()
    }
}
