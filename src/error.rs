use thiserror::Error;

#[derive(Debug, Error)]
#[error("retry exhausted after last attempt with no recovery path")]
pub struct ExhaustedRetryError<E> {
    #[source]
    cause: Option<E>,
}

impl<E> ExhaustedRetryError<E> {
    pub fn new(cause: Option<E>) -> Self {
        Self { cause }
    }

    pub fn cause(&self) -> Option<&E> {
        self.cause.as_ref()
    }

    pub fn into_cause(self) -> Option<E> {
        self.cause
    }
}
