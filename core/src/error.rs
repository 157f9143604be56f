use std::any::Any;
use thiserror::Error;

/// A guard that failed instead of answering.
///
/// Faults never reach the pipeline runner: the guard resolver and the
/// result combinator reclassify every fault as a denial.
#[derive(Error, Debug)]
pub enum GuardFault {
    #[error("guard `{guard}` panicked: {message}")]
    Panicked { guard: &'static str, message: String },
    #[error("guard rejected: {0}")]
    Rejected(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GuardFault {
    pub fn rejected(reason: impl Into<String>) -> Self {
        GuardFault::Rejected(reason.into())
    }

    /// Build a fault from a caught panic payload.
    pub(crate) fn from_panic(guard: &'static str, payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "non-string panic payload".to_string()
        };
        GuardFault::Panicked { guard, message }
    }
}
