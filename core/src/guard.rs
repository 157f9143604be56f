//! # Guard: View-Model Capability Resolution
//!
//! A view model may expose a `can_deactivate` and/or a `can_activate` guard.
//! Each guard answers with a [`GuardOutcome`]; the resolver turns that answer
//! into a [`Verdict`], the only thing the rest of the engine deals with.
//!
//! Resolution rules:
//! * absent guard => `Ready(true)`
//! * synchronous answer => `Ready(answer)`
//! * synchronous failure or panic => `Ready(false)`
//! * asynchronous answer => `Pending(answer)`, where a rejection or panic settles to `false`

use crate::error::GuardFault;
use crate::settle::{BoxFuture, Settle, Verdict};
use futures_util::FutureExt;
use std::fmt;
use std::future::Future;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

/// Which guard is being asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuardKind {
    CanDeactivate,
    CanActivate,
}

impl GuardKind {
    pub fn name(self) -> &'static str {
        match self {
            GuardKind::CanDeactivate => "can_deactivate",
            GuardKind::CanActivate => "can_activate",
        }
    }

    /// Call the matching guard on `view_model`.
    pub fn invoke(self, view_model: &dyn ViewModel) -> GuardOutcome {
        match self {
            GuardKind::CanDeactivate => view_model.can_deactivate(),
            GuardKind::CanActivate => view_model.can_activate(),
        }
    }
}

impl fmt::Display for GuardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The raw answer of a guard.
pub enum GuardOutcome {
    /// The view model does not implement this guard.
    Absent,
    Sync(bool),
    Async(BoxFuture<'static, Result<bool, GuardFault>>),
    Failed(GuardFault),
}

impl GuardOutcome {
    /// An asynchronous answer that cannot reject.
    pub fn from_future<F>(future: F) -> Self
    where
        F: Future<Output = bool> + Send + 'static,
    {
        GuardOutcome::Async(Box::pin(future.map(Ok::<bool, GuardFault>)))
    }

    /// An asynchronous answer that may reject.
    pub fn try_from_future<F, E>(future: F) -> Self
    where
        F: Future<Output = Result<bool, E>> + Send + 'static,
        E: Into<GuardFault>,
    {
        GuardOutcome::Async(Box::pin(future.map(|res| res.map_err(Into::<GuardFault>::into))))
    }

    /// Settle this answer into a verdict, logging faults against `guard`.
    pub fn into_verdict(self, guard: GuardKind) -> Verdict {
        match self {
            GuardOutcome::Absent => {
                tracing::trace!(guard = %guard, "Guard absent, permitting");
                Settle::Ready(true)
            }
            GuardOutcome::Sync(allowed) => Settle::Ready(allowed),
            GuardOutcome::Failed(fault) => {
                tracing::warn!(guard = %guard, error = %fault, "Guard fault treated as denial");
                Settle::Ready(false)
            }
            GuardOutcome::Async(future) => Settle::pending(async move {
                match AssertUnwindSafe(future).catch_unwind().await {
                    Ok(Ok(allowed)) => allowed,
                    Ok(Err(fault)) => {
                        tracing::warn!(guard = %guard, error = %fault, "Guard rejected, denying");
                        false
                    }
                    Err(payload) => {
                        let fault = GuardFault::from_panic(guard.name(), payload);
                        tracing::warn!(guard = %guard, error = %fault, "Guard panicked, denying");
                        false
                    }
                }
            }),
        }
    }
}

impl From<bool> for GuardOutcome {
    fn from(allowed: bool) -> Self {
        GuardOutcome::Sync(allowed)
    }
}

impl<E: Into<GuardFault>> From<Result<bool, E>> for GuardOutcome {
    fn from(result: Result<bool, E>) -> Self {
        match result {
            Ok(allowed) => GuardOutcome::Sync(allowed),
            Err(e) => GuardOutcome::Failed(e.into()),
        }
    }
}

impl fmt::Debug for GuardOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuardOutcome::Absent => f.write_str("Absent"),
            GuardOutcome::Sync(allowed) => f.debug_tuple("Sync").field(allowed).finish(),
            GuardOutcome::Async(_) => f.write_str("Async(..)"),
            GuardOutcome::Failed(fault) => f.debug_tuple("Failed").field(fault).finish(),
        }
    }
}

/// The guard capability surface of a view model.
///
/// Both guards default to [`GuardOutcome::Absent`], which permits the transition.
pub trait ViewModel: Send + Sync {
    fn can_deactivate(&self) -> GuardOutcome {
        GuardOutcome::Absent
    }

    fn can_activate(&self) -> GuardOutcome {
        GuardOutcome::Absent
    }
}

/// Ask `guard` of `view_model`.
///
/// A panic raised while the guard is being invoked is caught here and becomes a denial.
pub fn resolve(view_model: &dyn ViewModel, guard: GuardKind) -> Verdict {
    let outcome = match panic::catch_unwind(AssertUnwindSafe(|| guard.invoke(view_model))) {
        Ok(outcome) => outcome,
        Err(payload) => GuardOutcome::Failed(GuardFault::from_panic(guard.name(), payload)),
    };
    outcome.into_verdict(guard)
}

type GuardFn = Arc<dyn Fn() -> GuardOutcome + Send + Sync>;

/// A view model whose guards are closures, attached at runtime.
#[derive(Clone, Default)]
pub struct DynamicViewModel {
    can_deactivate: Option<GuardFn>,
    can_activate: Option<GuardFn>,
}

impl DynamicViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_can_deactivate<F, O>(mut self, guard: F) -> Self
    where
        F: Fn() -> O + Send + Sync + 'static,
        O: Into<GuardOutcome>,
    {
        self.can_deactivate = Some(Arc::new(move || guard().into()));
        self
    }

    pub fn with_can_activate<F, O>(mut self, guard: F) -> Self
    where
        F: Fn() -> O + Send + Sync + 'static,
        O: Into<GuardOutcome>,
    {
        self.can_activate = Some(Arc::new(move || guard().into()));
        self
    }
}

impl ViewModel for DynamicViewModel {
    fn can_deactivate(&self) -> GuardOutcome {
        self.can_deactivate
            .as_ref()
            .map_or(GuardOutcome::Absent, |guard| guard())
    }

    fn can_activate(&self) -> GuardOutcome {
        self.can_activate
            .as_ref()
            .map_or(GuardOutcome::Absent, |guard| guard())
    }
}

impl fmt::Debug for DynamicViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicViewModel")
            .field("can_deactivate", &self.can_deactivate.is_some())
            .field("can_activate", &self.can_activate.is_some())
            .finish()
    }
}
