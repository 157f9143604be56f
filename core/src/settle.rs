//! # Settle: Settled-or-Pending Values
//!
//! `Settle<T>` is "Synchronicity as Data".
//! A value is either already known (`Ready`) or will be known once a future
//! resolves (`Pending`). Code that only ever sees `Ready` values never touches
//! a future, an allocation, or an executor.

use std::fmt;
use std::future::{Future, IntoFuture};
use std::pin::Pin;

/// Type alias for boxed futures produced by guards and continuations.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// A combined guard permission: `true` lets the navigation through.
pub type Verdict = Settle<bool>;

/// A value that is either settled now or pending on a future.
pub enum Settle<T> {
    /// Known synchronously.
    Ready(T),
    /// Known once the future resolves.
    Pending(BoxFuture<'static, T>),
}

impl<T> Settle<T> {
    /// Wrap a future as a pending value.
    pub fn pending<F>(future: F) -> Self
    where
        F: Future<Output = T> + Send + 'static,
    {
        Settle::Pending(Box::pin(future))
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Settle::Ready(_))
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Settle::Pending(_))
    }

    /// Extract the value if it is already settled.
    pub fn into_ready(self) -> Option<T> {
        match self {
            Settle::Ready(value) => Some(value),
            Settle::Pending(_) => None,
        }
    }
}

impl<T: Send + 'static> Settle<T> {
    /// Transform the value, staying synchronous when the value is `Ready`.
    pub fn map<U, F>(self, op: F) -> Settle<U>
    where
        U: Send + 'static,
        F: FnOnce(T) -> U + Send + 'static,
    {
        match self {
            Settle::Ready(value) => Settle::Ready(op(value)),
            Settle::Pending(future) => Settle::pending(async move { op(future.await) }),
        }
    }

    /// Chain a computation that itself may be settled or pending.
    ///
    /// The result is only pending when `self` or the value returned by `op` is.
    pub fn and_then<U, F>(self, op: F) -> Settle<U>
    where
        U: Send + 'static,
        F: FnOnce(T) -> Settle<U> + Send + 'static,
    {
        match self {
            Settle::Ready(value) => op(value),
            Settle::Pending(future) => Settle::pending(async move { op(future.await).await }),
        }
    }
}

impl<T> From<T> for Settle<T> {
    fn from(value: T) -> Self {
        Settle::Ready(value)
    }
}

impl<T: Send + 'static> IntoFuture for Settle<T> {
    type Output = T;
    type IntoFuture = BoxFuture<'static, T>;

    fn into_future(self) -> Self::IntoFuture {
        match self {
            Settle::Ready(value) => Box::pin(std::future::ready(value)),
            Settle::Pending(future) => future,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Settle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Settle::Ready(value) => f.debug_tuple("Ready").field(value).finish(),
            Settle::Pending(_) => f.write_str("Pending(..)"),
        }
    }
}
