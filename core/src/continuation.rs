use crate::settle::{Settle, Verdict};

/// The pipeline-supplied pair of callables: `next()` and `next.cancel()`.
///
/// Both methods consume the continuation, so a step can only ever take one
/// branch, once.
pub trait Continuation: Send + 'static {
    type Output: Send + 'static;

    /// Advance the navigation.
    fn proceed(self) -> Settle<Self::Output>;

    /// Abort the navigation.
    fn cancel(self) -> Settle<Self::Output>;
}

/// Invoke `proceed` on a permitting verdict and `cancel` otherwise.
///
/// The continuation runs synchronously when the verdict is `Ready`; the
/// returned value is exactly what the continuation returned.
pub fn settle_with<C: Continuation>(verdict: Verdict, next: C) -> Settle<C::Output> {
    verdict.and_then(move |allowed| {
        if allowed {
            next.proceed()
        } else {
            next.cancel()
        }
    })
}

/// A continuation built from two closures.
pub struct FnContinuation<P, C> {
    proceed: P,
    cancel: C,
}

impl<P, C> FnContinuation<P, C> {
    pub fn new(proceed: P, cancel: C) -> Self {
        Self { proceed, cancel }
    }
}

impl<P, C, T> Continuation for FnContinuation<P, C>
where
    P: FnOnce() -> Settle<T> + Send + 'static,
    C: FnOnce() -> Settle<T> + Send + 'static,
    T: Send + 'static,
{
    type Output = T;

    fn proceed(self) -> Settle<T> {
        (self.proceed)()
    }

    fn cancel(self) -> Settle<T> {
        (self.cancel)()
    }
}
