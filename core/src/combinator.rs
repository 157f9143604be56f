//! Result combinator: AND-folds verdicts without giving up synchronous execution.
//!
//! The fold stays on the `Ready` fast path until the first `Pending` verdict
//! shows up. From there on the accumulator is a future, and every remaining
//! verdict is joined into it.

use crate::settle::{Settle, Verdict};
use futures_util::FutureExt;
use futures_util::future;
use std::panic::AssertUnwindSafe;

/// AND-combine `verdicts`.
///
/// Returns `Ready` iff every input is `Ready`. An empty input permits.
/// Pending inputs are always driven to completion, even once the accumulator
/// has already settled to `false`; a panicking input counts as `false`.
pub fn all<I>(verdicts: I) -> Verdict
where
    I: IntoIterator,
    I::Item: Into<Verdict>,
{
    verdicts
        .into_iter()
        .fold(Settle::Ready(true), |acc, verdict| and(acc, verdict.into()))
}

/// AND-combine two verdicts.
pub fn and(lhs: Verdict, rhs: Verdict) -> Verdict {
    match (lhs, rhs) {
        (Settle::Ready(a), Settle::Ready(b)) => Settle::Ready(a && b),
        (lhs, rhs) => Settle::pending(async move {
            let (a, b) = future::join(settled(lhs), settled(rhs)).await;
            a && b
        }),
    }
}

async fn settled(verdict: Verdict) -> bool {
    match AssertUnwindSafe(verdict.into_future()).catch_unwind().await {
        Ok(allowed) => allowed,
        Err(_) => {
            tracing::warn!("Verdict panicked while settling, treating as denial");
            false
        }
    }
}
