//! Collatz trajectory generation.
//!
//! The start value is a [`NonZeroU64`], so the "positive integer" precondition
//! is carried by the type rather than checked here. Walking is bounded by a
//! step limit and overflow of `3k + 1` is reported instead of wrapping.

use std::num::NonZeroU64;

use serde::Serialize;

use crate::error::SequenceError;

/// One Collatz step: `k / 2` for even `k`, `3k + 1` otherwise.
/// Returns `None` when `3k + 1` does not fit in a `u64`.
pub fn next_value(k: u64) -> Option<u64> {
    if k % 2 == 0 {
        Some(k / 2)
    } else {
        k.checked_mul(3)?.checked_add(1)
    }
}

/// A complete trajectory `[n, f(n), ..., 1]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Sequence(Vec<u64>);

impl Sequence {
    pub fn start(&self) -> u64 {
        self.0[0]
    }

    pub fn values(&self) -> &[u64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of applications of the step function needed to reach 1.
    pub fn steps(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    /// Largest value visited.
    pub fn peak(&self) -> u64 {
        self.0.iter().copied().max().unwrap_or(0)
    }

    pub fn into_vec(self) -> Vec<u64> {
        self.0
    }
}

/// Generate the trajectory of `start`, stopping once the running value is 1.
///
/// The value 1 is always the last element and the step function is never
/// applied to it, so `collatz_sequence(1, _)` is `[1]`.
pub fn collatz_sequence(start: NonZeroU64, max_steps: usize) -> Result<Sequence, SequenceError> {
    let mut n = start.get();
    let mut values = vec![n];
    while n != 1 {
        if values.len() > max_steps {
            return Err(SequenceError::TooLong { max_steps });
        }
        n = next_value(n).ok_or(SequenceError::Overflow {
            at_step: values.len() - 1,
            value: n,
        })?;
        values.push(n);
    }
    tracing::trace!(start = start.get(), len = values.len(), "generated sequence");
    Ok(Sequence(values))
}
