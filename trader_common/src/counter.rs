//! Lock-free monotonically increasing counter.

use std::sync::atomic::{AtomicI64, Ordering};

/// Thread-safe counter handing out positive, increasing values.
///
/// If the value would become zero or negative (after overflow, or when
/// seeded below zero) the counter restarts at 1.
#[derive(Debug, Default)]
pub struct Counter {
    n: AtomicI64,
}

impl Counter {
    pub const fn new() -> Self {
        Self::starting_at(0)
    }

    /// Counter whose next value is `n + 1`.
    pub const fn starting_at(n: i64) -> Self {
        Self {
            n: AtomicI64::new(n),
        }
    }

    /// Increment and return the new value.
    #[inline]
    pub fn increment_and_get(&self) -> i64 {
        let next = self.n.fetch_add(1, Ordering::Relaxed).wrapping_add(1);
        if next <= 0 {
            self.n.store(1, Ordering::Relaxed);
            return 1;
        }
        next
    }
}
