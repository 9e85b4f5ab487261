//! Countdown latch: block until a fixed number of completions.

use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};

/// A one-shot barrier released after `count` calls to [`count_down`].
///
/// Once the count reaches zero it stays there; further count-downs are
/// ignored and every waiter returns immediately.
///
/// [`count_down`]: CountdownLatch::count_down
#[derive(Debug)]
pub struct CountdownLatch {
    remaining: Mutex<usize>,
    released: Condvar,
}

impl CountdownLatch {
    /// Latch armed for `count` completions.
    pub fn new(count: usize) -> Self {
        Self {
            remaining: Mutex::new(count),
            released: Condvar::new(),
        }
    }

    /// Record one completion.
    pub fn count_down(&self) {
        let mut remaining = self.remaining.lock();
        if *remaining == 0 {
            return;
        }
        *remaining -= 1;
        if *remaining == 0 {
            self.released.notify_all();
        }
    }

    /// Completions still outstanding.
    pub fn count(&self) -> usize {
        *self.remaining.lock()
    }

    /// Block until the count reaches zero.
    pub fn wait(&self) {
        let mut remaining = self.remaining.lock();
        while *remaining > 0 {
            self.released.wait(&mut remaining);
        }
    }

    /// Block until the count reaches zero or `timeout` elapses.
    ///
    /// Returns `true` if the latch was released.
    pub fn wait_timeout(&self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        let mut remaining = self.remaining.lock();
        while *remaining > 0 {
            if self.released.wait_until(&mut remaining, deadline).timed_out() {
                return *remaining == 0;
            }
        }
        true
    }
}
