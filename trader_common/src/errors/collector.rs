//! Fan-in of failures from a fixed number of concurrent producers.
//!
//! The collector owns a channel with room for exactly one outcome per
//! producer and a [`CountdownLatch`] armed for the same count. A producer
//! sends its outcome and then counts down, so sending never blocks and
//! [`ErrorCollector::collect`] can drain without blocking once the latch
//! opens.
//!
//! # Usage
//!
//! ```rust
//! use std::thread;
//! use trader_common::errors::{ErrorCollector, Failure};
//!
//! let mut collector = ErrorCollector::new(4);
//! for (i, producer) in collector.producers().into_iter().enumerate() {
//!     thread::spawn(move || {
//!         if i % 2 == 0 {
//!             producer.fail(Failure::msg("collected error"));
//!         } else {
//!             producer.succeed();
//!         }
//!     });
//! }
//!
//! let err = collector.collect().expect("two producers failed");
//! assert_eq!(err.as_multi().map(|m| m.len()), Some(2));
//! ```

use std::sync::Arc;
use std::sync::mpsc::{Receiver, SyncSender, sync_channel};

use thiserror::Error;
use tracing::{debug, warn};

use super::append::append_error;
use super::failure::Failure;
use super::latch::CountdownLatch;

/// Errors raised while handing out producers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectorError {
    /// Every producer slot has already been issued.
    #[error("all {capacity} producer slots already issued")]
    Exhausted {
        /// Number of producers the collector was created for.
        capacity: usize,
    },
}

/// Gathers at most one outcome from each of `n` producers.
#[derive(Debug)]
pub struct ErrorCollector {
    sender: SyncSender<Option<Failure>>,
    receiver: Receiver<Option<Failure>>,
    latch: Arc<CountdownLatch>,
    capacity: usize,
    issued: usize,
}

/// Shorthand for [`ErrorCollector::new`].
pub fn collect_errors(producers: usize) -> ErrorCollector {
    ErrorCollector::new(producers)
}

impl ErrorCollector {
    /// Collector for exactly `producers` outcomes.
    pub fn new(producers: usize) -> Self {
        let (sender, receiver) = sync_channel(producers);
        Self {
            sender,
            receiver,
            latch: Arc::new(CountdownLatch::new(producers)),
            capacity: producers,
            issued: 0,
        }
    }

    /// Number of producers this collector waits for.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Producers that have not reported yet, including unissued slots.
    pub fn pending(&self) -> usize {
        self.latch.count()
    }

    /// Issue the next producer handle.
    ///
    /// # Errors
    ///
    /// Returns [`CollectorError::Exhausted`] once `capacity` handles exist.
    pub fn producer(&mut self) -> Result<Producer, CollectorError> {
        if self.issued >= self.capacity {
            return Err(CollectorError::Exhausted {
                capacity: self.capacity,
            });
        }
        self.issued += 1;
        Ok(Producer {
            sender: self.sender.clone(),
            latch: Arc::clone(&self.latch),
            reported: false,
        })
    }

    /// Issue every remaining producer handle.
    pub fn producers(&mut self) -> Vec<Producer> {
        let mut out = Vec::with_capacity(self.capacity - self.issued);
        while let Ok(p) = self.producer() {
            out.push(p);
        }
        out
    }

    /// Wait for every producer, then fold their failures into one.
    ///
    /// Outcomes are appended in the order they arrived, which need not match
    /// the order producers were issued in. Returns `None` when no producer
    /// reported a failure.
    pub fn collect(self) -> Option<Failure> {
        let unissued = self.capacity - self.issued;
        if unissued > 0 {
            // Consuming the collector means these slots can never be filled.
            warn!(
                unissued,
                capacity = self.capacity,
                "collecting with unissued producer slots"
            );
            for _ in 0..unissued {
                self.latch.count_down();
            }
        }

        self.latch.wait();

        let mut received = 0usize;
        let collected = self
            .receiver
            .try_iter()
            .take(self.issued)
            .inspect(|_| received += 1)
            .fold(None, append_error);
        debug!(
            received,
            failed = collected.as_ref().map_or(0, |e| e.as_multi().map_or(1, |m| m.len())),
            "collected producer outcomes"
        );
        collected
    }
}

/// One-shot handle for a single producer.
///
/// Reporting consumes the handle, so each producer contributes exactly once.
/// A handle dropped without reporting (including on panic) counts as
/// "no failure".
#[derive(Debug)]
pub struct Producer {
    sender: SyncSender<Option<Failure>>,
    latch: Arc<CountdownLatch>,
    reported: bool,
}

impl Producer {
    /// Report an outcome: `Some` for a failure, `None` for success.
    pub fn report(mut self, outcome: Option<Failure>) {
        self.finish(outcome);
    }

    /// Report a failure.
    pub fn fail(self, err: Failure) {
        self.report(Some(err));
    }

    /// Report success.
    pub fn succeed(self) {
        self.report(None);
    }

    fn finish(&mut self, outcome: Option<Failure>) {
        if self.reported {
            return;
        }
        self.reported = true;
        if self.sender.try_send(outcome).is_err() {
            warn!("producer outcome dropped: collector queue unavailable");
        }
        self.latch.count_down();
    }
}

impl Drop for Producer {
    fn drop(&mut self) {
        self.finish(None);
    }
}
