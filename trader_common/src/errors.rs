//! Error composition.
//!
//! This module contains:
//! - `failure`: the [`Failure`] node (leaf, wrap or composite) and its builder.
//! - `multi`: [`MultiError`], the ordered composite of independent failures.
//! - `append`: [`append_error`], combining two optional failures.
//! - `exclude`: [`exclude_error`], pruning one failure out of a tree.
//! - `collector`: [`ErrorCollector`], fan-in from concurrent producers.
//! - `latch`: [`CountdownLatch`], the barrier used by the collector.
//!
//! Absence of an error is `Option::<Failure>::None` throughout. Failures are
//! immutable; every operation returns a new node or hands back an input node
//! unchanged.

mod append;
mod collector;
mod exclude;
mod failure;
mod latch;
mod multi;

pub use append::append_error;
pub use collector::{CollectorError, ErrorCollector, Producer, collect_errors};
pub use exclude::exclude_error;
pub use failure::{Failure, Shape, WrapBuilder};
pub use latch::CountdownLatch;
pub use multi::MultiError;
