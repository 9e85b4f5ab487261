//! Combining two optional failures into one.

use std::sync::Arc;

use super::failure::{Failure, Repr};
use super::multi::MultiError;

/// Combine two optional failures.
///
/// - both `None` gives `None`;
/// - if only one is present, that exact node is returned;
/// - otherwise the result is a composite holding the components of
///   `existing` followed by those of `incoming`. Composites on either side
///   are spliced in flat, so nesting never builds up.
///
/// Neither input is modified; other handles to them see no change.
///
/// ```rust
/// use trader_common::errors::{append_error, Failure};
///
/// let e1 = Failure::msg("inconsistent gravity");
/// let e2 = Failure::msg("barely marginal interest in your story");
///
/// let err = append_error(append_error(None, Some(e1.clone())), Some(e2.clone())).unwrap();
/// assert_eq!(err.to_string(), "inconsistent gravity, barely marginal interest in your story");
/// assert!(err.is(&e1) && err.is(&e2));
/// ```
pub fn append_error(existing: Option<Failure>, incoming: Option<Failure>) -> Option<Failure> {
    match (existing, incoming) {
        (None, None) => None,
        (Some(err), None) | (None, Some(err)) => Some(err),
        (Some(existing), Some(incoming)) => {
            let mut errs = components(existing);
            errs.extend(components(incoming));
            MultiError::into_failure(errs)
        }
    }
}

/// The components a node contributes to a composite.
///
/// Non-composites are kept as they are. A uniquely held composite is taken
/// apart without copying; a shared one has its handles cloned so other
/// owners keep seeing the original.
fn components(err: Failure) -> Vec<Failure> {
    if err.as_multi().is_none() {
        return vec![err];
    }
    match Arc::try_unwrap(err.0) {
        Ok(Repr::Multi(multi)) => multi.into_vec(),
        Ok(repr) => vec![Failure::from_repr(repr)],
        Err(shared) => Failure(shared).children().to_vec(),
    }
}
