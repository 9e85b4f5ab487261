//! Composite error: an ordered list of independent failures.

use std::error::Error as StdError;
use std::fmt;
use std::slice;

use super::failure::{Failure, Repr};

/// Independent failures that occurred together.
///
/// Insertion order is preserved and duplicates are kept. A composite is
/// never handed out empty; an empty result collapses to `None` instead.
#[derive(Debug, Clone)]
pub struct MultiError {
    errs: Vec<Failure>,
}

impl MultiError {
    /// Build a composite node, or `None` if there is nothing to hold.
    pub(crate) fn into_failure(errs: Vec<Failure>) -> Option<Failure> {
        if errs.is_empty() {
            return None;
        }
        Some(Failure::from_repr(Repr::Multi(MultiError { errs })))
    }

    pub(crate) fn into_vec(self) -> Vec<Failure> {
        self.errs
    }

    /// The direct components, in insertion order.
    pub fn errors(&self) -> &[Failure] {
        &self.errs
    }

    /// Number of direct components.
    pub fn len(&self) -> usize {
        self.errs.len()
    }

    /// Always false for a composite obtained from a [`Failure`].
    pub fn is_empty(&self) -> bool {
        self.errs.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Failure> {
        self.errs.iter()
    }

    /// True if any component is `target` or wraps it.
    pub fn contains(&self, target: &Failure) -> bool {
        self.errs.iter().any(|e| e.is(target))
    }
}

impl<'a> IntoIterator for &'a MultiError {
    type Item = &'a Failure;
    type IntoIter = slice::Iter<'a, Failure>;

    fn into_iter(self) -> Self::IntoIter {
        self.errs.iter()
    }
}

impl fmt::Display for MultiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.errs.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(err, f)?;
        }
        Ok(())
    }
}

impl StdError for MultiError {}
