//! Generic slice helpers.

use std::fmt::Display;

/// Elements present in exactly one of `a` and `b`.
///
/// Entries unique to `a` come first, then those unique to `b`; each keeps
/// its original order.
pub fn slice_difference<T: PartialEq + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    a.iter()
        .filter(|x| !b.contains(x))
        .chain(b.iter().filter(|x| !a.contains(x)))
        .cloned()
        .collect()
}

/// Copy `items` into batches of at most `size` elements.
///
/// A `size` of zero, or one covering the whole slice, yields a single
/// batch. The batches own their elements; editing them leaves `items` alone.
pub fn batch<T: Clone>(items: &[T], size: usize) -> Vec<Vec<T>> {
    if items.is_empty() {
        return Vec::new();
    }
    let size = if size == 0 || size > items.len() {
        items.len()
    } else {
        size
    };
    items.chunks(size).map(<[T]>::to_vec).collect()
}

/// Sort by each element's `Display` rendering.
pub fn sort_strings<T: Display + Clone>(items: &[T]) -> Vec<T> {
    let mut sorted = items.to_vec();
    sorted.sort_by_cached_key(ToString::to_string);
    sorted
}
