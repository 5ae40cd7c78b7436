use std::ops::Range;

use crate::error::{ResolverError, Result};

/// Largest set whose subsets can be enumerated as `u64` masks.
pub const MAX_ENUMERATED: usize = 63;

/// All subset masks of a set of `len` elements, from the empty set upward.
pub(crate) fn subset_masks(len: usize, what: &'static str) -> Result<Range<u64>> {
    if len > MAX_ENUMERATED {
        return Err(ResolverError::EnumerationLimit {
            what,
            count: len,
            limit: MAX_ENUMERATED,
        });
    }
    Ok(0..(1u64 << len))
}

/// Elements of `items` whose bit is set in `mask`.
pub(crate) fn select<T: Copy>(items: &[T], mask: u64) -> Vec<T> {
    items
        .iter()
        .enumerate()
        .filter(|(i, _)| (mask >> i) & 1 == 1)
        .map(|(_, &item)| item)
        .collect()
}
