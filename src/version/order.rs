//! Ordering for fetched candidate pools
//!
//! The upgrade selector requires its input sorted strictly descending. This
//! comparator provides that order for versions fetched from repository
//! metadata: segments are compared pairwise, numerically where both sides
//! are numeric and lexically otherwise, with missing segments reading as
//! `"0"`.

use std::cmp::Ordering;

use crate::version::classify::tokenize;

/// Compares two version strings segment by segment.
///
/// `"1.10.0"` orders above `"1.9.0"`, and `"1.2"` compares equal to
/// `"1.2.0"`. Qualifier segments fall back to lexical comparison, so
/// `"1.2.3.redhat-00002"` orders above `"1.2.3.redhat-00001"`.
pub fn compare(a: &str, b: &str) -> Ordering {
    let a_segments = tokenize(a);
    let b_segments = tokenize(b);
    let len = a_segments.len().max(b_segments.len());

    for idx in 0..len {
        let a_seg = a_segments.get(idx).copied().unwrap_or("0");
        let b_seg = b_segments.get(idx).copied().unwrap_or("0");

        let ord = match (a_seg.parse::<u64>(), b_seg.parse::<u64>()) {
            (Ok(a_num), Ok(b_num)) => a_num.cmp(&b_num),
            _ => a_seg.cmp(b_seg),
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }

    Ordering::Equal
}
