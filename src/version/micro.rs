//! Micro-upgrade detection
//!
//! A micro upgrade stays within the baseline's minor line: same first two
//! version segments, higher patch or qualifier. These are the upgrades safe
//! enough to substitute into a manifest automatically.

use crate::version::classify::tokenize;

/// Whether two versions belong to the same minor stream.
///
/// The first two tokenized segments must be equal pairwise; a version with
/// fewer than two segments is never same-minor with anything.
///
/// `"1.2.3"` and `"1.2.9"` are same-minor, `"1.2.3"` and `"1.3.0"` are not.
pub fn is_same_minor(a: &str, b: &str) -> bool {
    let a_segments = tokenize(a);
    let b_segments = tokenize(b);
    a_segments.len() >= 2
        && b_segments.len() >= 2
        && a_segments[0] == b_segments[0]
        && a_segments[1] == b_segments[1]
}

/// Finds the highest version in `ladder` that shares the baseline's minor
/// stream.
///
/// `ladder` must be ordered lowest to highest; the last same-minor match in
/// iteration order is returned.
pub fn find_micro_upgrade<'a>(baseline: &str, ladder: &'a [String]) -> Option<&'a str> {
    ladder
        .iter()
        .map(String::as_str)
        .filter(|version| is_same_minor(baseline, version))
        .last()
}
