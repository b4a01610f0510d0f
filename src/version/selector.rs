//! Upgrade-ladder selection
//!
//! Given every version of a component newer than the pinned one, reporting
//! all of them would flood the output with micro releases. The selector
//! instead keeps one representative per version family: versions that agree
//! on everything but their last numeric segment (and on their qualifier and
//! segment count) collapse into the highest observed member.

use std::collections::HashSet;

use regex::Regex;

use crate::version::classify::{first_qualifier_segment, numeric_prefix, tokenize};

/// Family identity of one version: its segments, the length of the numeric
/// prefix, and the first qualifier segment.
struct Family<'a> {
    segments: Vec<&'a str>,
    numeric_len: usize,
    qualifier: &'a str,
}

impl<'a> Family<'a> {
    fn of(version: &'a str) -> Self {
        let segments = tokenize(version);
        let numeric_len = numeric_prefix(&segments).len();
        let qualifier = first_qualifier_segment(&segments);
        Self {
            segments,
            numeric_len,
            qualifier,
        }
    }

    /// Whether this version falls outside the representative's family.
    ///
    /// The stable prefix of a family is all numeric segments but the last
    /// one, so two versions differing only in their final numeric segment
    /// stay in the same family. A representative with no numeric segments
    /// has an empty stable prefix; only qualifier and segment-count changes
    /// can then split families.
    fn differs_from(&self, representative: &Family<'_>) -> bool {
        let stable_prefix = representative.numeric_len.saturating_sub(1);
        let prefix_differs = (0..stable_prefix)
            .any(|i| i >= self.numeric_len || self.segments[i] != representative.segments[i]);

        prefix_differs
            || self.qualifier != representative.qualifier
            || self.segments.len() != representative.segments.len()
    }
}

/// Selects the upgrade ladder from a candidate pool.
///
/// `pool` must be sorted strictly descending; the caller owns that
/// precondition. Versions are kept when they match `include` (if given), do
/// not match `exclude` (if given), and are not blocked. The highest
/// remaining version is always retained, then one version per family
/// transition while walking downwards. The returned ladder is ascending.
pub fn select_upgrade_ladder(
    pool: &[String],
    include: Option<&Regex>,
    exclude: Option<&Regex>,
    blocked: &HashSet<String>,
) -> Vec<String> {
    let filtered: Vec<&str> = pool
        .iter()
        .map(String::as_str)
        .filter(|v| include.is_none_or(|re| re.is_match(v)))
        .filter(|v| exclude.is_none_or(|re| !re.is_match(v)))
        .filter(|v| !blocked.contains(*v))
        .collect();

    let Some((&anchor, rest)) = filtered.split_first() else {
        return Vec::new();
    };

    let mut ladder = vec![anchor];
    let mut representative = Family::of(anchor);

    for &version in rest {
        let candidate = Family::of(version);
        if candidate.differs_from(&representative) {
            ladder.push(version);
            representative = candidate;
        }
    }

    ladder.reverse();
    ladder.into_iter().map(str::to_owned).collect()
}
