//! Version string tokenization and qualifier extraction
//!
//! Version strings are treated as opaque until split on the delimiter class
//! `-`, `.`, `_`. Splitting is lossy with respect to delimiter choice:
//! re-joining segments with any single delimiter is not guaranteed to
//! reproduce the original string.

/// Characters that separate version segments.
const DELIMITERS: [char; 3] = ['-', '.', '_'];

/// Splits a version string into segments.
///
/// Consecutive delimiters yield empty segments, which are preserved and
/// participate in downstream comparisons as literal empty strings. The empty
/// string tokenizes to a single empty segment.
pub fn tokenize(version: &str) -> Vec<&str> {
    version.split(DELIMITERS).collect()
}

/// Whether a segment counts as numeric.
///
/// A segment is numeric when it is non-empty, consists of ASCII digits only
/// (a sign makes it non-numeric), and its value fits in a `u64`. Digit runs
/// too long for `u64` are treated as qualifier segments.
pub fn is_numeric(segment: &str) -> bool {
    !segment.is_empty()
        && segment.bytes().all(|b| b.is_ascii_digit())
        && segment.parse::<u64>().is_ok()
}

/// Returns the longest leading run of numeric segments.
///
/// Leading zeros are preserved; segments stay strings, parsing is only a
/// membership test.
pub fn numeric_prefix<'a>(segments: &'a [&'a str]) -> &'a [&'a str] {
    let end = segments
        .iter()
        .position(|s| !is_numeric(s))
        .unwrap_or(segments.len());
    &segments[..end]
}

/// Returns the first non-numeric segment, or an empty string when the
/// version is fully numeric.
pub fn first_qualifier_segment<'a>(segments: &[&'a str]) -> &'a str {
    segments
        .iter()
        .copied()
        .find(|s| !is_numeric(s))
        .unwrap_or("")
}

/// Returns the remainder of the version string after the numeric prefix.
///
/// Unlike [`first_qualifier_segment`] this keeps the whole suffix with its
/// original delimiters, e.g. `"1.2.3.redhat-00001"` yields
/// `"redhat-00001"`. Fully numeric versions yield an empty string.
pub fn qualifier(version: &str) -> &str {
    let mut remainder = version;
    loop {
        let (head, rest) = match remainder.find(DELIMITERS) {
            Some(idx) => (&remainder[..idx], Some(&remainder[idx + 1..])),
            None => (remainder, None),
        };
        if !is_numeric(head) {
            return remainder;
        }
        match rest {
            Some(r) => remainder = r,
            None => return "",
        }
    }
}
