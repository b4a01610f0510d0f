//! Identity-keyed manifest merge

use indexmap::IndexMap;

use crate::manifest::types::{Stream, StreamKey};

/// Merges two stream collections, second wins.
///
/// Streams are keyed by identity (group and artifact), not the full triple.
/// Within each input the first occurrence of an identity wins. Overlaying
/// the second collection keeps the original position of identities already
/// present in the first and appends new identities in the second's order;
/// `IndexMap::insert` preserves the position of existing keys, which is the
/// whole ordering contract here.
pub fn merge_streams(first: &[Stream], second: &[Stream]) -> Vec<Stream> {
    let mut merged = keyed_by_identity(first);
    for (key, stream) in keyed_by_identity(second) {
        merged.insert(key, stream);
    }
    merged.into_values().collect()
}

fn keyed_by_identity(streams: &[Stream]) -> IndexMap<StreamKey, Stream> {
    let mut map = IndexMap::new();
    for stream in streams {
        map.entry(stream.key()).or_insert_with(|| stream.clone());
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_collection_overrides_and_appends() {
        let first = vec![Stream::new("g1", "a1", "v1"), Stream::new("g2", "a2", "v2")];
        let second = vec![
            Stream::new("g2", "a2", "overridden"),
            Stream::new("g3", "a3", "v3"),
        ];

        let merged = merge_streams(&first, &second);

        assert_eq!(
            merged,
            vec![
                Stream::new("g1", "a1", "v1"),
                Stream::new("g2", "a2", "overridden"),
                Stream::new("g3", "a3", "v3"),
            ]
        );
    }

    #[test]
    fn merging_a_manifest_with_itself_is_identity() {
        let streams = vec![Stream::new("g1", "a1", "v1"), Stream::new("g2", "a2", "v2")];

        assert_eq!(merge_streams(&streams, &streams), streams);
    }

    #[test]
    fn first_occurrence_wins_within_one_input() {
        let first = vec![
            Stream::new("g1", "a1", "kept"),
            Stream::new("g1", "a1", "ignored"),
        ];

        let merged = merge_streams(&first, &[]);

        assert_eq!(merged, vec![Stream::new("g1", "a1", "kept")]);
    }

    #[test]
    fn overridden_identity_keeps_its_original_position() {
        let first = vec![
            Stream::new("g1", "a1", "v1"),
            Stream::new("g2", "a2", "v2"),
            Stream::new("g3", "a3", "v3"),
        ];
        let second = vec![Stream::new("g1", "a1", "new")];

        let merged = merge_streams(&first, &second);

        assert_eq!(merged[0], Stream::new("g1", "a1", "new"));
        assert_eq!(merged.len(), 3);
    }
}
