//! Coordinate and repository-list parsing

use std::path::PathBuf;

use crate::resolver::error::CoordinateError;

/// Locator for a manifest or blocklist document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Coordinate {
    /// An HTTP(S) URL to fetch the document from.
    Url(String),
    /// A local filesystem path.
    Path(PathBuf),
    /// A Maven coordinate; without a version the highest release is used.
    Maven {
        group_id: String,
        artifact_id: String,
        version: Option<String>,
    },
}

impl Coordinate {
    /// Parses a coordinate string: `http(s)://` and `file://` URLs,
    /// `group:artifact[:version]` triples, anything else a local path.
    pub fn parse(input: &str) -> Result<Self, CoordinateError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(CoordinateError::Blank);
        }
        if let Some(path) = input.strip_prefix("file://") {
            return Ok(Coordinate::Path(PathBuf::from(path)));
        }
        if input.starts_with("http://") || input.starts_with("https://") {
            return Ok(Coordinate::Url(input.to_string()));
        }

        let segments: Vec<&str> = input.split(':').collect();
        match segments.as_slice() {
            [_] => Ok(Coordinate::Path(PathBuf::from(input))),
            [group, artifact] if !group.is_empty() && !artifact.is_empty() => {
                Ok(Coordinate::Maven {
                    group_id: group.to_string(),
                    artifact_id: artifact.to_string(),
                    version: None,
                })
            }
            [group, artifact, version]
                if !group.is_empty() && !artifact.is_empty() && !version.is_empty() =>
            {
                Ok(Coordinate::Maven {
                    group_id: group.to_string(),
                    artifact_id: artifact.to_string(),
                    version: Some(version.to_string()),
                })
            }
            _ => Err(CoordinateError::Unrecognized(input.to_string())),
        }
    }
}

/// A repository to query, identified by id and base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteRepository {
    pub id: String,
    pub url: String,
}

impl RemoteRepository {
    pub fn new(id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
        }
    }
}

/// Parses repository specs of the form `URL` or `ID::URL`.
///
/// Unnamed repositories get positional ids `repo-0`, `repo-1`, …
pub fn parse_repository_list(specs: &[String]) -> Result<Vec<RemoteRepository>, CoordinateError> {
    specs
        .iter()
        .enumerate()
        .map(|(index, spec)| match spec.split_once("::") {
            None => Ok(RemoteRepository::new(format!("repo-{index}"), spec.clone())),
            Some((id, url)) if !id.is_empty() && !url.is_empty() && !url.contains("::") => {
                Ok(RemoteRepository::new(id, url))
            }
            Some(_) => Err(CoordinateError::InvalidRepository(spec.clone())),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(
        "https://example.com/manifest.yaml",
        Coordinate::Url("https://example.com/manifest.yaml".to_string())
    )]
    #[case(
        "file:///tmp/manifest.yaml",
        Coordinate::Path(PathBuf::from("/tmp/manifest.yaml"))
    )]
    #[case(
        "manifests/base.yaml",
        Coordinate::Path(PathBuf::from("manifests/base.yaml"))
    )]
    #[case("org.example:component", Coordinate::Maven {
        group_id: "org.example".to_string(),
        artifact_id: "component".to_string(),
        version: None,
    })]
    #[case("org.example:component:1.0.0", Coordinate::Maven {
        group_id: "org.example".to_string(),
        artifact_id: "component".to_string(),
        version: Some("1.0.0".to_string()),
    })]
    fn parse_recognizes_coordinate_forms(#[case] input: &str, #[case] expected: Coordinate) {
        assert_eq!(Coordinate::parse(input).unwrap(), expected);
    }

    #[test]
    fn blank_coordinate_is_rejected() {
        assert!(matches!(
            Coordinate::parse("  "),
            Err(CoordinateError::Blank)
        ));
    }

    #[test]
    fn too_many_gav_segments_are_rejected() {
        assert!(matches!(
            Coordinate::parse("g:a:v:extra"),
            Err(CoordinateError::Unrecognized(_))
        ));
    }

    #[test]
    fn repository_list_assigns_positional_ids() {
        let specs = vec![
            "https://repo1.example.com".to_string(),
            "central::https://repo2.example.com".to_string(),
        ];

        let repositories = parse_repository_list(&specs).unwrap();

        assert_eq!(
            repositories,
            vec![
                RemoteRepository::new("repo-0", "https://repo1.example.com"),
                RemoteRepository::new("central", "https://repo2.example.com"),
            ]
        );
    }

    #[test]
    fn malformed_repository_spec_is_rejected() {
        let specs = vec!["id::url::extra".to_string()];
        assert!(matches!(
            parse_repository_list(&specs),
            Err(CoordinateError::InvalidRepository(_))
        ));
    }
}
