//! Maven repository implementation
//!
//! Queries a Maven-layout repository over HTTP: available versions come from
//! `maven-metadata.xml`, manifest and blocklist documents are published as
//! artifacts with a classifier suffix
//! (`{artifact}-{version}-manifest.yaml`).

use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

use crate::resolver::coordinate::RemoteRepository;
use crate::resolver::error::ResolverError;
use crate::resolver::source::VersionSource;
use crate::version::order;

static VERSIONS_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<versions>(.*?)</versions>").expect("valid literal pattern"));
static VERSION_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<version>\s*([^<]+?)\s*</version>").expect("valid literal pattern"));

/// One Maven-layout repository reachable over HTTP.
pub struct MavenRepository {
    id: String,
    base_url: String,
    client: reqwest::Client,
}

impl MavenRepository {
    pub fn new(repository: &RemoteRepository, client: reqwest::Client) -> Self {
        Self {
            id: repository.id.clone(),
            base_url: repository.url.trim_end_matches('/').to_string(),
            client,
        }
    }

    fn artifact_dir(&self, group_id: &str, artifact_id: &str) -> String {
        format!(
            "{}/{}/{}",
            self.base_url,
            group_id.replace('.', "/"),
            artifact_id
        )
    }

    async fn get_text(&self, url: &str, subject: &str) -> Result<String, ResolverError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ResolverError::NotFound(subject.to_string()));
        }
        if !status.is_success() {
            warn!("Repository {} returned status {}: {}", self.id, status, url);
            return Err(ResolverError::InvalidResponse(format!(
                "Unexpected status: {status}"
            )));
        }

        Ok(response.text().await?)
    }

    /// Highest release listed in the repository metadata.
    pub async fn latest_release(
        &self,
        group_id: &str,
        artifact_id: &str,
    ) -> Result<String, ResolverError> {
        self.fetch_all_versions(group_id, artifact_id)
            .await?
            .into_iter()
            .max_by(|a, b| order::compare(a, b))
            .ok_or_else(|| ResolverError::NoVersions(format!("{group_id}:{artifact_id}")))
    }

    /// Downloads a classified YAML document artifact.
    ///
    /// Without an explicit version the highest release from the metadata is
    /// used.
    pub async fn fetch_document(
        &self,
        group_id: &str,
        artifact_id: &str,
        version: Option<&str>,
        classifier: &str,
    ) -> Result<String, ResolverError> {
        let version = match version {
            Some(version) => version.to_string(),
            None => self.latest_release(group_id, artifact_id).await?,
        };
        let url = format!(
            "{}/{}/{}-{}-{}.yaml",
            self.artifact_dir(group_id, artifact_id),
            version,
            artifact_id,
            version,
            classifier
        );
        self.get_text(&url, &format!("{group_id}:{artifact_id}:{version}"))
            .await
    }
}

#[async_trait::async_trait]
impl VersionSource for MavenRepository {
    fn id(&self) -> &str {
        &self.id
    }

    async fn fetch_all_versions(
        &self,
        group_id: &str,
        artifact_id: &str,
    ) -> Result<Vec<String>, ResolverError> {
        let url = format!(
            "{}/maven-metadata.xml",
            self.artifact_dir(group_id, artifact_id)
        );
        let metadata = self
            .get_text(&url, &format!("{group_id}:{artifact_id}"))
            .await?;
        Ok(parse_metadata_versions(&metadata))
    }
}

/// Extracts the `<version>` entries from a `maven-metadata.xml` document.
///
/// Only the `<versions>` block is considered; `<latest>` and `<release>`
/// hints outside it are ignored.
fn parse_metadata_versions(xml: &str) -> Vec<String> {
    let Some(block) = VERSIONS_BLOCK.captures(xml).and_then(|c| c.get(1)) else {
        return Vec::new();
    };
    VERSION_TAG
        .captures_iter(block.as_str())
        .map(|capture| capture[1].to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    const METADATA: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<metadata>
  <groupId>org.example</groupId>
  <artifactId>core</artifactId>
  <versioning>
    <latest>2.0.0</latest>
    <release>2.0.0</release>
    <versions>
      <version>1.0.0</version>
      <version>1.1.0</version>
      <version>2.0.0</version>
    </versions>
    <lastUpdated>20240101000000</lastUpdated>
  </versioning>
</metadata>
"#;

    fn repository(server: &Server) -> MavenRepository {
        MavenRepository::new(
            &RemoteRepository::new("test-repo", server.url()),
            reqwest::Client::new(),
        )
    }

    #[test]
    fn parses_versions_from_metadata() {
        assert_eq!(
            parse_metadata_versions(METADATA),
            vec!["1.0.0", "1.1.0", "2.0.0"]
        );
    }

    #[test]
    fn metadata_without_versions_block_yields_nothing() {
        assert!(parse_metadata_versions("<metadata><versioning/></metadata>").is_empty());
    }

    #[tokio::test]
    async fn fetch_all_versions_queries_the_metadata_path() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/org/example/core/maven-metadata.xml")
            .with_status(200)
            .with_body(METADATA)
            .create_async()
            .await;

        let versions = repository(&server)
            .fetch_all_versions("org.example", "core")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(versions, vec!["1.0.0", "1.1.0", "2.0.0"]);
    }

    #[tokio::test]
    async fn missing_metadata_is_not_found() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/org/example/core/maven-metadata.xml")
            .with_status(404)
            .create_async()
            .await;

        let result = repository(&server)
            .fetch_all_versions("org.example", "core")
            .await;

        assert!(matches!(result, Err(ResolverError::NotFound(_))));
    }

    #[tokio::test]
    async fn server_errors_are_invalid_responses() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/org/example/core/maven-metadata.xml")
            .with_status(500)
            .create_async()
            .await;

        let result = repository(&server)
            .fetch_all_versions("org.example", "core")
            .await;

        assert!(matches!(result, Err(ResolverError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn fetch_document_resolves_the_latest_release_when_unversioned() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/org/example/core/maven-metadata.xml")
            .with_status(200)
            .with_body(METADATA)
            .create_async()
            .await;
        let document = server
            .mock("GET", "/org/example/core/2.0.0/core-2.0.0-manifest.yaml")
            .with_status(200)
            .with_body("schemaVersion: 1.0.0\n")
            .create_async()
            .await;

        let text = repository(&server)
            .fetch_document("org.example", "core", None, "manifest")
            .await
            .unwrap();

        document.assert_async().await;
        assert_eq!(text, "schemaVersion: 1.0.0\n");
    }
}
