//! End-to-end test for the find-upgrades command against a mock repository

use mockito::Server;
use tempfile::TempDir;

use channel_tools::cli::find_upgrades::{FindUpgradesArgs, run};
use channel_tools::manifest::io::read_manifest;
use channel_tools::manifest::types::Stream;

const WIDGET_METADATA: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<metadata>
  <groupId>org.acme</groupId>
  <artifactId>widget</artifactId>
  <versioning>
    <latest>1.2.0.redhat-00001</latest>
    <release>1.2.0.redhat-00001</release>
    <versions>
      <version>1.1.1.redhat-00045</version>
      <version>1.1.1.redhat-00046</version>
      <version>1.2.0.redhat-00001</version>
    </versions>
  </versioning>
</metadata>
"#;

const MANIFEST: &str = r#"
schemaVersion: 1.0.0
streams:
  - groupId: org.acme
    artifactId: widget
    version: 1.1.1.redhat-00045
  - groupId: org.acme
    artifactId: gadget
    version: 2.0.0
"#;

fn args(server: &Server, dir: &TempDir, manifest_path: &std::path::Path) -> FindUpgradesArgs {
    FindUpgradesArgs {
        manifest_coordinate: manifest_path.display().to_string(),
        repositories: vec![format!("test-repo::{}", server.url())],
        manifest_repositories: vec![],
        include_pattern: None,
        exclude_pattern: None,
        blocklist_coordinates: vec![],
        output_dir: dir.path().to_path_buf(),
    }
}

#[tokio::test]
async fn writes_report_and_both_manifests() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/org/acme/widget/maven-metadata.xml")
        .with_status(200)
        .with_body(WIDGET_METADATA)
        .create_async()
        .await;
    server
        .mock("GET", "/org/acme/gadget/maven-metadata.xml")
        .with_status(404)
        .create_async()
        .await;

    let dir = TempDir::new().unwrap();
    let manifest_path = dir.path().join("manifest.yaml");
    std::fs::write(&manifest_path, MANIFEST).unwrap();

    run(args(&server, &dir, &manifest_path)).await.unwrap();

    let report = std::fs::read_to_string(dir.path().join("report.html")).unwrap();
    assert!(report.contains("org.acme:widget:1.1.1.redhat-00045"));
    assert!(report.contains("1.1.1.redhat-00046"));
    assert!(report.contains("1.2.0.redhat-00001"));
    assert!(report.contains("test-repo"));

    // Only the stream with a micro upgrade lands in the diff manifest.
    let diff = read_manifest(&dir.path().join("diff-manifest.yaml")).unwrap();
    assert_eq!(
        diff.streams,
        vec![Stream::new("org.acme", "widget", "1.1.1.redhat-00046")]
    );

    // The full manifest carries the upgrade and the untouched stream.
    let upgraded = read_manifest(&dir.path().join("upgraded-manifest.yaml")).unwrap();
    assert_eq!(
        upgraded.streams,
        vec![
            Stream::new("org.acme", "gadget", "2.0.0"),
            Stream::new("org.acme", "widget", "1.1.1.redhat-00046"),
        ]
    );
}

#[tokio::test]
async fn blocklisted_versions_are_never_offered() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/org/acme/widget/maven-metadata.xml")
        .with_status(200)
        .with_body(WIDGET_METADATA)
        .create_async()
        .await;
    server
        .mock("GET", "/org/acme/gadget/maven-metadata.xml")
        .with_status(404)
        .create_async()
        .await;

    let dir = TempDir::new().unwrap();
    let manifest_path = dir.path().join("manifest.yaml");
    std::fs::write(&manifest_path, MANIFEST).unwrap();

    let blocklist_path = dir.path().join("blocklist.yaml");
    std::fs::write(
        &blocklist_path,
        r#"
schemaVersion: 1.0.0
blocks:
  - groupId: org.acme
    artifactId: widget
    versions:
      - 1.1.1.redhat-00046
"#,
    )
    .unwrap();

    let mut args = args(&server, &dir, &manifest_path);
    args.blocklist_coordinates = vec![blocklist_path.display().to_string()];

    run(args).await.unwrap();

    let report = std::fs::read_to_string(dir.path().join("report.html")).unwrap();
    assert!(!report.contains("1.1.1.redhat-00046"));
    assert!(report.contains("1.2.0.redhat-00001"));

    // No same-minor candidate survives, so the diff manifest is empty.
    let diff = read_manifest(&dir.path().join("diff-manifest.yaml")).unwrap();
    assert!(diff.streams.is_empty());
}

#[tokio::test]
async fn nothing_is_written_when_no_upgrades_exist() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/org/acme/widget/maven-metadata.xml")
        .with_status(404)
        .create_async()
        .await;
    server
        .mock("GET", "/org/acme/gadget/maven-metadata.xml")
        .with_status(404)
        .create_async()
        .await;

    let dir = TempDir::new().unwrap();
    let manifest_path = dir.path().join("manifest.yaml");
    std::fs::write(&manifest_path, MANIFEST).unwrap();

    run(args(&server, &dir, &manifest_path)).await.unwrap();

    assert!(!dir.path().join("report.html").exists());
    assert!(!dir.path().join("diff-manifest.yaml").exists());
    assert!(!dir.path().join("upgraded-manifest.yaml").exists());
}
