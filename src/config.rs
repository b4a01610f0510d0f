use std::time::Duration;

// =============================================================================
// Network constants
// =============================================================================

/// Timeout for repository requests (30 seconds)
pub const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Maximum number of streams resolved concurrently
pub const FETCH_CONCURRENCY: usize = 8;

/// User agent sent with repository requests
pub const USER_AGENT: &str = "channel-tools";

// =============================================================================
// Output files
// =============================================================================

/// Upgrade report written by find-upgrades
pub const REPORT_FILE: &str = "report.html";

/// Manifest containing only upgraded streams
pub const DIFF_MANIFEST_FILE: &str = "diff-manifest.yaml";

/// Manifest containing all streams with upgraded versions substituted
pub const UPGRADED_MANIFEST_FILE: &str = "upgraded-manifest.yaml";

/// Builds the HTTP client shared by all repository queries.
pub fn http_client() -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(HTTP_TIMEOUT)
        .build()
}
