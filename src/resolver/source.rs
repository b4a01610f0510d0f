//! Version source trait

#[cfg(test)]
use mockall::automock;

use crate::resolver::error::ResolverError;

/// Trait for querying the available versions of a component.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait VersionSource: Send + Sync {
    /// Identifier shown in reports next to versions this source serves.
    fn id(&self) -> &str;

    /// Fetches all released versions of a component.
    ///
    /// # Returns
    /// * `Ok(versions)` - versions in the order the source lists them
    /// * `Err(ResolverError)` - if the query fails
    async fn fetch_all_versions(
        &self,
        group_id: &str,
        artifact_id: &str,
    ) -> Result<Vec<String>, ResolverError>;
}
