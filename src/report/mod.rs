//! Upgrade report rendering
//!
//! Turns discovered upgrades into a self-contained HTML document. Rendering
//! is pure string building; callers decide where the report goes.

pub mod html;

use std::collections::HashMap;

use crate::manifest::types::Stream;

/// One reported component: the pinned stream and its upgrade candidates.
#[derive(Debug, Clone, PartialEq)]
pub struct UpgradeEntry {
    pub stream: Stream,
    /// Candidate versions, ascending.
    pub candidates: Vec<String>,
    /// Candidate version to id of the repository serving it.
    pub origins: HashMap<String, String>,
}

impl UpgradeEntry {
    pub fn new(stream: Stream, candidates: Vec<String>) -> Self {
        Self {
            stream,
            candidates,
            origins: HashMap::new(),
        }
    }

    pub fn with_origins(mut self, origins: HashMap<String, String>) -> Self {
        self.origins = origins;
        self
    }
}
