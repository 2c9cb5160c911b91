// file: src/models/descriptor.rs
// description: immutable snapshot of repository identity and checkout state
// reference: internal data structures

use crate::error::{ResolveError, Result};
use crate::repository::remote::parse_remote_url;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Remote identity, current branch and on-disk location of a working copy.
///
/// Built once (by [`crate::RepositoryInspector`] or by hand) and only read
/// afterwards. An empty `endpoint` means no remote is configured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryDescriptor {
    endpoint: String,
    identifier: String,
    branch: Option<String>,
    local_root: Option<PathBuf>,
}

impl RepositoryDescriptor {
    pub fn new(endpoint: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            identifier: identifier.into(),
            branch: None,
            local_root: None,
        }
    }

    /// Descriptor for a repository known only by its remote URL.
    pub fn from_url(url: &str, branch: Option<&str>) -> Result<Self> {
        let remote =
            parse_remote_url(url).ok_or_else(|| ResolveError::InvalidRemoteUrl(url.to_string()))?;

        let descriptor = Self::new(remote.host, remote.identifier);
        Ok(match branch {
            Some(branch) => descriptor.with_branch(branch),
            None => descriptor,
        })
    }

    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = Some(branch.into());
        self
    }

    pub fn with_local_root(mut self, local_root: impl Into<PathBuf>) -> Self {
        self.local_root = Some(local_root.into());
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn branch(&self) -> Option<&str> {
        self.branch.as_deref()
    }

    pub fn local_root(&self) -> Option<&Path> {
        self.local_root.as_deref()
    }
}
