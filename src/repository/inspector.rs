// file: src/repository/inspector.rs
// description: read-only repository inspection using git2
// reference: https://docs.rs/git2

use crate::config::RepositoryConfig;
use crate::error::Result;
use crate::models::RepositoryDescriptor;
use crate::repository::remote::{ParsedRemote, parse_remote_url};
use git2::{ErrorCode, Repository, RepositoryOpenFlags};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub struct RepositoryInspector {
    config: RepositoryConfig,
    ceiling_dirs: Vec<PathBuf>,
}

impl RepositoryInspector {
    pub fn new(config: RepositoryConfig) -> Self {
        Self {
            config,
            ceiling_dirs: Vec::new(),
        }
    }

    /// Stop the upward repository search before entering `dir`, like
    /// `GIT_CEILING_DIRECTORIES`.
    pub fn with_ceiling_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.ceiling_dirs.push(dir.into());
        self
    }

    /// Inspect the configured `local_path`.
    pub fn inspect_configured(&self) -> Result<RepositoryDescriptor> {
        self.inspect(&self.config.local_path)
    }

    /// Build a descriptor for the repository enclosing `path`.
    pub fn inspect(&self, path: &Path) -> Result<RepositoryDescriptor> {
        info!("Inspecting repository at {}", path.display());

        let repo = Repository::open_ext(path, RepositoryOpenFlags::empty(), &self.ceiling_dirs)?;

        let (endpoint, identifier) = match self.remote_identity(&repo)? {
            Some(remote) => (remote.host, remote.identifier),
            None => (String::new(), String::new()),
        };

        let mut descriptor = RepositoryDescriptor::new(endpoint, identifier);

        if let Some(branch) = Self::current_branch(&repo)? {
            descriptor = descriptor.with_branch(branch);
        } else {
            debug!("HEAD is detached, no branch recorded");
        }

        if let Some(workdir) = repo.workdir() {
            descriptor = descriptor.with_local_root(Self::trim_trailing_separator(workdir));
        } else {
            debug!("Bare repository, no local root recorded");
        }

        Ok(descriptor)
    }

    fn remote_identity(&self, repo: &Repository) -> Result<Option<ParsedRemote>> {
        let remote = match repo.find_remote(&self.config.remote) {
            Ok(remote) => remote,
            Err(e) if e.code() == ErrorCode::NotFound => {
                warn!("Remote '{}' is not configured", self.config.remote);
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let Some(url) = remote.url() else {
            warn!("Remote '{}' has a non UTF-8 url", self.config.remote);
            return Ok(None);
        };

        // Local paths and file:// mirrors are valid remotes without a forge
        let Some(parsed) = parse_remote_url(url) else {
            warn!(
                "Remote '{}' url {} does not name a hosted forge",
                self.config.remote, url
            );
            return Ok(None);
        };
        debug!(
            "Remote '{}' resolved to {} {}",
            self.config.remote, parsed.host, parsed.identifier
        );
        Ok(Some(parsed))
    }

    fn current_branch(repo: &Repository) -> Result<Option<String>> {
        if repo.head_detached()? {
            return Ok(None);
        }

        // Works for unborn branches too, where repo.head() fails
        let head = repo.find_reference("HEAD")?;
        let branch = head
            .symbolic_target()
            .and_then(|target| target.strip_prefix("refs/heads/"))
            .map(str::to_string);

        Ok(branch)
    }

    fn trim_trailing_separator(path: &Path) -> PathBuf {
        let text = path.to_string_lossy();
        let trimmed = text.trim_end_matches(['/', '\\']);
        if trimmed.is_empty() {
            path.to_path_buf()
        } else {
            PathBuf::from(trimmed)
        }
    }
}
