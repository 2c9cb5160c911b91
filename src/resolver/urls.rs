// file: src/resolver/urls.rs
// description: GitHub browse and raw download url resolution
// reference: https://docs.github.com/en/repositories/working-with-files/using-files/getting-permanent-links-to-files

use crate::error::{ResolveError, Result};
use crate::models::{BrowseMethod, ItemType, RepositoryDescriptor};
use crate::repository::classifier::is_github_repository;
use crate::resolver::filesystem::{FileSystem, LocalFileSystem};
use crate::resolver::paths::repository_relative_path;
use tracing::debug;

const BROWSE_BASE: &str = "https://github.com";
const RAW_BASE: &str = "https://raw.githubusercontent.com";

/// Computes forge URLs for a single repository descriptor.
///
/// Every operation fails with [`ResolveError::UnsupportedForge`] before
/// anything else is checked when the descriptor is not a GitHub repository.
pub struct UrlResolver<'a, F = LocalFileSystem> {
    repository: &'a RepositoryDescriptor,
    fs: F,
}

impl<'a> UrlResolver<'a, LocalFileSystem> {
    pub fn new(repository: &'a RepositoryDescriptor) -> Self {
        Self::with_file_system(repository, LocalFileSystem)
    }
}

impl<'a, F: FileSystem> UrlResolver<'a, F> {
    pub fn with_file_system(repository: &'a RepositoryDescriptor, fs: F) -> Self {
        Self { repository, fs }
    }

    pub fn owner(&self) -> Result<&'a str> {
        self.identifier_segments().map(|(owner, _)| owner)
    }

    pub fn name(&self) -> Result<&'a str> {
        self.identifier_segments().map(|(_, name)| name)
    }

    /// Repository-relative form of `path`, `None` meaning the root.
    pub fn relative_path(&self, path: Option<&str>) -> Result<Option<String>> {
        self.ensure_supported()?;
        repository_relative_path(path, self.repository.local_root())
    }

    /// `https://raw.githubusercontent.com/{identifier}/{branch}/{path}`
    pub fn download_url(&self, path: Option<&str>, branch: Option<&str>) -> Result<String> {
        self.ensure_supported()?;
        let branch = self.effective_branch(branch)?;
        let path = path.ok_or(ResolveError::PathRequired)?;
        let relative = repository_relative_path(Some(path), self.repository.local_root())?
            .unwrap_or_default();

        Ok(format!(
            "{}/{}/{}/{}",
            RAW_BASE,
            self.repository.identifier(),
            branch,
            relative
        ))
    }

    /// `https://github.com/{identifier}/{tree|blob}/{branch}/{path}`
    ///
    /// Without a path the URL points at the repository root as a tree.
    pub fn browse_url(
        &self,
        path: Option<&str>,
        branch: Option<&str>,
        item_type: ItemType,
    ) -> Result<String> {
        self.ensure_supported()?;
        let branch = self.effective_branch(branch)?;
        let relative = repository_relative_path(path, self.repository.local_root())?;
        let method = self.browse_method(relative.as_deref(), item_type)?;

        Ok(format!(
            "{}/{}/{}/{}/{}",
            BROWSE_BASE,
            self.repository.identifier(),
            method,
            branch,
            relative.unwrap_or_default()
        ))
    }

    /// Order: root, directory hint, directory on disk, file hint, file on
    /// disk. Disk lookups only see the current checkout.
    fn browse_method(&self, relative: Option<&str>, item_type: ItemType) -> Result<BrowseMethod> {
        let Some(relative) = relative else {
            return Ok(BrowseMethod::Tree);
        };

        if item_type == ItemType::Directory {
            return Ok(BrowseMethod::Tree);
        }

        let absolute = self.repository.local_root().map(|root| root.join(relative));

        if let Some(absolute) = &absolute
            && self.fs.is_dir(absolute)
        {
            debug!("{} is a directory on disk", absolute.display());
            return Ok(BrowseMethod::Tree);
        }

        if item_type == ItemType::File {
            return Ok(BrowseMethod::Blob);
        }

        if let Some(absolute) = &absolute
            && self.fs.is_file(absolute)
        {
            debug!("{} is a file on disk", absolute.display());
            return Ok(BrowseMethod::Blob);
        }

        Err(ResolveError::AmbiguousItemType {
            path: relative.to_string(),
        })
    }

    fn effective_branch<'b>(&self, branch: Option<&'b str>) -> Result<&'b str>
    where
        'a: 'b,
    {
        branch
            .or_else(|| self.repository.branch())
            .ok_or(ResolveError::NoBranchAvailable)
    }

    fn identifier_segments(&self) -> Result<(&'a str, &'a str)> {
        self.ensure_supported()?;

        let identifier = self.repository.identifier();
        match identifier.split_once('/') {
            Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/') => {
                Ok((owner, name))
            }
            _ => Err(ResolveError::MalformedIdentifier(identifier.to_string())),
        }
    }

    fn ensure_supported(&self) -> Result<()> {
        if is_github_repository(self.repository) {
            Ok(())
        } else {
            Err(ResolveError::UnsupportedForge {
                endpoint: self.repository.endpoint().to_string(),
            })
        }
    }
}
