// file: src/repository/classifier.rs
// description: branch and forge classification over repository descriptors
// reference: git-flow branch naming conventions

use crate::models::RepositoryDescriptor;
use serde::Serialize;

const GITHUB_ENDPOINT: &str = "github.com";
const DEVELOP_BRANCHES: [&str; 3] = ["dev", "develop", "development"];

pub fn is_on_master_branch(repository: &RepositoryDescriptor) -> bool {
    branch_equals_any(repository, &["master"])
}

pub fn is_on_develop_branch(repository: &RepositoryDescriptor) -> bool {
    branch_equals_any(repository, &DEVELOP_BRANCHES)
}

pub fn is_on_feature_branch(repository: &RepositoryDescriptor) -> bool {
    branch_starts_with(repository, "feature/")
}

pub fn is_on_release_branch(repository: &RepositoryDescriptor) -> bool {
    branch_starts_with(repository, "release/")
}

pub fn is_on_hotfix_branch(repository: &RepositoryDescriptor) -> bool {
    branch_starts_with(repository, "hotfix/")
}

pub fn is_github_repository(repository: &RepositoryDescriptor) -> bool {
    repository.endpoint().eq_ignore_ascii_case(GITHUB_ENDPOINT)
}

fn branch_equals_any(repository: &RepositoryDescriptor, names: &[&str]) -> bool {
    repository
        .branch()
        .is_some_and(|branch| names.iter().any(|name| branch.eq_ignore_ascii_case(name)))
}

fn branch_starts_with(repository: &RepositoryDescriptor, prefix: &str) -> bool {
    repository.branch().is_some_and(|branch| {
        branch
            .get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    })
}

/// Every classification of a descriptor, gathered for reporting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BranchFlags {
    pub master: bool,
    pub develop: bool,
    pub feature: bool,
    pub release: bool,
    pub hotfix: bool,
    pub github: bool,
}

impl From<&RepositoryDescriptor> for BranchFlags {
    fn from(repository: &RepositoryDescriptor) -> Self {
        Self {
            master: is_on_master_branch(repository),
            develop: is_on_develop_branch(repository),
            feature: is_on_feature_branch(repository),
            release: is_on_release_branch(repository),
            hotfix: is_on_hotfix_branch(repository),
            github: is_github_repository(repository),
        }
    }
}
