// file: src/resolver/filesystem.rs
// description: existence checks used to tell files from directories
// reference: trait seam so resolution can run against an in-memory tree

use crate::resolver::paths::normalize;
use std::collections::HashSet;
use std::path::Path;

/// Read-only existence checks against a working copy.
pub trait FileSystem: Send + Sync {
    fn is_dir(&self, path: &Path) -> bool;

    fn is_file(&self, path: &Path) -> bool;
}

/// Checks the real disk through `std::fs` metadata.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSystem;

impl FileSystem for LocalFileSystem {
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn is_dir(&self, path: &Path) -> bool {
        (**self).is_dir(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        (**self).is_file(path)
    }
}

/// Fixed set of files and directories, matched after lexical normalization.
///
/// Parents of every added file or directory count as directories.
#[derive(Debug, Clone, Default)]
pub struct MemoryFileSystem {
    files: HashSet<String>,
    directories: HashSet<String>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let key = Self::key(path.as_ref());
        self.add_parents(&key);
        self.files.insert(key);
        self
    }

    pub fn with_directory(mut self, path: impl AsRef<Path>) -> Self {
        let key = Self::key(path.as_ref());
        self.add_parents(&key);
        self.directories.insert(key);
        self
    }

    fn add_parents(&mut self, key: &str) {
        let mut current = key;
        while let Some((parent, _)) = current.rsplit_once('/') {
            if parent.is_empty() {
                self.directories.insert("/".to_string());
                break;
            }
            self.directories.insert(parent.to_string());
            current = parent;
        }
    }

    fn key(path: &Path) -> String {
        normalize(&path.to_string_lossy())
    }
}

impl FileSystem for MemoryFileSystem {
    fn is_dir(&self, path: &Path) -> bool {
        self.directories.contains(&Self::key(path))
    }

    fn is_file(&self, path: &Path) -> bool {
        self.files.contains(&Self::key(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_file_systems_are_send_sync() {
        assert_send_sync::<LocalFileSystem>();
        assert_send_sync::<MemoryFileSystem>();
        assert_send_sync::<&MemoryFileSystem>();
    }

    #[test]
    fn test_local_file_system() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("readme.md");
        fs::write(&file, "# Readme").unwrap();

        let fs = LocalFileSystem;
        assert!(fs.is_dir(temp.path()));
        assert!(!fs.is_file(temp.path()));
        assert!(fs.is_file(&file));
        assert!(!fs.is_dir(&file));
        assert!(!fs.is_file(&temp.path().join("missing.md")));
    }

    #[test]
    fn test_memory_file_system() {
        let fs = MemoryFileSystem::new()
            .with_file("/repo/docs/readme.md")
            .with_directory("/repo/assets");

        assert!(fs.is_file(Path::new("/repo/docs/readme.md")));
        assert!(fs.is_dir(Path::new("/repo/docs")));
        assert!(fs.is_dir(Path::new("/repo")));
        assert!(fs.is_dir(Path::new("/")));
        assert!(fs.is_dir(Path::new("/repo/assets")));
        assert!(!fs.is_file(Path::new("/repo/docs")));
        assert!(!fs.is_dir(Path::new("/repo/missing")));
    }

    #[test]
    fn test_memory_file_system_normalizes_lookups() {
        let fs = MemoryFileSystem::new().with_file("/repo/src/lib.rs");

        assert!(fs.is_file(Path::new("/repo/./src/../src/lib.rs")));
        assert!(fs.is_dir(Path::new("/repo/src/")));
    }
}
