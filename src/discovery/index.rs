use std::path::{Path, PathBuf};

use tracing::debug;

use super::config::EXCLUDED_DIRS;
use super::naming::{candidate_file_names, file_name};
use super::utils::{to_slash_path, walk_matching_files};
use crate::error::IndexError;

/// Source of the candidate list for a lookup.
///
/// Implementations return every file named `<name>.js`, `<name>.spec.js`
/// or `<name>.test.js` as slash-separated paths.
pub trait WorkspaceIndex: Send + Sync {
    fn find_files(&self, name: &str) -> Result<Vec<String>, IndexError>;
}

/// Walks a workspace directory on every lookup.
#[derive(Debug, Clone)]
pub struct FsIndex {
    root: PathBuf,
}

impl FsIndex {
    pub fn new(root: impl AsRef<Path>) -> Result<Self, IndexError> {
        let root = root.as_ref();
        if !root.exists() {
            return Err(IndexError::root_not_found(root));
        }
        if !root.is_dir() {
            return Err(IndexError::not_a_directory(root));
        }
        let root = root
            .canonicalize()
            .map_err(|_| IndexError::root_not_found(root))?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl WorkspaceIndex for FsIndex {
    fn find_files(&self, name: &str) -> Result<Vec<String>, IndexError> {
        let wanted = candidate_file_names(name);
        let files = walk_matching_files(&self.root, &wanted, EXCLUDED_DIRS)?;
        debug!(name, root = %self.root.display(), found = files.len(), "indexed workspace");
        Ok(files.iter().map(|path| to_slash_path(path)).collect())
    }
}

/// Fixed file listing, for hosts that already hold one.
#[derive(Debug, Clone, Default)]
pub struct MemoryIndex {
    paths: Vec<String>,
}

impl MemoryIndex {
    pub fn new<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
        }
    }
}

impl WorkspaceIndex for MemoryIndex {
    fn find_files(&self, name: &str) -> Result<Vec<String>, IndexError> {
        let wanted = candidate_file_names(name);
        Ok(self
            .paths
            .iter()
            .filter(|path| wanted.iter().any(|w| w.as_str() == file_name(path)))
            .cloned()
            .collect())
    }
}
