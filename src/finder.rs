use tracing::debug;

use crate::discovery::{base_name, WorkspaceIndex};
use crate::error::{FindError, Result};
use crate::matcher::FileDescriptor;

/// Resolves the counterpart of `active` using the files `index` knows about.
///
/// Fails with [`FindError::NotFound`] when the index does not list `active`
/// itself, and with [`FindError::NoMatch`] when no candidate qualifies.
/// Index failures are passed through unchanged.
pub fn find_file<I>(active: &str, index: &I) -> Result<String>
where
    I: WorkspaceIndex + ?Sized,
{
    let name = base_name(active);
    let all_files = index.find_files(name)?;
    debug!(active, name, candidates = all_files.len(), "looking up counterpart");

    let file = all_files
        .iter()
        .find(|path| path.as_str() == active)
        .ok_or_else(|| FindError::not_found(active))?;

    let candidates: Vec<FileDescriptor> = all_files.iter().map(FileDescriptor::new).collect();
    let mut target = FileDescriptor::new(file.as_str());
    target.find_corresponding_file(&candidates);

    let corresponding = target
        .corresponding_file(&candidates)
        .ok_or_else(|| FindError::no_match(active))?;

    Ok(corresponding.path().to_string())
}
