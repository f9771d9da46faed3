use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::IndexError;

/// Collects every file under `root` whose name is one of `file_names`,
/// skipping `excluded_dirs` anywhere below the root. Entries are visited in
/// file-name order so repeated walks return the same sequence.
pub fn walk_matching_files(
    root: &Path,
    file_names: &[String],
    excluded_dirs: &[&str],
) -> Result<Vec<PathBuf>, IndexError> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| {
            if e.depth() == 0 || !e.file_type().is_dir() {
                return true;
            }
            let name = e.file_name().to_string_lossy();
            !excluded_dirs.contains(&name.as_ref())
        })
    {
        let entry = entry.map_err(|e| IndexError::DirectoryScan {
            path: root.to_path_buf(),
            source: e,
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        if file_names.iter().any(|wanted| wanted.as_str() == name.as_ref()) {
            files.push(entry.path().to_path_buf());
        }
    }

    Ok(files)
}

/// Renders a path with `/` separators.
pub fn to_slash_path(path: &Path) -> String {
    let rendered = path.to_string_lossy();
    if std::path::MAIN_SEPARATOR == '/' {
        rendered.into_owned()
    } else {
        rendered.replace(std::path::MAIN_SEPARATOR, "/")
    }
}
