//! Test file classification.
//!
//! A path is a test file when its name ends in `.spec.js` / `.test.js`, or
//! when it is a `.js` file sitting directly inside a `__tests__` or `test`
//! directory. Only the immediate parent is considered.

const TEST_SUFFIXES: &[&str] = &[".spec.js", ".test.js"];

const TEST_DIRS: &[&str] = &["__tests__", "test"];

const SOURCE_EXTENSION: &str = ".js";

pub fn is_test_file(path: &str) -> bool {
    has_test_suffix(path) || is_in_test_dir(path)
}

fn has_test_suffix(path: &str) -> bool {
    TEST_SUFFIXES.iter().any(|suffix| path.ends_with(suffix))
}

fn is_in_test_dir(path: &str) -> bool {
    let Some((dir, file_name)) = path.rsplit_once('/') else {
        return false;
    };

    // The file needs a name in front of the extension.
    if file_name.len() <= SOURCE_EXTENSION.len() || !file_name.ends_with(SOURCE_EXTENSION) {
        return false;
    }

    // The parent segment must itself be preceded by a separator.
    match dir.rsplit_once('/') {
        Some((_, parent)) => TEST_DIRS.contains(&parent),
        None => false,
    }
}
