//! Lookups through the filesystem index

use super::test_utils::{abs, workspace};
use counterpart::discovery::{FsIndex, WorkspaceIndex};
use counterpart::error::{Error, FindError};
use counterpart::find_file;
use pretty_assertions::assert_eq;

#[test]
fn test_source_to_sibling_test() {
    let ws = workspace(&["src/foo.js", "src/foo.test.js", "src/bar.js"]);
    let index = FsIndex::new(ws.path()).unwrap();

    let found = find_file(&abs(ws.path(), "src/foo.js"), &index).unwrap();

    assert_eq!(found, abs(ws.path(), "src/foo.test.js"));
}

#[test]
fn test_test_to_source() {
    let ws = workspace(&["src/foo.js", "src/foo.spec.js"]);
    let index = FsIndex::new(ws.path()).unwrap();

    let found = find_file(&abs(ws.path(), "src/foo.spec.js"), &index).unwrap();

    assert_eq!(found, abs(ws.path(), "src/foo.js"));
}

#[test]
fn test_tests_directory_counterpart() {
    let ws = workspace(&["lib/parser.js", "lib/__tests__/parser.js"]);
    let index = FsIndex::new(ws.path()).unwrap();

    let found = find_file(&abs(ws.path(), "lib/parser.js"), &index).unwrap();
    assert_eq!(found, abs(ws.path(), "lib/__tests__/parser.js"));

    let back = find_file(&abs(ws.path(), "lib/__tests__/parser.js"), &index).unwrap();
    assert_eq!(back, abs(ws.path(), "lib/parser.js"));
}

#[test]
fn test_closest_of_several_tests() {
    let ws = workspace(&[
        "packages/a/foo.test.js",
        "packages/b/src/foo.js",
        "packages/b/src/foo.test.js",
        "test/foo.js",
    ]);
    let index = FsIndex::new(ws.path()).unwrap();

    let found = find_file(&abs(ws.path(), "packages/b/src/foo.js"), &index).unwrap();

    assert_eq!(found, abs(ws.path(), "packages/b/src/foo.test.js"));
}

#[test]
fn test_node_modules_are_ignored() {
    let ws = workspace(&["src/foo.js", "node_modules/foo/foo.test.js"]);
    let index = FsIndex::new(ws.path()).unwrap();

    let files = index.find_files("foo").unwrap();
    assert_eq!(files, vec![abs(ws.path(), "src/foo.js")]);

    let err = find_file(&abs(ws.path(), "src/foo.js"), &index).unwrap_err();
    assert!(matches!(err, Error::Find(FindError::NoMatch { .. })));
}

#[test]
fn test_active_file_outside_index() {
    let ws = workspace(&["src/foo.js", "src/foo.test.js"]);
    let index = FsIndex::new(ws.path()).unwrap();

    let err = find_file("/somewhere/else/foo.js", &index).unwrap_err();

    assert!(matches!(err, Error::Find(FindError::NotFound { .. })));
}

#[test]
fn test_other_extensions_are_not_candidates() {
    let ws = workspace(&["src/foo.ts", "src/foo.test.ts"]);
    let index = FsIndex::new(ws.path()).unwrap();

    let err = find_file(&abs(ws.path(), "src/foo.ts"), &index).unwrap_err();

    assert!(matches!(err, Error::Find(FindError::NotFound { .. })));
}
