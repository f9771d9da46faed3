//! Candidate order and tie resolution

use counterpart::discovery::MemoryIndex;
use counterpart::{find_best_match, find_file, FileDescriptor};
use pretty_assertions::assert_eq;

fn pick(target: &str, candidates: &[&str]) -> Option<String> {
    let target = FileDescriptor::new(target);
    let candidates: Vec<FileDescriptor> =
        candidates.iter().map(|path| FileDescriptor::new(*path)).collect();
    find_best_match(&target, &candidates).map(|i| candidates[i].path().to_string())
}

#[test]
fn test_last_equally_close_candidate_wins() {
    assert_eq!(
        pick("/p/src/foo.js", &["/p/src/foo.test.js", "/p/src/foo.spec.js"]),
        Some("/p/src/foo.spec.js".to_string())
    );
    assert_eq!(
        pick("/p/src/foo.js", &["/p/src/foo.spec.js", "/p/src/foo.test.js"]),
        Some("/p/src/foo.test.js".to_string())
    );
}

#[test]
fn test_equal_distance_in_different_directories() {
    assert_eq!(
        pick("/p/src/foo.js", &["/p/a/foo.test.js", "/p/b/foo.test.js"]),
        Some("/p/b/foo.test.js".to_string())
    );
}

#[test]
fn test_order_decides_with_ineligible_first_pick() {
    // A same-class first candidate is kept when nothing eligible follows.
    assert_eq!(
        pick("/p/src/foo.js", &["/p/lib/foo.js"]),
        Some("/p/lib/foo.js".to_string())
    );
    // An eligible candidate only displaces it when not farther away.
    assert_eq!(
        pick("/p/src/foo.js", &["/p/lib/foo.js", "/p/x/y/z/foo.test.js"]),
        Some("/p/lib/foo.js".to_string())
    );
    assert_eq!(
        pick("/p/src/foo.js", &["/p/lib/foo.js", "/p/test/foo.js"]),
        Some("/p/test/foo.js".to_string())
    );
}

#[test]
fn test_target_position_does_not_matter() {
    let expected = Some("/p/src/foo.test.js".to_string());
    assert_eq!(
        pick("/p/src/foo.js", &["/p/src/foo.js", "/p/src/foo.test.js"]),
        expected
    );
    assert_eq!(
        pick("/p/src/foo.js", &["/p/src/foo.test.js", "/p/src/foo.js"]),
        expected
    );
}

#[test]
fn test_index_order_is_preserved() {
    let index = MemoryIndex::new([
        "/p/src/foo.spec.js",
        "/p/src/foo.js",
        "/p/src/foo.test.js",
    ]);
    assert_eq!(
        find_file("/p/src/foo.js", &index).unwrap(),
        "/p/src/foo.test.js"
    );
}
