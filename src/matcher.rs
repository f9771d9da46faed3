//! Selects the counterpart of a file among same-named candidates.

use std::cell::OnceCell;

use tracing::{debug, trace};

use crate::classifier::is_test_file;

/// One candidate path taking part in a matching request.
///
/// The test classification is computed on first use and cached. The chosen
/// counterpart is stored as an index into the candidate slice that was
/// searched, not as an owned descriptor.
#[derive(Debug, Clone)]
pub struct FileDescriptor {
    path: String,
    is_test: OnceCell<bool>,
    corresponding: Option<usize>,
}

impl FileDescriptor {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            is_test: OnceCell::new(),
            corresponding: None,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn is_test(&self) -> bool {
        *self.is_test.get_or_init(|| is_test_file(&self.path))
    }

    pub fn corresponding_index(&self) -> Option<usize> {
        self.corresponding
    }

    /// Resolves the stored counterpart against the slice it was chosen from.
    pub fn corresponding_file<'a>(
        &self,
        candidates: &'a [FileDescriptor],
    ) -> Option<&'a FileDescriptor> {
        self.corresponding.and_then(|index| candidates.get(index))
    }

    /// Runs the match and records the winner. When nothing qualifies the
    /// link is left untouched.
    pub fn find_corresponding_file(&mut self, candidates: &[FileDescriptor]) {
        if let Some(index) = find_best_match(self, candidates) {
            self.corresponding = Some(index);
        }
    }
}

/// Left fold over `candidates` in input order.
///
/// The first candidate that is not the target itself is adopted outright.
/// After that a candidate can only replace the current best when exactly one
/// of target and candidate is a test file, and only when the current best is
/// not strictly closer to the target. Equal distance goes to the later
/// candidate.
pub fn find_best_match(
    target: &FileDescriptor,
    candidates: &[FileDescriptor],
) -> Option<usize> {
    debug!(path = %target.path, candidates = candidates.len(), "finding best match");

    candidates
        .iter()
        .enumerate()
        .fold(None, |best, (index, candidate)| {
            trace!(path = %target.path, candidate = %candidate.path, "comparing");

            if candidate.path == target.path {
                return best;
            }

            let Some(best_index) = best else {
                return Some(index);
            };

            if target.is_test() == candidate.is_test() {
                return best;
            }

            let best_distance = directory_distance(&target.path, &candidates[best_index].path);
            let candidate_distance = directory_distance(&target.path, &candidate.path);

            if best_distance < candidate_distance {
                return best;
            }

            Some(index)
        })
}

/// Number of steps between the parent directories of `a` and `b`: every
/// `..` needed to climb out of `a`'s directory plus every segment needed to
/// descend into `b`'s. Siblings in the same directory are at distance 0.
pub fn directory_distance(a: &str, b: &str) -> usize {
    let from = parent_segments(a);
    let to = parent_segments(b);

    let common = from
        .iter()
        .zip(to.iter())
        .take_while(|(left, right)| left == right)
        .count();

    (from.len() - common) + (to.len() - common)
}

fn parent_segments(path: &str) -> Vec<&str> {
    let dir = path.rsplit_once('/').map_or("", |(dir, _)| dir);

    let mut segments: Vec<&str> = Vec::new();
    for segment in dir.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if segments.last().is_some_and(|last| *last != "..") {
                    segments.pop();
                } else {
                    segments.push(segment);
                }
            }
            _ => segments.push(segment),
        }
    }
    segments
}
