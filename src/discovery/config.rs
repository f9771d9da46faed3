/// Directories never descended into while indexing a workspace.
pub const EXCLUDED_DIRS: &[&str] = &[
    ".git",
    "node_modules",
    ".next",
    ".nuxt",
    "dist",
    "build",
];

/// Suffixes, in order, under which a base name is looked up.
pub const CANDIDATE_SUFFIXES: &[&str] = &[".js", ".spec.js", ".test.js"];

pub const TEST_MARKERS: &[&str] = &[".spec", ".test"];
