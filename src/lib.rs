//! Counterpart
//!
//! Finds the file that corresponds to a JavaScript source file: its test
//! when given an implementation, its implementation when given a test.
//! Candidates sharing a base name are ranked by test classification and
//! directory proximity.

pub mod classifier;
pub mod cli;
pub mod commands;
pub mod discovery;
pub mod editor;
pub mod error;
pub mod finder;
pub mod logging;
pub mod matcher;
pub mod pane;

pub use classifier::is_test_file;
pub use commands::{open_test_file, OpenOutcome, OpenRequest};
pub use error::{Error, Result};
pub use finder::find_file;
pub use matcher::{directory_distance, find_best_match, FileDescriptor};
pub use pane::{other_pane, Pane};
