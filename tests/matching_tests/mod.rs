//! Matching Test Suite
//!
//! Tests for resolving corresponding files against real workspaces and
//! in-memory listings.
//!
//! ## Structure
//! - `test_utils` - Shared workspace helpers
//! - `workspace` - Lookups through the filesystem index
//! - `ordering` - Candidate order and tie resolution
//! - `commands` - The open / open-side commands end to end


pub mod ordering;
pub mod workspace;
