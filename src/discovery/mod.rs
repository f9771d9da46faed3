pub mod config;
pub mod index;
pub mod naming;
pub mod utils;

pub use index::{FsIndex, MemoryIndex, WorkspaceIndex};
pub use naming::base_name;
