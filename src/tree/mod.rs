//! In-memory file/folder tree, detached from any real filesystem.
//!
//! Operations take slash separated paths, normalize them and walk or create
//! nodes along the way. Removal cascades bottom-up and fires per-node hooks;
//! `describe` renders the whole tree as box-drawing ASCII art.

mod describe;
mod node;
mod path;
mod path_tree;

pub use node::{File, FileData, FileHook, Folder, FolderData, FolderHook, Meta};
pub use path::clean_path;
pub use path_tree::{PathTree, TreeOptions};
