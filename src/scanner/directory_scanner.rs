use std::fs;
use std::path::{Path, PathBuf};

use snafu::{ResultExt, Snafu};
use tracing::debug;

use crate::tree::PathTree;

/// Suffix appended to folders whose contents were cut off by the depth limit.
const DEPTH_MARKER: &str = "(+)";

/// Walks a real directory tree and feeds every discovered entry into a
/// [`PathTree`].
#[derive(Debug, Clone)]
pub struct DirectoryScanner {
    show_hidden: bool,
    max_depth: usize,
}

impl DirectoryScanner {
    pub fn new(show_hidden: bool, max_depth: usize) -> Self {
        Self {
            show_hidden,
            max_depth,
        }
    }

    /// Scans `root` recursively, inserting tree paths relative to `.`.
    ///
    /// Entries are visited in name order so the rendered output is stable
    /// across platforms. A directory whose contents would exceed the depth
    /// limit is inserted with the `(+)` marker and not descended into.
    /// Symbolic links are not followed.
    pub fn scan(&self, root: &Path, tree: &mut PathTree) -> Result<(), ScanError> {
        debug!("Scanning directory: {}", root.display());
        self.scan_dir(root, ".", tree, 0)
    }

    fn scan_dir(
        &self,
        dir: &Path,
        tree_path: &str,
        tree: &mut PathTree,
        depth: usize,
    ) -> Result<(), ScanError> {
        let depth = depth + 1;

        let mut entries = fs::read_dir(dir)
            .context(ReadDirSnafu { path: dir })?
            .collect::<Result<Vec<_>, _>>()
            .context(EntrySnafu { path: dir })?;
        entries.sort_by_key(|entry| entry.file_name());

        for entry in entries {
            let name = entry.file_name().to_string_lossy().into_owned();
            if !self.show_hidden && name.starts_with('.') {
                continue;
            }

            let tree_path = format!("{tree_path}/{name}");
            let file_type = entry.file_type().context(EntrySnafu { path: entry.path() })?;

            if file_type.is_dir() {
                if depth + 1 > self.max_depth {
                    tree.add_folder(&format!("{tree_path}{DEPTH_MARKER}"));
                } else {
                    tree.add_folder(&tree_path);
                    self.scan_dir(&entry.path(), &tree_path, tree, depth)?;
                }
            } else {
                tree.add_file(&tree_path);
            }
        }

        Ok(())
    }
}

#[derive(Debug, Snafu)]
pub enum ScanError {
    #[snafu(display("Failed to read directory: {}", path.display()))]
    ReadDirError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Failed to read directory entry: {}", path.display()))]
    EntryError {
        path: PathBuf,
        source: std::io::Error,
    },
}
