use hashlink::linked_hash_map::Entry;
use tracing::debug;

use crate::tree::node::{File, FileData, Folder, FolderData};
use crate::tree::path::clean_path;

/// Construction options for [`PathTree`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeOptions {
    /// Run an empty-folder pruning pass after every successful removal.
    pub auto_wash: bool,
}

/// Rooted tree of folders and files, addressed by `./`-prefixed paths.
///
/// The root folder `.` always exists and is never removable through the
/// public removal operations.
#[derive(Debug)]
pub struct PathTree {
    root: Folder,
    auto_wash: bool,
}

impl PathTree {
    pub fn new() -> Self {
        Self::with_options(TreeOptions::default())
    }

    pub fn with_options(options: TreeOptions) -> Self {
        Self {
            root: Folder::new(".", FolderData::default()),
            auto_wash: options.auto_wash,
        }
    }

    pub fn root(&self) -> &Folder {
        &self.root
    }

    /// Adds a folder, creating every missing folder along the path.
    pub fn add_folder(&mut self, path: &str) -> &mut Folder {
        self.add_folder_with(path, FolderData::default())
    }

    /// Adds a folder, applying `data` to the newly created final segment.
    ///
    /// Auto-created intermediate folders get empty data. Idempotent on
    /// existence: re-adding an existing folder neither duplicates the node
    /// nor touches its data.
    pub fn add_folder_with(&mut self, path: &str, data: FolderData) -> &mut Folder {
        let path = clean_path(path);
        let segments: Vec<&str> = path.split('/').collect();
        Self::create_chain(&mut self.root, &segments, data)
    }

    /// Adds a file under the folder named by the leading path segments,
    /// creating missing folders on the way.
    pub fn add_file(&mut self, path: &str) -> &mut File {
        self.add_file_with(path, FileData::default())
    }

    /// Adds a file carrying `data`. An existing file at the same path is
    /// replaced in place; its previous removal hook is dropped without
    /// firing.
    pub fn add_file_with(&mut self, path: &str, data: FileData) -> &mut File {
        let path = clean_path(path);
        let mut segments: Vec<&str> = path.split('/').collect();
        let file_part = segments.pop().unwrap_or(".");

        let folder = Self::create_chain(&mut self.root, &segments, FolderData::default());
        let file = File::new(file_part, data);
        match folder.files_mut().entry(file_part.to_string()) {
            Entry::Occupied(mut existing) => {
                *existing.get_mut() = file;
                existing.into_mut()
            }
            Entry::Vacant(vacant) => vacant.insert(file),
        }
    }

    /// Pure lookup; never creates nodes. `get_folder(".")` returns the root.
    pub fn get_folder(&self, path: &str) -> Option<&Folder> {
        let path = clean_path(path);
        let segments: Vec<&str> = path.split('/').collect();
        Self::resolve(&self.root, &segments)
    }

    /// Pure lookup; never creates nodes.
    pub fn get_file(&self, path: &str) -> Option<&File> {
        let path = clean_path(path);
        let mut segments: Vec<&str> = path.split('/').collect();
        let file_part = segments.pop()?;
        if segments.is_empty() {
            return None;
        }
        let parent = Self::resolve(&self.root, &segments)?;
        parent.files().get(file_part)
    }

    /// Removes a file, reporting whether a deletion happened. On success
    /// with auto-wash enabled, pruning runs before the removed file's hook
    /// fires.
    pub fn remove_file(&mut self, path: &str) -> bool {
        let path = clean_path(path);
        let mut segments: Vec<&str> = path.split('/').collect();
        let Some(file_part) = segments.pop() else {
            return false;
        };
        if segments.is_empty() {
            return false;
        }
        let Some(parent) = Self::resolve_mut(&mut self.root, &segments) else {
            return false;
        };
        let Some(file) = parent.files_mut().remove(file_part) else {
            return false;
        };

        if self.auto_wash {
            self.remove_empty_folders();
        }
        file.fire_on_remove();
        true
    }

    /// Removes a folder and everything beneath it. Hooks fire bottom-up,
    /// children strictly before their parent, folders before files at each
    /// level.
    pub fn remove_folder(&mut self, path: &str) -> bool {
        let path = clean_path(path);
        let mut segments: Vec<&str> = path.split('/').collect();
        let Some(folder_part) = segments.pop() else {
            return false;
        };
        if segments.is_empty() {
            // `.` names the root, which stays.
            return false;
        }
        let Some(parent) = Self::resolve_mut(&mut self.root, &segments) else {
            return false;
        };
        let Some(mut folder) = parent.folders_mut().remove(folder_part) else {
            return false;
        };

        Self::empty_folder(&mut folder);
        folder.fire_on_remove();
        if self.auto_wash {
            self.remove_empty_folders();
        }
        true
    }

    /// Removes every folder holding no child folders and no files, bottom-up,
    /// and returns how many were removed. A folder emptied by this same pass
    /// is caught, since a parent is checked only after all of its children
    /// have been visited. The root survives.
    pub fn remove_empty_folders(&mut self) -> usize {
        let removed = Self::prune_folder(&mut self.root);
        debug!("Pruned {} empty folders", removed);
        removed
    }

    // Segment 0 of a cleaned path is always `.`, the root itself.
    fn create_chain<'a>(
        root: &'a mut Folder,
        segments: &[&str],
        data: FolderData,
    ) -> &'a mut Folder {
        let mut data = Some(data);
        let last_index = segments.len().saturating_sub(1);
        let mut current = root;

        for (index, segment) in segments.iter().enumerate().skip(1) {
            current = match current.folders_mut().entry((*segment).to_string()) {
                Entry::Occupied(existing) => existing.into_mut(),
                Entry::Vacant(vacant) => {
                    let folder_data = if index == last_index {
                        data.take().unwrap_or_default()
                    } else {
                        FolderData::default()
                    };
                    vacant.insert(Folder::new(*segment, folder_data))
                }
            };
        }

        current
    }

    fn resolve<'a>(root: &'a Folder, segments: &[&str]) -> Option<&'a Folder> {
        let mut current = root;
        for segment in segments.iter().skip(1) {
            current = current.folders().get(*segment)?;
        }
        Some(current)
    }

    fn resolve_mut<'a>(root: &'a mut Folder, segments: &[&str]) -> Option<&'a mut Folder> {
        let mut current = root;
        for segment in segments.iter().skip(1) {
            current = current.folders_mut().get_mut(*segment)?;
        }
        Some(current)
    }

    // Children fire before their parent; folders drain before files.
    fn empty_folder(folder: &mut Folder) {
        while let Some((_, mut child)) = folder.folders_mut().pop_front() {
            Self::empty_folder(&mut child);
            child.fire_on_remove();
        }
        while let Some((_, file)) = folder.files_mut().pop_front() {
            file.fire_on_remove();
        }
    }

    fn prune_folder(folder: &mut Folder) -> usize {
        let mut removed = 0;

        let children = std::mem::take(folder.folders_mut());
        for (name, mut child) in children {
            removed += Self::prune_folder(&mut child);
            if child.is_empty() {
                removed += 1;
                child.fire_on_remove();
            } else {
                folder.folders_mut().insert(name, child);
            }
        }

        removed
    }
}

impl Default for PathTree {
    fn default() -> Self {
        Self::new()
    }
}
