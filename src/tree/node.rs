use derive_more::Debug;
use hashlink::LinkedHashMap;

/// Open attribute bag attached to every node, in insertion order.
pub type Meta = LinkedHashMap<String, String>;

/// Hook fired exactly once when a folder is removed from the tree.
pub type FolderHook = Box<dyn FnOnce(&Folder)>;
/// Hook fired exactly once when a file is removed from the tree.
pub type FileHook = Box<dyn FnOnce(&File)>;

/// Attributes supplied when creating a folder.
#[derive(Debug, Default)]
pub struct FolderData {
    pub meta: Meta,
    #[debug(skip)]
    pub on_remove: Option<FolderHook>,
}

/// Attributes supplied when creating a file.
#[derive(Debug, Default)]
pub struct FileData {
    pub meta: Meta,
    #[debug(skip)]
    pub on_remove: Option<FileHook>,
}

/// Internal tree node owning its child folders and files, keyed by name in
/// insertion order.
#[derive(Debug)]
pub struct Folder {
    name: String,
    meta: Meta,
    #[debug(skip)]
    on_remove: Option<FolderHook>,
    folders: LinkedHashMap<String, Folder>,
    files: LinkedHashMap<String, File>,
}

impl Folder {
    pub(crate) fn new(name: impl Into<String>, data: FolderData) -> Self {
        Self {
            name: name.into(),
            meta: data.meta,
            on_remove: data.on_remove,
            folders: LinkedHashMap::new(),
            files: LinkedHashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn meta(&self) -> &Meta {
        &self.meta
    }

    pub fn meta_mut(&mut self) -> &mut Meta {
        &mut self.meta
    }

    pub fn set_on_remove(&mut self, hook: impl FnOnce(&Folder) + 'static) {
        self.on_remove = Some(Box::new(hook));
    }

    pub fn folders(&self) -> &LinkedHashMap<String, Folder> {
        &self.folders
    }

    pub fn files(&self) -> &LinkedHashMap<String, File> {
        &self.files
    }

    /// A folder holding zero child folders and zero files.
    pub fn is_empty(&self) -> bool {
        self.folders.is_empty() && self.files.is_empty()
    }

    pub(crate) fn folders_mut(&mut self) -> &mut LinkedHashMap<String, Folder> {
        &mut self.folders
    }

    pub(crate) fn files_mut(&mut self) -> &mut LinkedHashMap<String, File> {
        &mut self.files
    }

    /// Consumes the node and fires its removal hook, if set. The subtree must
    /// already be torn down so the hook observes the node in its removed
    /// state.
    pub(crate) fn fire_on_remove(mut self) {
        if let Some(hook) = self.on_remove.take() {
            hook(&self);
        }
    }
}

/// Leaf tree node.
#[derive(Debug)]
pub struct File {
    name: String,
    meta: Meta,
    #[debug(skip)]
    on_remove: Option<FileHook>,
}

impl File {
    pub(crate) fn new(name: impl Into<String>, data: FileData) -> Self {
        Self {
            name: name.into(),
            meta: data.meta,
            on_remove: data.on_remove,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn meta(&self) -> &Meta {
        &self.meta
    }

    pub fn meta_mut(&mut self) -> &mut Meta {
        &mut self.meta
    }

    pub fn set_on_remove(&mut self, hook: impl FnOnce(&File) + 'static) {
        self.on_remove = Some(Box::new(hook));
    }

    pub(crate) fn fire_on_remove(mut self) {
        if let Some(hook) = self.on_remove.take() {
            hook(&self);
        }
    }
}
