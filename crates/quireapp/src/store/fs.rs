use super::content_store::ContentStore;
use super::fs_backend::FsBackend;
use std::path::{Path, PathBuf};

pub type FileStore = ContentStore<FsBackend>;

impl FileStore {
    /// A store rooted at `data_dir`. Nothing is created until the first write.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        ContentStore::with_backend(FsBackend::new(data_dir))
    }

    pub fn data_dir(&self) -> &Path {
        self.backend.root()
    }
}
