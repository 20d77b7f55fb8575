use super::backend::StorageBackend;
use crate::error::Result;
use crate::model::{Class, Document};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub const CLASSES_FILE: &str = "classes.json";
pub const DOCUMENTS_FILE: &str = "documents.json";

/// Filesystem backend: one pretty-printed JSON array per collection.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root)?;
        }
        Ok(())
    }

    fn load<T: DeserializeOwned>(&self, file: &str) -> Result<Vec<T>> {
        let path = self.root.join(file);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    fn save<T: Serialize>(&self, file: &str, items: &[T]) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(items)?;

        // Atomic write
        let stem = file.trim_end_matches(".json");
        let tmp_file = self.root.join(format!(".{}-{}.tmp", stem, Uuid::new_v4()));
        fs::write(&tmp_file, content)?;
        fs::rename(&tmp_file, self.root.join(file))?;

        tracing::trace!(file, count = items.len(), "saved collection");
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn load_classes(&self) -> Result<Vec<Class>> {
        self.load(CLASSES_FILE)
    }

    fn save_classes(&self, classes: &[Class]) -> Result<()> {
        self.save(CLASSES_FILE, classes)
    }

    fn load_documents(&self) -> Result<Vec<Document>> {
        self.load(DOCUMENTS_FILE)
    }

    fn save_documents(&self, documents: &[Document]) -> Result<()> {
        self.save(DOCUMENTS_FILE, documents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use tempfile::tempdir;

    #[test]
    fn missing_files_load_empty() {
        let dir = tempdir().unwrap();
        let backend = FsBackend::new(dir.path().join("not-yet"));
        assert!(backend.load_classes().unwrap().is_empty());
        assert!(backend.load_documents().unwrap().is_empty());
    }

    #[test]
    fn save_creates_directory_and_leaves_no_tmp_files() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("data");
        let backend = FsBackend::new(&root);

        backend.save_classes(&[Class::new("Pages", "pages")]).unwrap();

        assert!(root.join(CLASSES_FILE).exists());
        let leftovers: Vec<_> = fs::read_dir(&root)
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn documents_keep_their_order() {
        let dir = tempdir().unwrap();
        let backend = FsBackend::new(dir.path());
        let class = Uuid::new_v4();
        let docs = vec![
            Document::new(class, "B", "b"),
            Document::new(class, "A", "a"),
            Document::new(class, "C", "c").with_value("n", 3.0),
        ];

        backend.save_documents(&docs).unwrap();
        assert_eq!(backend.load_documents().unwrap(), docs);
    }

    #[test]
    fn corrupt_file_is_a_storage_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CLASSES_FILE), "{not json").unwrap();
        let backend = FsBackend::new(dir.path());

        let err = backend.load_classes().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Storage);
    }
}
