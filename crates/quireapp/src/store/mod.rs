//! # Storage Layer
//!
//! This module defines the storage abstraction for quire. The [`DataStore`]
//! trait is everything the command layer needs from persistence; the rest of
//! the crate never touches files or collections directly.
//!
//! ## Two Layers
//!
//! 1. [`backend::StorageBackend`]: raw I/O. Loads and saves the class and
//!    document collections, nothing more.
//! 2. [`content_store::ContentStore`]: the "what". Assigns ids and
//!    timestamps, answers lookups, pages lists, and enforces the storage-level
//!    slug constraints.
//!
//! ## Slug Constraints
//!
//! The command layer checks slug uniqueness before writing so it can report a
//! precise error. The store repeats that check against the collection it is
//! about to save, within the same load/save sequence, and that check is the
//! authoritative one:
//!
//! - Class slugs: unique across all classes.
//! - Document slugs: unique per [`SlugScope`] (parent, or class for top-level
//!   documents).
//!
//! ## Deletion
//!
//! Deleting an id that is not stored is not an error. The outcome is reported
//! as [`Deletion::AlreadyAbsent`] so callers can tell, but nothing fails.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: `classes.json` + `documents.json` under a data
//!   directory.
//! - [`memory::InMemoryStore`]: for testing logic without filesystem I/O.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── quire.toml        # Configuration (optional)
//! ├── classes.json      # All classes
//! └── documents.json    # All documents, in insertion order
//! ```

use crate::error::Result;
use crate::model::{Class, Document, SlugScope};
use crate::pagination;
use uuid::Uuid;

pub mod backend;
pub mod content_store;
pub mod fs;
pub mod fs_backend;
pub mod mem_backend;
pub mod memory;

/// Outcome of an idempotent delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deletion {
    Removed,
    AlreadyAbsent,
}

/// Which slice of a class's documents to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListParams {
    pub class_id: Uuid,
    /// 1-indexed; 0 is treated as 1
    pub page: u64,
    /// 0 means no limit
    pub per_page: u64,
}

impl ListParams {
    pub fn new(class_id: Uuid, page: u64, per_page: u64) -> Self {
        Self {
            class_id,
            page,
            per_page,
        }
    }

    pub fn offset(&self) -> u64 {
        pagination::offset(self.page, self.per_page)
    }
}

/// One page of documents plus the size of the whole list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentList {
    pub documents: Vec<Document>,
    pub total: u64,
}

/// Abstract interface for class and document storage.
///
/// Lookup misses are [`QuireError::NotFound`](crate::error::QuireError::NotFound);
/// every other failure is a storage error and is passed through unchanged.
pub trait DataStore {
    // --- Classes ---

    /// Remove a class. Absent ids are not an error.
    fn delete_class(&mut self, id: &Uuid) -> Result<Deletion>;

    /// All classes, ordered by name
    fn all_classes(&self) -> Result<Vec<Class>>;

    fn class_by_id(&self, id: &Uuid) -> Result<Class>;

    fn class_by_slug(&self, slug: &str) -> Result<Class>;

    /// Store a new class, assigning its id and timestamps.
    fn insert_class(&mut self, class: &mut Class) -> Result<()>;

    /// Replace a stored class, refreshing its `updated` timestamp.
    fn update_class(&mut self, class: &mut Class) -> Result<()>;

    // --- Documents ---

    /// Remove a document. Absent ids are not an error.
    fn delete_document(&mut self, id: &Uuid) -> Result<Deletion>;

    fn document_by_id(&self, id: &Uuid) -> Result<Document>;

    /// The document with `slug` among the siblings of `scope`.
    fn document_by_slug(&self, scope: SlugScope, slug: &str) -> Result<Document>;

    /// A page of a class's documents, in insertion order.
    fn list_documents(&self, params: &ListParams) -> Result<DocumentList>;

    /// Store a new document, assigning its id and timestamps.
    fn insert_document(&mut self, doc: &mut Document) -> Result<()>;

    /// Replace a stored document, refreshing its `updated` timestamp.
    fn update_document(&mut self, doc: &mut Document) -> Result<()>;
}
