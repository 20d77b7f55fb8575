use crate::error::Result;
use crate::model::{Class, Document};

/// Abstract interface for raw storage I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while ContentStore handles the "what" (ids, lookups, constraints).
pub trait StorageBackend {
    // --- Class Collection ---

    /// Load every stored class. A store that has never been written is empty.
    fn load_classes(&self) -> Result<Vec<Class>>;

    /// Replace the class collection.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn save_classes(&self, classes: &[Class]) -> Result<()>;

    // --- Document Collection ---

    /// Load every stored document, in insertion order.
    fn load_documents(&self) -> Result<Vec<Document>>;

    /// Replace the document collection, preserving the given order.
    /// MUST be atomic.
    fn save_documents(&self, documents: &[Document]) -> Result<()>;
}
