use super::backend::StorageBackend;
use crate::error::{QuireError, Result};
use crate::model::{Class, Document};
use std::cell::RefCell;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since quire is single-threaded,
/// letting the `StorageBackend` trait take `&self` everywhere.
#[derive(Default)]
pub struct MemBackend {
    classes: RefCell<Vec<Class>>,
    documents: RefCell<Vec<Document>>,
    simulate_write_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    fn check_writable(&self) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(QuireError::Storage("Simulated write error".to_string()));
        }
        Ok(())
    }
}

impl StorageBackend for MemBackend {
    fn load_classes(&self) -> Result<Vec<Class>> {
        Ok(self.classes.borrow().clone())
    }

    fn save_classes(&self, classes: &[Class]) -> Result<()> {
        self.check_writable()?;
        *self.classes.borrow_mut() = classes.to_vec();
        Ok(())
    }

    fn load_documents(&self) -> Result<Vec<Document>> {
        Ok(self.documents.borrow().clone())
    }

    fn save_documents(&self, documents: &[Document]) -> Result<()> {
        self.check_writable()?;
        *self.documents.borrow_mut() = documents.to_vec();
        Ok(())
    }
}
