use super::content_store::ContentStore;
use super::mem_backend::MemBackend;

pub type InMemoryStore = ContentStore<MemBackend>;

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        ContentStore::with_backend(MemBackend::new())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::fields::{Field, FieldKind, OptionSource};
    use crate::model::{Class, Document};
    use crate::store::DataStore;
    use uuid::Uuid;

    /// Builds a populated store for command tests.
    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_class(mut self, class: Class) -> Self {
            let mut class = class;
            self.store.insert_class(&mut class).unwrap();
            self
        }

        /// A `Posts` class with a date field and a two-column table.
        pub fn with_posts(self) -> Self {
            self.with_class(
                Class::new("Posts", "posts")
                    .with_field(Field::new(
                        "date",
                        "Date",
                        FieldKind::Date {
                            bounds: Default::default(),
                            format: Some("%b %-d, %Y".into()),
                        },
                    ))
                    .with_field(Field::new(
                        "status",
                        "Status",
                        FieldKind::Select {
                            options: OptionSource::Static("draft|Draft\nlive|Live".into()),
                        },
                    ))
                    .with_table("Title Date", "title date"),
            )
        }

        /// `count` top-level documents in the class with `class_slug`.
        pub fn with_documents(mut self, class_slug: &str, count: usize) -> Self {
            let class_id = self.class_id(class_slug);
            for i in 0..count {
                let mut doc = Document::new(
                    class_id,
                    format!("Document {}", i + 1),
                    format!("document-{}", i + 1),
                );
                self.store.insert_document(&mut doc).unwrap();
            }
            self
        }

        pub fn with_document(mut self, doc: Document) -> Self {
            let mut doc = doc;
            self.store.insert_document(&mut doc).unwrap();
            self
        }

        pub fn class_id(&self, slug: &str) -> Uuid {
            self.store.class_by_slug(slug).unwrap().id.unwrap()
        }
    }
}
