//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for all quire operations, regardless of the UI being used.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Supplies configuration** (page size, pagination labels) to commands
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: that belongs in `commands/*.rs`
//! - **I/O operations**: no stdout, stderr, or file formatting
//! - **Presentation concerns**: returns data structures, not strings
//!
//! ## Generic Over DataStore
//!
//! `QuireApi<S: DataStore>` is generic over the storage backend:
//! - Production: `QuireApi<FileStore>`
//! - Testing: `QuireApi<InMemoryStore>`
//!
//! ## Testing Strategy
//!
//! API tests verify that arguments reach the right command. Command logic is
//! tested in the command modules, storage behavior in the store modules.

use crate::commands::{self, CmdResult};
use crate::config::QuireConfig;
use crate::error::Result;
use crate::fields::FieldOption;
use crate::fields::Field;
use crate::model::{Class, Document};
use crate::store::DataStore;
use uuid::Uuid;

pub use crate::commands::documents::{DocumentEdit, NewDocument, ParentChange};

/// The main API facade for quire operations.
pub struct QuireApi<S: DataStore> {
    store: S,
    config: QuireConfig,
}

impl<S: DataStore> QuireApi<S> {
    pub fn new(store: S, config: QuireConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &QuireConfig {
        &self.config
    }

    // --- Classes ---

    pub fn insert_class(&mut self, class: Class) -> Result<CmdResult> {
        commands::classes::insert(&mut self.store, class)
    }

    pub fn update_class(&mut self, class: Class) -> Result<CmdResult> {
        commands::classes::update(&mut self.store, class)
    }

    pub fn put_class(&mut self, class: Class) -> Result<CmdResult> {
        commands::classes::put(&mut self.store, class)
    }

    pub fn get_class(&self, slug: &str) -> Result<CmdResult> {
        commands::classes::get(&self.store, slug)
    }

    pub fn list_classes(&self) -> Result<CmdResult> {
        commands::classes::list(&self.store)
    }

    pub fn delete_class(&mut self, slug: &str) -> Result<CmdResult> {
        commands::classes::delete(&mut self.store, slug)
    }

    pub fn delete_class_by_id(&mut self, id: &Uuid) -> Result<CmdResult> {
        commands::classes::delete_by_id(&mut self.store, id)
    }

    // --- Documents ---

    pub fn insert_document(&mut self, doc: Document) -> Result<CmdResult> {
        commands::documents::insert(&mut self.store, doc)
    }

    pub fn update_document(&mut self, doc: Document) -> Result<CmdResult> {
        commands::documents::update(&mut self.store, doc)
    }

    pub fn add_document(&mut self, class_slug: &str, input: NewDocument) -> Result<CmdResult> {
        commands::documents::add(&mut self.store, class_slug, input)
    }

    pub fn edit_document(&mut self, id: &Uuid, edit: DocumentEdit) -> Result<CmdResult> {
        commands::documents::edit(&mut self.store, id, edit)
    }

    pub fn get_document(&self, id: &Uuid) -> Result<CmdResult> {
        commands::documents::get(&self.store, id)
    }

    pub fn delete_document(&mut self, id: &Uuid) -> Result<CmdResult> {
        commands::documents::delete(&mut self.store, id)
    }

    // --- Listing ---

    /// A page of a class's documents; `per_page` defaults to the configured size.
    pub fn browse(&self, class_slug: &str, page: u64, per_page: Option<u64>) -> Result<CmdResult> {
        commands::browse::run(&self.store, &self.config, class_slug, page, per_page)
    }

    pub fn field_options(&self, class_slug: &str, field_name: &str) -> Result<CmdResult> {
        commands::options::run(&self.store, class_slug, field_name)
    }

    pub fn resolve_options(&self, field: &Field) -> Result<Vec<FieldOption>> {
        commands::options::resolve(&self.store, field)
    }

    pub fn show_config(&self) -> CmdResult {
        CmdResult::default().with_config(self.config.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    fn make_api() -> QuireApi<InMemoryStore> {
        QuireApi::new(InMemoryStore::new(), QuireConfig::default())
    }

    #[test]
    fn class_round_trip_through_api() {
        let mut api = make_api();
        api.put_class(Class::new("Pages", "pages")).unwrap();

        let res = api.get_class("pages").unwrap();
        assert_eq!(res.listed_classes[0].name, "Pages");
        assert_eq!(api.list_classes().unwrap().listed_classes.len(), 1);

        api.delete_class("pages").unwrap();
        assert!(api.list_classes().unwrap().listed_classes.is_empty());
        assert!(api.delete_class("pages").unwrap_err().is_not_found());
    }

    #[test]
    fn class_delete_by_id_is_repeatable() {
        let mut api = make_api();
        let res = api.put_class(Class::new("Pages", "pages")).unwrap();
        let id = res.affected_classes[0].id.unwrap();

        api.delete_class_by_id(&id).unwrap();
        let again = api.delete_class_by_id(&id).unwrap();
        assert!(again.messages[0].content.starts_with("Class already gone"));
    }

    #[test]
    fn documents_through_api() {
        let mut api = make_api();
        api.insert_class(Class::new("Pages", "pages")).unwrap();
        let res = api
            .add_document(
                "pages",
                NewDocument {
                    title: "Home".into(),
                    slug: "home".into(),
                    ..Default::default()
                },
            )
            .unwrap();
        let id = res.affected_documents[0].id.unwrap();

        api.edit_document(
            &id,
            DocumentEdit {
                title: Some("Start".into()),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(api.get_document(&id).unwrap().listed_documents[0].title, "Start");

        let listing = api.browse("pages", 1, None).unwrap().listing.unwrap();
        assert_eq!(listing.table.rows[0].cells, vec!["Start"]);

        api.delete_document(&id).unwrap();
        api.delete_document(&id).unwrap();
        assert!(api.get_document(&id).unwrap_err().is_not_found());
    }

    #[test]
    fn browse_uses_configured_page_size() {
        let config = QuireConfig {
            per_page: 3,
            ..Default::default()
        };
        let mut api = QuireApi::new(InMemoryStore::new(), config);
        let class = api.insert_class(Class::new("Posts", "posts")).unwrap().affected_classes[0]
            .id
            .unwrap();
        for i in 0..7 {
            api.insert_document(Document::new(class, format!("P{}", i), format!("p{}", i)))
                .unwrap();
        }

        let listing = api.browse("posts", 1, None).unwrap().listing.unwrap();
        assert_eq!(listing.per_page, 3);
        assert_eq!(listing.table.rows.len(), 3);
    }

    #[test]
    fn show_config_returns_effective_values() {
        let res = make_api().show_config();
        assert_eq!(res.config, Some(QuireConfig::default()));
    }
}
