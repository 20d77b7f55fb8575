//! # quireapp
//!
//! The content-modeling core behind the `quire` CLI. Administrators define
//! **classes** (content types) as an ordered list of typed **fields**, then
//! create **documents** of those classes. Documents can nest under other
//! documents, which is how tree-shaped content is built.
//!
//! ## Architecture
//!
//! ```text
//! UI (CLI, web, ...)
//!     │
//!     ▼
//! api::QuireApi<S>        thin facade, supplies configuration
//!     │
//!     ▼
//! commands::*             validation, uniqueness, browse, options
//!     │
//!     ▼
//! store::DataStore        ContentStore<B> over MemBackend / FsBackend
//! ```
//!
//! Pure helpers sit beside that stack and are usable on their own:
//!
//! - [`fields`]: field types, value formatting and option lists
//! - [`pagination`]: the shouldered window of page links
//! - [`table`]: the list-view projection of a page of documents
//!
//! ## Example
//!
//! ```
//! use quireapp::api::QuireApi;
//! use quireapp::config::QuireConfig;
//! use quireapp::model::{Class, Document};
//! use quireapp::store::memory::InMemoryStore;
//!
//! let mut api = QuireApi::new(InMemoryStore::new(), QuireConfig::default());
//! let res = api.insert_class(Class::new("Pages", "pages")).unwrap();
//! let class_id = res.affected_classes[0].id.unwrap();
//!
//! api.insert_document(Document::new(class_id, "Home", "home")).unwrap();
//! let listing = api.browse("pages", 1, None).unwrap().listing.unwrap();
//! assert_eq!(listing.table.rows[0].cells, vec!["Home"]);
//! ```

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod fields;
pub mod init;
pub mod model;
pub mod pagination;
pub mod store;
pub mod table;
