//! # Command Layer
//!
//! This module contains the **core business logic** of quire. Each group of
//! operations lives in its own submodule and implements plain functions over a
//! [`DataStore`](crate::store::DataStore).
//!
//! ## Role and Responsibilities
//!
//! Commands are where the real work happens:
//! - Validate classes and documents before they reach the store
//! - Check slug uniqueness and report the conflicting record
//! - Resolve select options and assemble paged listings
//! - Return a structured [`CmdResult`]
//!
//! ## What Commands Do NOT Do
//!
//! - **Any I/O**: no stdout, stderr or terminal concerns
//! - **Argument parsing**: that's the CLI layer's job
//! - **Exit codes**: return `Result`, let the caller decide
//!
//! ## Validation Order
//!
//! Inserts and updates always run the same sequence, stopping at the first
//! failure:
//!
//! 1. Required attributes ([`validation::validate_class`],
//!    [`validation::validate_document`]) → `Validation`
//! 2. Identity: an id on insert, or none on update → `IdentityConflict`
//! 3. Slug lookup in the record's scope → `Uniqueness` when a *different*
//!    record holds it
//! 4. The store write, which repeats the slug check on the data it saves
//!
//! ## Testing Strategy
//!
//! **This is where the lion's share of testing lives.** Command tests use
//! `InMemoryStore` and the fixtures in [`crate::store::memory::fixtures`].
//!
//! ## Command Modules
//!
//! - [`classes`]: insert, update, put, get, list and delete classes
//! - [`documents`]: insert, update, add, edit, get and delete documents
//! - [`browse`]: a page of a class's documents as a table with page links
//! - [`options`]: resolve the option list of a select field
//! - [`validation`]: the required-attribute and slug checks shared by the above

use crate::config::QuireConfig;
use crate::fields::FieldOption;
use crate::model::{Class, Document};
use crate::pagination::PageLink;
use crate::table::Table;
use serde::Serialize;

pub mod browse;
pub mod classes;
pub mod documents;
pub mod options;
pub mod validation;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// A page of documents rendered for display.
#[derive(Debug, Clone, Serialize)]
pub struct Listing {
    pub class: Class,
    pub table: Table,
    pub links: Vec<PageLink>,
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
}

#[derive(Debug, Default, Serialize)]
pub struct CmdResult {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub affected_classes: Vec<Class>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub affected_documents: Vec<Document>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub listed_classes: Vec<Class>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub listed_documents: Vec<Document>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<FieldOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listing: Option<Listing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<QuireConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_classes(mut self, classes: Vec<Class>) -> Self {
        self.listed_classes = classes;
        self
    }

    pub fn with_listed_documents(mut self, documents: Vec<Document>) -> Self {
        self.listed_documents = documents;
        self
    }

    pub fn with_options(mut self, options: Vec<FieldOption>) -> Self {
        self.options = options;
        self
    }

    pub fn with_listing(mut self, listing: Listing) -> Self {
        self.listing = Some(listing);
        self
    }

    pub fn with_config(mut self, config: QuireConfig) -> Self {
        self.config = Some(config);
        self
    }
}
