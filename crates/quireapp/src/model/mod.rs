//! # Domain Model
//!
//! The content model has two levels:
//!
//! - [`Class`]: a content type. Its ordered [`Field`](crate::fields::Field)
//!   list is the schema, and `table_labels` / `table_fields` describe the list
//!   view.
//! - [`Document`]: a record of one class. Besides the synthetic attributes
//!   (`id`, `title`, `slug`, timestamps) it holds a map of [`Value`]s keyed by
//!   field name.
//!
//! Documents may be nested: a document with a `parent_id` is a child of that
//! document, which is how tree-shaped content (pages under pages) is built.
//!
//! ## Identity
//!
//! Ids are assigned by the store on insert and are `None` before that. A record
//! that arrives at insert with an id, or at update without one, is an identity
//! conflict.
//!
//! ## Slugs
//!
//! Class slugs are unique across all classes. Document slugs are unique within
//! a [`SlugScope`]: siblings under the same parent, or top-level documents of
//! the same class.

mod class;
mod document;
mod value;

pub use class::{Class, DEFAULT_COLUMN, DEFAULT_LABEL};
pub use document::{Document, SlugScope};
pub use value::Value;
