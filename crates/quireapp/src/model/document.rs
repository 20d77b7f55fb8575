use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;

use super::Value;

/// A content record of some class, optionally nested under a parent document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(default)]
    pub class_id: Option<Uuid>,
    /// `None` for top-level documents
    #[serde(default)]
    pub parent_id: Option<Uuid>,
    #[serde(default)]
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub created: DateTime<Utc>,
    #[serde(default)]
    pub updated: DateTime<Utc>,
    #[serde(default)]
    pub published: Option<DateTime<Utc>>,
    /// Schema-defined values keyed by field name
    #[serde(default)]
    pub values: BTreeMap<String, Value>,
}

impl Document {
    pub fn new(class_id: Uuid, title: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            class_id: Some(class_id),
            title: title.into(),
            slug: slug.into(),
            ..Default::default()
        }
    }

    pub fn with_parent(mut self, parent_id: Uuid) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    pub fn with_value(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// The sibling group this document's slug must be unique in.
    ///
    /// `None` only when neither class nor parent is set, which validation
    /// rejects before any lookup happens.
    pub fn slug_scope(&self) -> Option<SlugScope> {
        match (self.parent_id, self.class_id) {
            (Some(parent), _) => Some(SlugScope::Parent(parent)),
            (None, Some(class)) => Some(SlugScope::Class(class)),
            (None, None) => None,
        }
    }

    /// Resolves an attribute by name.
    ///
    /// Synthetic attributes come first:
    ///
    /// | Name | Value |
    /// |------|-------|
    /// | `id`, `class_id`, `parent_id` | `Reference` (absent when unset) |
    /// | `title`, `slug` | `Text` |
    /// | `published`, `created`, `updated` | `Timestamp` |
    ///
    /// Any other name is looked up in [`Document::values`]. Returns `None`
    /// when nothing resolves.
    pub fn value(&self, name: &str) -> Option<Value> {
        match name {
            "id" => self.id.map(Value::Reference),
            "class_id" => self.class_id.map(Value::Reference),
            "parent_id" => self.parent_id.map(Value::Reference),
            "title" => Some(Value::Text(self.title.clone())),
            "slug" => Some(Value::Text(self.slug.clone())),
            "published" => self.published.map(Value::Timestamp),
            "created" => Some(Value::Timestamp(self.created)),
            "updated" => Some(Value::Timestamp(self.updated)),
            _ => self.values.get(name).cloned(),
        }
    }
}

/// Uniqueness boundary for document slugs.
///
/// Documents with a parent are scoped by that parent; top-level documents by
/// their class. The two scopes are disjoint: a top-level `about` and a child
/// `about` of the same class never collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlugScope {
    Class(Uuid),
    Parent(Uuid),
}

impl SlugScope {
    pub fn contains(&self, doc: &Document) -> bool {
        match self {
            SlugScope::Class(class_id) => {
                doc.parent_id.is_none() && doc.class_id == Some(*class_id)
            }
            SlugScope::Parent(parent_id) => doc.parent_id == Some(*parent_id),
        }
    }
}

impl fmt::Display for SlugScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlugScope::Class(id) => write!(f, "class {}", id),
            SlugScope::Parent(id) => write!(f, "parent {}", id),
        }
    }
}
