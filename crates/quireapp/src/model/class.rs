use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::fields::Field;

/// Header used when a class defines no table labels.
pub const DEFAULT_LABEL: &str = "Title";

/// Column used when a class defines no table fields.
pub const DEFAULT_COLUMN: &str = "title";

/// A content type: the schema documents of this class are entered against,
/// plus the labels used to present them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Class {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub name: String,
    #[serde(default)]
    pub singular_name: String,
    pub slug: String,
    #[serde(default)]
    pub menu_label: String,
    #[serde(default)]
    pub add_item_label: String,
    #[serde(default)]
    pub new_item_label: String,
    #[serde(default)]
    pub edit_item_label: String,
    /// Whitespace-separated list-view column headers
    #[serde(default)]
    pub table_labels: String,
    /// Whitespace-separated attribute names, parallel to `table_labels`
    #[serde(default)]
    pub table_fields: String,
    #[serde(default)]
    pub created: DateTime<Utc>,
    #[serde(default)]
    pub updated: DateTime<Utc>,
    /// Display and form order is array order
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl Class {
    pub fn new(name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slug: slug.into(),
            ..Default::default()
        }
    }

    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_table(mut self, labels: &str, fields: &str) -> Self {
        self.table_labels = labels.to_string();
        self.table_fields = fields.to_string();
        self
    }

    /// Looks up a schema field by name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// List-view headers; a single `Title` when none are configured.
    pub fn labels(&self) -> Vec<&str> {
        let labels: Vec<&str> = self.table_labels.split_whitespace().collect();
        if labels.is_empty() {
            vec![DEFAULT_LABEL]
        } else {
            labels
        }
    }

    /// List-view attribute names; `title` when none are configured.
    pub fn columns(&self) -> Vec<&str> {
        let columns: Vec<&str> = self.table_fields.split_whitespace().collect();
        if columns.is_empty() {
            vec![DEFAULT_COLUMN]
        } else {
            columns
        }
    }
}
