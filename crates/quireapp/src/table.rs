//! List-view projection of documents.
//!
//! A [`Table`] takes its headers from the class's `table_labels` and one cell
//! per `table_fields` token. Columns naming a schema field are formatted
//! through that field; other columns (synthetic attributes like `slug`) use
//! the untyped rules. A document with no value for a column gets an empty
//! cell, so every row is exactly as wide as the column list.

use crate::fields::format;
use crate::model::{Class, Document};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub document_id: Option<Uuid>,
    pub cells: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<TableRow>,
}

impl Table {
    pub fn new(class: &Class, documents: &[Document]) -> Self {
        let columns = class.columns();
        let rows = documents
            .iter()
            .map(|doc| TableRow {
                document_id: doc.id,
                cells: columns.iter().map(|name| cell(class, doc, name)).collect(),
            })
            .collect();

        Self {
            headers: class.labels().into_iter().map(String::from).collect(),
            rows,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn cell(class: &Class, doc: &Document, column: &str) -> String {
    let Some(value) = doc.value(column) else {
        return String::new();
    };
    match class.field(column) {
        Some(field) => field.apply(&value),
        None => format::apply(None, None, &value),
    }
}
