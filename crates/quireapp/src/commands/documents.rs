use crate::commands::validation::{check_document_slug, validate_document};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{QuireError, Result};
use crate::model::{Class, Document, Value};
use crate::store::{DataStore, Deletion};
use uuid::Uuid;

/// Where an edited document should live.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParentChange {
    #[default]
    Keep,
    Set(Uuid),
    TopLevel,
}

/// A document described by raw user input, before it has a class id.
#[derive(Debug, Clone, Default)]
pub struct NewDocument {
    pub title: String,
    pub slug: String,
    pub parent: Option<Uuid>,
    /// `name=value` pairs, converted through the class's fields
    pub values: Vec<(String, String)>,
}

/// Changes to apply to a stored document. `None` leaves an attribute as is.
#[derive(Debug, Clone, Default)]
pub struct DocumentEdit {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub parent: ParentChange,
    pub values: Vec<(String, String)>,
}

pub fn insert<S: DataStore>(store: &mut S, mut doc: Document) -> Result<CmdResult> {
    validate_document(&doc)?;
    if doc.id.is_some() {
        return Err(QuireError::IdentityConflict(
            "document already has an id".to_string(),
        ));
    }
    check_document_slug(store, &doc)?;
    store.insert_document(&mut doc)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Document created: {}",
        doc.title
    )));
    result.affected_documents.push(doc);
    Ok(result)
}

pub fn update<S: DataStore>(store: &mut S, mut doc: Document) -> Result<CmdResult> {
    validate_document(&doc)?;
    if doc.id.is_none() {
        return Err(QuireError::IdentityConflict(
            "document has no id".to_string(),
        ));
    }
    check_document_slug(store, &doc)?;
    store.update_document(&mut doc)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Document updated: {}",
        doc.title
    )));
    result.affected_documents.push(doc);
    Ok(result)
}

/// Creates a document in the class with `class_slug` from raw input.
pub fn add<S: DataStore>(store: &mut S, class_slug: &str, input: NewDocument) -> Result<CmdResult> {
    let class = store.class_by_slug(class_slug)?;
    let class_id = class
        .id
        .ok_or_else(|| QuireError::IdentityConflict("class has no id".to_string()))?;

    let mut doc = Document::new(class_id, input.title, input.slug);
    if let Some(parent) = input.parent {
        store.document_by_id(&parent)?;
        doc.parent_id = Some(parent);
    }
    set_values(&class, &mut doc, &input.values);

    insert(store, doc)
}

/// Applies `edit` to the stored document `id`.
pub fn edit<S: DataStore>(store: &mut S, id: &Uuid, edit: DocumentEdit) -> Result<CmdResult> {
    let mut doc = store.document_by_id(id)?;

    if let Some(title) = edit.title {
        doc.title = title;
    }
    if let Some(slug) = edit.slug {
        doc.slug = slug;
    }
    match edit.parent {
        ParentChange::Keep => {}
        ParentChange::TopLevel => doc.parent_id = None,
        ParentChange::Set(parent) => {
            if parent == *id {
                return Err(QuireError::IdentityConflict(
                    "document cannot be its own parent".to_string(),
                ));
            }
            store.document_by_id(&parent)?;
            doc.parent_id = Some(parent);
        }
    }
    if !edit.values.is_empty() {
        let class_id = doc
            .class_id
            .ok_or_else(|| QuireError::validation("document", "class_id"))?;
        let class = store.class_by_id(&class_id)?;
        set_values(&class, &mut doc, &edit.values);
    }

    update(store, doc)
}

/// Converts `name=value` input through the matching field, or keeps it as
/// text when the class has no such field.
fn set_values(class: &Class, doc: &mut Document, values: &[(String, String)]) {
    for (name, raw) in values {
        let value = match class.field(name) {
            Some(field) => field.parse_input(raw),
            None => {
                tracing::debug!(field = %name, class = %class.slug, "value for unknown field kept as text");
                Value::Text(raw.clone())
            }
        };
        doc.values.insert(name.clone(), value);
    }
}

pub fn get<S: DataStore>(store: &S, id: &Uuid) -> Result<CmdResult> {
    let doc = store.document_by_id(id)?;
    Ok(CmdResult::default().with_listed_documents(vec![doc]))
}

/// Deletes document `id`. Deleting an absent document succeeds.
pub fn delete<S: DataStore>(store: &mut S, id: &Uuid) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match store.delete_document(id)? {
        Deletion::Removed => {
            result.add_message(CmdMessage::success(format!("Document deleted: {}", id)))
        }
        Deletion::AlreadyAbsent => {
            result.add_message(CmdMessage::info(format!("Document already gone: {}", id)))
        }
    }
    Ok(result)
}
