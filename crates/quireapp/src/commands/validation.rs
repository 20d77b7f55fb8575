use crate::error::{QuireError, Result};
use crate::model::{Class, Document};
use crate::store::DataStore;

/// Required attributes of a class: name, slug, and a name on every field.
pub fn validate_class(class: &Class) -> Result<()> {
    if class.name.trim().is_empty() {
        return Err(QuireError::validation("class", "name"));
    }
    if class.slug.trim().is_empty() {
        return Err(QuireError::validation("class", "slug"));
    }
    if let Some(i) = class.fields.iter().position(|f| f.name.trim().is_empty()) {
        return Err(QuireError::validation("class", format!("fields[{}].name", i)));
    }
    Ok(())
}

/// Required attributes of a document: class id and slug.
pub fn validate_document(doc: &Document) -> Result<()> {
    if doc.class_id.is_none() {
        return Err(QuireError::validation("document", "class_id"));
    }
    if doc.slug.trim().is_empty() {
        return Err(QuireError::validation("document", "slug"));
    }
    Ok(())
}

/// Fails when a class other than `class` already uses its slug.
pub fn check_class_slug<S: DataStore>(store: &S, class: &Class) -> Result<()> {
    match store.class_by_slug(&class.slug) {
        Ok(existing) if existing.id != class.id => Err(QuireError::Uniqueness {
            slug: class.slug.clone(),
            existing: existing.id.unwrap_or_default(),
        }),
        Ok(_) => Ok(()),
        Err(e) if e.is_not_found() => Ok(()),
        Err(e) => Err(e),
    }
}

/// Fails when a document other than `doc` already uses its slug in the same
/// scope. The scope comes from the document's current parent and class, so a
/// reparented document is checked against its new siblings.
pub fn check_document_slug<S: DataStore>(store: &S, doc: &Document) -> Result<()> {
    let scope = doc
        .slug_scope()
        .ok_or_else(|| QuireError::validation("document", "class_id"))?;
    match store.document_by_slug(scope, &doc.slug) {
        Ok(existing) if existing.id != doc.id => Err(QuireError::Uniqueness {
            slug: doc.slug.clone(),
            existing: existing.id.unwrap_or_default(),
        }),
        Ok(_) => Ok(()),
        Err(e) if e.is_not_found() => Ok(()),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::fields::{Field, FieldKind};
    use crate::store::memory::InMemoryStore;
    use uuid::Uuid;

    #[test]
    fn class_requires_name_then_slug() {
        let err = validate_class(&Class::new("", "")).unwrap_err();
        assert_eq!(err.to_string(), "class requires a name");

        let err = validate_class(&Class::new("Pages", " ")).unwrap_err();
        assert_eq!(err.to_string(), "class requires a slug");

        assert!(validate_class(&Class::new("Pages", "pages")).is_ok());
    }

    #[test]
    fn class_fields_need_names() {
        let class = Class::new("Pages", "pages")
            .with_field(Field::new("body", "Body", FieldKind::RichText))
            .with_field(Field::new("", "Nameless", FieldKind::Text));

        match validate_class(&class) {
            Err(QuireError::Validation { field, .. }) => assert_eq!(field, "fields[1].name"),
            other => panic!("expected Validation, got {:?}", other),
        }
    }

    #[test]
    fn document_requires_class_then_slug() {
        let err = validate_document(&Document::default()).unwrap_err();
        assert_eq!(err.to_string(), "document requires a class_id");

        let err = validate_document(&Document::new(Uuid::new_v4(), "T", "")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.to_string(), "document requires a slug");
    }

    #[test]
    fn slug_checks_tolerate_self() {
        let mut store = InMemoryStore::new();
        let mut class = Class::new("Pages", "pages");
        store.insert_class(&mut class).unwrap();

        assert!(check_class_slug(&store, &class).is_ok());

        let stranger = Class::new("Other", "pages");
        match check_class_slug(&store, &stranger) {
            Err(QuireError::Uniqueness { existing, .. }) => assert_eq!(Some(existing), class.id),
            other => panic!("expected Uniqueness, got {:?}", other),
        }
    }

    #[test]
    fn document_slug_check_uses_current_scope() {
        let mut store = InMemoryStore::new();
        let class = Uuid::new_v4();
        let mut parent = Document::new(class, "Docs", "docs");
        store.insert_document(&mut parent).unwrap();
        let mut child = Document::new(class, "Intro", "intro").with_parent(parent.id.unwrap());
        store.insert_document(&mut child).unwrap();

        // moving a top-level `docs` under the parent is fine, `intro` is not
        let candidate = Document::new(class, "Intro", "intro");
        assert!(check_document_slug(&store, &candidate).is_ok());
        let moved = candidate.with_parent(parent.id.unwrap());
        assert_eq!(
            check_document_slug(&store, &moved).unwrap_err().kind(),
            ErrorKind::Uniqueness
        );
    }
}
