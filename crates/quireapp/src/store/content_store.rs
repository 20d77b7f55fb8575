use super::backend::StorageBackend;
use super::{DataStore, Deletion, DocumentList, ListParams};
use crate::error::{QuireError, Result};
use crate::model::{Class, Document, SlugScope, Value};
use chrono::Utc;
use uuid::Uuid;

/// Generic content store that works with any storage backend.
///
/// Every mutation loads the whole collection, checks it, and saves it back.
/// The slug checks here run against exactly the collection being written, so
/// they hold even when a caller skipped (or raced) the command-layer check.
pub struct ContentStore<B: StorageBackend> {
    pub(crate) backend: B,
}

impl<B: StorageBackend> ContentStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

/// Rejects `slug` when another class already holds it.
fn check_class_slug(classes: &[Class], slug: &str, own_id: Option<Uuid>) -> Result<()> {
    let clash = classes
        .iter()
        .find(|c| c.slug == slug && c.id != own_id)
        .and_then(|c| c.id);
    match clash {
        Some(existing) => {
            tracing::warn!(slug, %existing, "store rejected duplicate class slug");
            Err(QuireError::Uniqueness {
                slug: slug.to_string(),
                existing,
            })
        }
        None => Ok(()),
    }
}

/// Rejects `doc` when a sibling in its scope already holds its slug.
fn check_document_slug(documents: &[Document], doc: &Document) -> Result<()> {
    let scope = doc
        .slug_scope()
        .ok_or_else(|| QuireError::validation("document", "class_id"))?;
    let clash = documents
        .iter()
        .find(|d| d.slug == doc.slug && d.id != doc.id && scope.contains(d))
        .and_then(|d| d.id);
    match clash {
        Some(existing) => {
            tracing::warn!(slug = %doc.slug, %scope, %existing, "store rejected duplicate document slug");
            Err(QuireError::Uniqueness {
                slug: doc.slug.clone(),
                existing,
            })
        }
        None => Ok(()),
    }
}

/// Rejects numbers JSON cannot represent; they would be written as `null`
/// and make the whole collection unreadable.
fn check_values(doc: &Document) -> Result<()> {
    let bad = doc.values.iter().find_map(|(name, value)| match value {
        Value::Number(n) if !n.is_finite() => Some((name, n)),
        _ => None,
    });
    match bad {
        Some((name, n)) => {
            tracing::warn!(slug = %doc.slug, field = %name, "store rejected non-finite number");
            Err(QuireError::InvalidValue {
                field: name.clone(),
                value: n.to_string(),
            })
        }
        None => Ok(()),
    }
}

impl<B: StorageBackend> DataStore for ContentStore<B> {
    fn delete_class(&mut self, id: &Uuid) -> Result<Deletion> {
        let mut classes = self.backend.load_classes()?;
        let before = classes.len();
        classes.retain(|c| c.id.as_ref() != Some(id));
        if classes.len() == before {
            return Ok(Deletion::AlreadyAbsent);
        }
        self.backend.save_classes(&classes)?;
        tracing::debug!(%id, "deleted class");
        Ok(Deletion::Removed)
    }

    fn all_classes(&self) -> Result<Vec<Class>> {
        let mut classes = self.backend.load_classes()?;
        classes.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(classes)
    }

    fn class_by_id(&self, id: &Uuid) -> Result<Class> {
        self.backend
            .load_classes()?
            .into_iter()
            .find(|c| c.id.as_ref() == Some(id))
            .ok_or_else(|| QuireError::not_found("class", id))
    }

    fn class_by_slug(&self, slug: &str) -> Result<Class> {
        self.backend
            .load_classes()?
            .into_iter()
            .find(|c| c.slug == slug)
            .ok_or_else(|| QuireError::not_found("class", slug))
    }

    fn insert_class(&mut self, class: &mut Class) -> Result<()> {
        if class.id.is_some() {
            return Err(QuireError::IdentityConflict(
                "class already has an id".to_string(),
            ));
        }
        let mut classes = self.backend.load_classes()?;
        check_class_slug(&classes, &class.slug, None)?;

        let now = Utc::now();
        let mut stored = class.clone();
        stored.id = Some(Uuid::new_v4());
        stored.created = now;
        stored.updated = now;
        classes.push(stored.clone());
        self.backend.save_classes(&classes)?;

        tracing::debug!(slug = %stored.slug, id = ?stored.id, "inserted class");
        *class = stored;
        Ok(())
    }

    fn update_class(&mut self, class: &mut Class) -> Result<()> {
        let id = class
            .id
            .ok_or_else(|| QuireError::IdentityConflict("class has no id".to_string()))?;
        let mut classes = self.backend.load_classes()?;
        let pos = classes
            .iter()
            .position(|c| c.id == Some(id))
            .ok_or_else(|| QuireError::not_found("class", id))?;
        check_class_slug(&classes, &class.slug, Some(id))?;

        let mut stored = class.clone();
        stored.created = classes[pos].created;
        stored.updated = Utc::now();
        classes[pos] = stored.clone();
        self.backend.save_classes(&classes)?;

        tracing::debug!(slug = %stored.slug, %id, "updated class");
        *class = stored;
        Ok(())
    }

    fn delete_document(&mut self, id: &Uuid) -> Result<Deletion> {
        let mut documents = self.backend.load_documents()?;
        let before = documents.len();
        documents.retain(|d| d.id.as_ref() != Some(id));
        if documents.len() == before {
            return Ok(Deletion::AlreadyAbsent);
        }
        self.backend.save_documents(&documents)?;
        tracing::debug!(%id, "deleted document");
        Ok(Deletion::Removed)
    }

    fn document_by_id(&self, id: &Uuid) -> Result<Document> {
        self.backend
            .load_documents()?
            .into_iter()
            .find(|d| d.id.as_ref() == Some(id))
            .ok_or_else(|| QuireError::not_found("document", id))
    }

    fn document_by_slug(&self, scope: SlugScope, slug: &str) -> Result<Document> {
        self.backend
            .load_documents()?
            .into_iter()
            .find(|d| d.slug == slug && scope.contains(d))
            .ok_or_else(|| QuireError::not_found("document", format!("{} in {}", slug, scope)))
    }

    fn list_documents(&self, params: &ListParams) -> Result<DocumentList> {
        let of_class: Vec<Document> = self
            .backend
            .load_documents()?
            .into_iter()
            .filter(|d| d.class_id == Some(params.class_id))
            .collect();
        let total = of_class.len() as u64;

        let skip = usize::try_from(params.offset()).unwrap_or(usize::MAX);
        let take = match params.per_page {
            0 => usize::MAX,
            n => usize::try_from(n).unwrap_or(usize::MAX),
        };
        let documents = of_class.into_iter().skip(skip).take(take).collect();

        Ok(DocumentList { documents, total })
    }

    fn insert_document(&mut self, doc: &mut Document) -> Result<()> {
        if doc.id.is_some() {
            return Err(QuireError::IdentityConflict(
                "document already has an id".to_string(),
            ));
        }
        check_values(doc)?;
        let mut documents = self.backend.load_documents()?;
        check_document_slug(&documents, doc)?;

        let now = Utc::now();
        let mut stored = doc.clone();
        stored.id = Some(Uuid::new_v4());
        stored.created = now;
        stored.updated = now;
        documents.push(stored.clone());
        self.backend.save_documents(&documents)?;

        tracing::debug!(slug = %stored.slug, id = ?stored.id, "inserted document");
        *doc = stored;
        Ok(())
    }

    fn update_document(&mut self, doc: &mut Document) -> Result<()> {
        let id = doc
            .id
            .ok_or_else(|| QuireError::IdentityConflict("document has no id".to_string()))?;
        check_values(doc)?;
        let mut documents = self.backend.load_documents()?;
        let pos = documents
            .iter()
            .position(|d| d.id == Some(id))
            .ok_or_else(|| QuireError::not_found("document", id))?;
        check_document_slug(&documents, doc)?;

        let mut stored = doc.clone();
        stored.created = documents[pos].created;
        stored.updated = Utc::now();
        documents[pos] = stored.clone();
        self.backend.save_documents(&documents)?;

        tracing::debug!(slug = %stored.slug, %id, "updated document");
        *doc = stored;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::store::mem_backend::MemBackend;

    fn make_store() -> ContentStore<MemBackend> {
        ContentStore::with_backend(MemBackend::new())
    }

    fn stored_class(store: &mut ContentStore<MemBackend>, name: &str, slug: &str) -> Uuid {
        let mut class = Class::new(name, slug);
        store.insert_class(&mut class).unwrap();
        class.id.unwrap()
    }

    #[test]
    fn insert_assigns_id_and_timestamps() {
        let mut store = make_store();
        let mut class = Class::new("Pages", "pages");
        store.insert_class(&mut class).unwrap();

        assert!(class.id.is_some());
        assert_eq!(class.created, class.updated);
        assert_eq!(store.class_by_slug("pages").unwrap(), class);
    }

    #[test]
    fn insert_rejects_existing_id() {
        let mut store = make_store();
        let mut class = Class::new("Pages", "pages");
        class.id = Some(Uuid::new_v4());
        let err = store.insert_class(&mut class).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IdentityConflict);
    }

    #[test]
    fn classes_are_listed_by_name() {
        let mut store = make_store();
        stored_class(&mut store, "Posts", "posts");
        stored_class(&mut store, "Authors", "authors");
        stored_class(&mut store, "Pages", "pages");

        let names: Vec<String> = store
            .all_classes()
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Authors", "Pages", "Posts"]);
    }

    #[test]
    fn store_rejects_duplicate_class_slug() {
        let mut store = make_store();
        let first = stored_class(&mut store, "Pages", "pages");

        let mut dup = Class::new("Other Pages", "pages");
        match store.insert_class(&mut dup) {
            Err(QuireError::Uniqueness { slug, existing }) => {
                assert_eq!(slug, "pages");
                assert_eq!(existing, first);
            }
            other => panic!("expected Uniqueness, got {:?}", other),
        }
        assert_eq!(store.all_classes().unwrap().len(), 1);
    }

    #[test]
    fn update_keeps_created_and_tolerates_own_slug() {
        let mut store = make_store();
        let mut class = Class::new("Pages", "pages");
        store.insert_class(&mut class).unwrap();
        let created = class.created;

        class.name = "All Pages".into();
        class.created = Utc::now() + chrono::Duration::days(1);
        store.update_class(&mut class).unwrap();

        let stored = store.class_by_id(&class.id.unwrap()).unwrap();
        assert_eq!(stored.name, "All Pages");
        assert_eq!(stored.created, created);
        assert!(stored.updated >= created);
    }

    #[test]
    fn update_of_unknown_class_is_not_found() {
        let mut store = make_store();
        let mut class = Class::new("Ghost", "ghost");
        class.id = Some(Uuid::new_v4());
        assert!(store.update_class(&mut class).unwrap_err().is_not_found());
    }

    #[test]
    fn delete_is_idempotent() {
        let mut store = make_store();
        let id = stored_class(&mut store, "Pages", "pages");

        assert_eq!(store.delete_class(&id).unwrap(), Deletion::Removed);
        assert_eq!(store.delete_class(&id).unwrap(), Deletion::AlreadyAbsent);
        assert!(store.class_by_id(&id).unwrap_err().is_not_found());
    }

    #[test]
    fn document_slugs_are_scoped() {
        let mut store = make_store();
        let pages = stored_class(&mut store, "Pages", "pages");
        let posts = stored_class(&mut store, "Posts", "posts");

        let mut home = Document::new(pages, "Home", "home");
        store.insert_document(&mut home).unwrap();

        // same slug, other class
        store
            .insert_document(&mut Document::new(posts, "Home", "home"))
            .unwrap();

        // same slug, child scope
        let parent = home.id.unwrap();
        store
            .insert_document(&mut Document::new(pages, "Home", "home").with_parent(parent))
            .unwrap();

        let err = store
            .insert_document(&mut Document::new(pages, "Home again", "home"))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Uniqueness);

        let found = store.document_by_slug(SlugScope::Class(pages), "home").unwrap();
        assert_eq!(found.id, home.id);
        let child = store.document_by_slug(SlugScope::Parent(parent), "home").unwrap();
        assert_eq!(child.parent_id, Some(parent));
    }

    #[test]
    fn list_pages_in_insertion_order() {
        let mut store = make_store();
        let class = stored_class(&mut store, "Posts", "posts");
        let other = stored_class(&mut store, "Pages", "pages");
        for i in 1..=5 {
            store
                .insert_document(&mut Document::new(class, format!("Post {}", i), format!("p{}", i)))
                .unwrap();
        }
        store
            .insert_document(&mut Document::new(other, "Elsewhere", "x"))
            .unwrap();

        let page = store.list_documents(&ListParams::new(class, 2, 2)).unwrap();
        assert_eq!(page.total, 5);
        let slugs: Vec<&str> = page.documents.iter().map(|d| d.slug.as_str()).collect();
        assert_eq!(slugs, vec!["p3", "p4"]);

        let all = store.list_documents(&ListParams::new(class, 1, 0)).unwrap();
        assert_eq!(all.documents.len(), 5);

        let past_end = store.list_documents(&ListParams::new(class, 9, 2)).unwrap();
        assert!(past_end.documents.is_empty());
        assert_eq!(past_end.total, 5);
    }

    #[test]
    fn write_errors_surface_as_storage() {
        let mut store = make_store();
        store.backend().set_simulate_write_error(true);
        let err = store.insert_class(&mut Class::new("Pages", "pages")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Storage);
    }
}
