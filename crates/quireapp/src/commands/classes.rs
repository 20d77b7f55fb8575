use crate::commands::validation::{check_class_slug, validate_class};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{QuireError, Result};
use crate::model::Class;
use crate::store::{DataStore, Deletion};
use uuid::Uuid;

pub fn insert<S: DataStore>(store: &mut S, mut class: Class) -> Result<CmdResult> {
    validate_class(&class)?;
    if class.id.is_some() {
        return Err(QuireError::IdentityConflict(
            "class already has an id".to_string(),
        ));
    }
    check_class_slug(store, &class)?;
    store.insert_class(&mut class)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Class created: {}", class.name)));
    result.affected_classes.push(class);
    Ok(result)
}

pub fn update<S: DataStore>(store: &mut S, mut class: Class) -> Result<CmdResult> {
    validate_class(&class)?;
    if class.id.is_none() {
        return Err(QuireError::IdentityConflict("class has no id".to_string()));
    }
    check_class_slug(store, &class)?;
    store.update_class(&mut class)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Class updated: {}", class.name)));
    result.affected_classes.push(class);
    Ok(result)
}

/// Inserts `class`, or updates the stored class with the same slug.
///
/// An id on the incoming definition is ignored; the slug decides which class
/// is meant.
pub fn put<S: DataStore>(store: &mut S, mut class: Class) -> Result<CmdResult> {
    match store.class_by_slug(&class.slug) {
        Ok(existing) => {
            class.id = existing.id;
            update(store, class)
        }
        Err(e) if e.is_not_found() => {
            class.id = None;
            insert(store, class)
        }
        Err(e) => Err(e),
    }
}

pub fn get<S: DataStore>(store: &S, slug: &str) -> Result<CmdResult> {
    let class = store.class_by_slug(slug)?;
    Ok(CmdResult::default().with_listed_classes(vec![class]))
}

pub fn list<S: DataStore>(store: &S) -> Result<CmdResult> {
    let classes = store.all_classes()?;
    let mut result = CmdResult::default();
    if classes.is_empty() {
        result.add_message(CmdMessage::info("No classes defined."));
    }
    Ok(result.with_listed_classes(classes))
}

/// Deletes the class with `slug`. Documents of the class are left in place.
///
/// An unknown slug is `NotFound`; use [`delete_by_id`] for a repeatable delete.
pub fn delete<S: DataStore>(store: &mut S, slug: &str) -> Result<CmdResult> {
    let class = store.class_by_slug(slug)?;
    let Some(id) = class.id else {
        return Err(QuireError::IdentityConflict("class has no id".to_string()));
    };
    delete_by_id(store, &id)
}

/// Deletes the class `id`. Deleting a class that is already gone succeeds.
pub fn delete_by_id<S: DataStore>(store: &mut S, id: &Uuid) -> Result<CmdResult> {
    let class = match store.class_by_id(id) {
        Ok(class) => Some(class),
        Err(e) if e.is_not_found() => None,
        Err(e) => return Err(e),
    };

    let mut result = CmdResult::default();
    match (store.delete_class(id)?, class) {
        (Deletion::Removed, Some(class)) => {
            result.add_message(CmdMessage::success(format!("Class deleted: {}", class.name)));
            result.affected_classes.push(class);
        }
        (Deletion::Removed, None) => {
            result.add_message(CmdMessage::success(format!("Class deleted: {}", id)));
        }
        (Deletion::AlreadyAbsent, _) => {
            result.add_message(CmdMessage::info(format!("Class already gone: {}", id)));
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::fields::{Field, FieldKind};
    use crate::store::memory::InMemoryStore;
    use uuid::Uuid;

    #[test]
    fn insert_returns_stored_class() {
        let mut store = InMemoryStore::new();
        let res = insert(&mut store, Class::new("Pages", "pages")).unwrap();

        let class = &res.affected_classes[0];
        assert!(class.id.is_some());
        assert_eq!(store.class_by_slug("pages").unwrap().id, class.id);
        assert_eq!(res.messages[0].content, "Class created: Pages");
    }

    #[test]
    fn validation_runs_before_identity() {
        let mut store = InMemoryStore::new();
        let mut class = Class::new("", "pages");
        class.id = Some(Uuid::new_v4());
        let err = insert(&mut store, class).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn insert_with_id_is_identity_conflict() {
        let mut store = InMemoryStore::new();
        let mut class = Class::new("Pages", "pages");
        class.id = Some(Uuid::new_v4());
        let err = insert(&mut store, class).unwrap_err();
        assert_eq!(err.to_string(), "class already has an id");
    }

    #[test]
    fn duplicate_slug_names_existing_class() {
        let mut store = InMemoryStore::new();
        let first = insert(&mut store, Class::new("Pages", "pages")).unwrap();
        let first_id = first.affected_classes[0].id.unwrap();

        match insert(&mut store, Class::new("More Pages", "pages")) {
            Err(QuireError::Uniqueness { slug, existing }) => {
                assert_eq!(slug, "pages");
                assert_eq!(existing, first_id);
            }
            other => panic!("expected Uniqueness, got {:?}", other),
        }
    }

    #[test]
    fn update_requires_id() {
        let mut store = InMemoryStore::new();
        let err = update(&mut store, Class::new("Pages", "pages")).unwrap_err();
        assert_eq!(err.to_string(), "class has no id");
    }

    #[test]
    fn update_cannot_take_another_slug() {
        let mut store = InMemoryStore::new();
        insert(&mut store, Class::new("Pages", "pages")).unwrap();
        let posts = insert(&mut store, Class::new("Posts", "posts")).unwrap();

        let mut class = posts.affected_classes[0].clone();
        class.slug = "pages".into();
        let err = update(&mut store, class).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Uniqueness);

        // renaming onto a free slug is fine
        let mut class = posts.affected_classes[0].clone();
        class.slug = "articles".into();
        update(&mut store, class).unwrap();
        assert!(store.class_by_slug("articles").is_ok());
    }

    #[test]
    fn put_inserts_then_updates() {
        let mut store = InMemoryStore::new();
        put(&mut store, Class::new("Pages", "pages")).unwrap();
        let id = store.class_by_slug("pages").unwrap().id;

        let revised = Class::new("Site Pages", "pages")
            .with_field(Field::new("body", "Body", FieldKind::RichText));
        let res = put(&mut store, revised).unwrap();

        assert_eq!(res.affected_classes[0].id, id);
        let stored = store.class_by_slug("pages").unwrap();
        assert_eq!(stored.name, "Site Pages");
        assert_eq!(stored.fields.len(), 1);
        assert_eq!(store.all_classes().unwrap().len(), 1);
    }

    #[test]
    fn list_is_ordered_by_name() {
        let mut store = InMemoryStore::new();
        insert(&mut store, Class::new("Posts", "posts")).unwrap();
        insert(&mut store, Class::new("Authors", "authors")).unwrap();

        let res = list(&store).unwrap();
        let names: Vec<&str> = res.listed_classes.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Authors", "Posts"]);
    }

    #[test]
    fn empty_list_says_so() {
        let res = list(&InMemoryStore::new()).unwrap();
        assert!(res.listed_classes.is_empty());
        assert_eq!(res.messages[0].content, "No classes defined.");
    }

    #[test]
    fn delete_by_slug() {
        let mut store = InMemoryStore::new();
        insert(&mut store, Class::new("Pages", "pages")).unwrap();

        let res = delete(&mut store, "pages").unwrap();
        assert_eq!(res.messages[0].content, "Class deleted: Pages");
        assert!(get(&store, "pages").unwrap_err().is_not_found());
        assert!(delete(&mut store, "pages").unwrap_err().is_not_found());
    }

    #[test]
    fn delete_by_id_twice_succeeds() {
        let mut store = InMemoryStore::new();
        let res = insert(&mut store, Class::new("Pages", "pages")).unwrap();
        let id = res.affected_classes[0].id.unwrap();

        let first = delete_by_id(&mut store, &id).unwrap();
        assert_eq!(first.messages[0].content, "Class deleted: Pages");
        assert_eq!(first.affected_classes.len(), 1);

        let second = delete_by_id(&mut store, &id).unwrap();
        assert_eq!(second.messages[0].content, format!("Class already gone: {}", id));
        assert!(second.affected_classes.is_empty());

        assert!(delete_by_id(&mut store, &Uuid::new_v4()).is_ok());
    }
}
