//! End-to-end flow through the API against files on disk: define a class,
//! fill it with documents, browse it page by page.

use quireapp::api::{DocumentEdit, NewDocument, ParentChange};
use quireapp::error::ErrorKind;
use quireapp::init::initialize;
use quireapp::model::Class;
use tempfile::TempDir;

fn class_from_json() -> Class {
    serde_json::from_str(
        r#"{
            "name": "Events",
            "slug": "events",
            "table_labels": "Title When",
            "table_fields": "title when",
            "fields": [
                { "name": "when", "label": "When", "type": "datetime", "format": "%b %-d, %Y %H:%M" },
                { "name": "kind", "label": "Kind", "type": "select", "options": { "static": "talk|Talk\nworkshop|Workshop" } },
                { "name": "body", "label": "Body", "type": "tinymce" }
            ]
        }"#,
    )
    .unwrap()
}

#[test]
fn test_browse_events() {
    let dir = TempDir::new().unwrap();
    let mut ctx = initialize(Some(dir.path().to_path_buf())).unwrap();
    ctx.api.put_class(class_from_json()).unwrap();

    for i in 1..=12 {
        ctx.api
            .add_document(
                "events",
                NewDocument {
                    title: format!("Event {}", i),
                    slug: format!("event-{}", i),
                    parent: None,
                    values: vec![("when".into(), format!("2022-04-{:02}T18:30", i))],
                },
            )
            .unwrap();
    }

    let first = ctx.api.browse("events", 1, None).unwrap().listing.unwrap();
    assert_eq!(first.total, 12);
    assert_eq!(first.table.headers, vec!["Title", "When"]);
    assert_eq!(first.table.rows.len(), 10);
    assert_eq!(first.table.rows[0].cells, vec!["Event 1", "Apr 1, 2022 18:30"]);

    let second = ctx.api.browse("events", 2, None).unwrap().listing.unwrap();
    assert_eq!(second.table.rows.len(), 2);
    assert!(second.links.last().unwrap().disabled);

    let options = ctx.api.field_options("events", "kind").unwrap().options;
    assert_eq!(options.len(), 2);
    assert_eq!(options[1].label, "Workshop");
}

#[test]
fn test_nested_documents_keep_sibling_slugs_apart() {
    let dir = TempDir::new().unwrap();
    let mut ctx = initialize(Some(dir.path().to_path_buf())).unwrap();
    ctx.api.put_class(Class::new("Pages", "pages")).unwrap();

    let add = |title: &str, slug: &str, parent| NewDocument {
        title: title.into(),
        slug: slug.into(),
        parent,
        values: Vec::new(),
    };

    let guide = ctx.api.add_document("pages", add("Guide", "guide", None)).unwrap();
    let guide_id = guide.affected_documents[0].id.unwrap();
    ctx.api
        .add_document("pages", add("Intro", "intro", Some(guide_id)))
        .unwrap();
    let loose = ctx
        .api
        .add_document("pages", add("Intro", "intro", None))
        .unwrap();
    let loose_id = loose.affected_documents[0].id.unwrap();

    let err = ctx
        .api
        .edit_document(
            &loose_id,
            DocumentEdit {
                parent: ParentChange::Set(guide_id),
                ..Default::default()
            },
        )
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Uniqueness);

    // the failed edit left the document where it was
    let doc = ctx.api.get_document(&loose_id).unwrap().listed_documents.remove(0);
    assert_eq!(doc.parent_id, None);
}
