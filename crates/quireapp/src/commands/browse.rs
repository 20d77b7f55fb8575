use crate::commands::{CmdMessage, CmdResult, Listing};
use crate::config::QuireConfig;
use crate::error::{QuireError, Result};
use crate::store::{DataStore, ListParams};
use crate::table::Table;

/// One page of the documents of class `class_slug`, as a table with page links.
///
/// `per_page` falls back to the configured default; page 0 is treated as 1.
pub fn run<S: DataStore>(
    store: &S,
    config: &QuireConfig,
    class_slug: &str,
    page: u64,
    per_page: Option<u64>,
) -> Result<CmdResult> {
    let class = store.class_by_slug(class_slug)?;
    let class_id = class
        .id
        .ok_or_else(|| QuireError::IdentityConflict("class has no id".to_string()))?;
    let page = page.max(1);
    let per_page = per_page.unwrap_or(config.per_page);

    let list = store.list_documents(&ListParams::new(class_id, page, per_page))?;
    let table = Table::new(&class, &list.documents);
    let links = config.pagination(page, per_page, list.total).links();

    let mut result = CmdResult::default();
    if list.total == 0 {
        result.add_message(CmdMessage::info(format!("No {} yet.", class.name)));
    } else if list.documents.is_empty() {
        result.add_message(CmdMessage::warning(format!(
            "Page {} is past the end of {}.",
            page, class.name
        )));
    }

    Ok(result
        .with_listed_documents(list.documents)
        .with_listing(Listing {
            class,
            table,
            links,
            page,
            per_page,
            total: list.total,
        }))
}
