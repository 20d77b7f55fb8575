use crate::commands::CmdResult;
use crate::error::{QuireError, Result};
use crate::fields::{Field, FieldOption, OptionSource};
use crate::model::Document;
use crate::store::{DataStore, ListParams};

/// The ordered option list of a select or multiselect field.
///
/// Static options come straight from the field's text. A data source yields
/// one option per document of the referenced class, in insertion order, with
/// value and label read from the configured attributes and formatted through
/// the field. Other field types have no options.
pub fn resolve<S: DataStore>(store: &S, field: &Field) -> Result<Vec<FieldOption>> {
    let Some(source) = field.option_source() else {
        return Ok(Vec::new());
    };

    match source {
        OptionSource::Static(_) => Ok(field.option_list()),
        OptionSource::DataSource {
            class_id,
            value_attribute,
            label_attribute,
        } => {
            store.class_by_id(class_id)?;
            let list = store.list_documents(&ListParams::new(*class_id, 1, 0))?;
            let read = |doc: &Document, name: &str| {
                doc.value(name)
                    .map(|v| field.apply(&v))
                    .unwrap_or_default()
            };
            Ok(list
                .documents
                .iter()
                .map(|doc| FieldOption::new(read(doc, value_attribute), read(doc, label_attribute)))
                .collect())
        }
    }
}

/// Options of field `field_name` of class `class_slug`.
pub fn run<S: DataStore>(store: &S, class_slug: &str, field_name: &str) -> Result<CmdResult> {
    let class = store.class_by_slug(class_slug)?;
    let field = class
        .field(field_name)
        .ok_or_else(|| QuireError::not_found("field", format!("{}.{}", class_slug, field_name)))?;
    let options = resolve(store, field)?;
    Ok(CmdResult::default().with_options(options))
}
