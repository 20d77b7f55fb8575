//! # Fields
//!
//! A [`Class`](crate::model::Class) describes its content as an ordered list of
//! [`Field`]s. Each field has a `name` (the key into a document's values), a
//! display `label`, and a [`FieldKind`] that carries only the settings that
//! make sense for its type:
//!
//! | Type | Payload |
//! |------|---------|
//! | `text`, `textarea`, `email`, `richtext`, `upload` | none |
//! | `number` | [`Bounds`] |
//! | `date`, `datetime`, `time` | [`Bounds`] and an optional display format |
//! | `select`, `multiselect` | an [`OptionSource`] |
//!
//! The plain tag enum [`FieldType`] is the registry of type behavior: it knows
//! each tag's name and, for temporal types, the fixed layout stored values are
//! written in. Display formatting lives in [`format`], option parsing in
//! [`options`].
//!
//! ## Serialized Form
//!
//! ```json
//! {"name": "starts", "label": "Starts", "type": "date", "format": "%b %-d, %Y"}
//! {"name": "topic", "label": "Topic", "type": "select",
//!  "options": {"static": "news|News\nblog|Blog"}}
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::{QuireError, Result};
use crate::model::Value;

pub mod format;
pub mod options;

pub use options::FieldOption;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    TextArea,
    Number,
    Date,
    DateTime,
    Time,
    Email,
    Select,
    MultiSelect,
    RichText,
    Upload,
}

impl FieldType {
    pub const ALL: [FieldType; 11] = [
        FieldType::Text,
        FieldType::TextArea,
        FieldType::Number,
        FieldType::Date,
        FieldType::DateTime,
        FieldType::Time,
        FieldType::Email,
        FieldType::Select,
        FieldType::MultiSelect,
        FieldType::RichText,
        FieldType::Upload,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::TextArea => "textarea",
            FieldType::Number => "number",
            FieldType::Date => "date",
            FieldType::DateTime => "datetime",
            FieldType::Time => "time",
            FieldType::Email => "email",
            FieldType::Select => "select",
            FieldType::MultiSelect => "multiselect",
            FieldType::RichText => "richtext",
            FieldType::Upload => "upload",
        }
    }

    /// The layout stored text is written in, for types whose values are parsed
    /// before display. `None` for everything that is shown as-is.
    pub fn input_layout(&self) -> Option<&'static str> {
        match self {
            FieldType::Date => Some("%Y-%m-%d"),
            FieldType::DateTime => Some("%Y-%m-%dT%H:%M"),
            FieldType::Time => Some("%H:%M"),
            _ => None,
        }
    }

    pub fn is_temporal(&self) -> bool {
        self.input_layout().is_some()
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = QuireError;

    fn from_str(s: &str) -> Result<Self> {
        let tag = s.trim().to_ascii_lowercase();
        // Older schemas name rich text after the editor that rendered it
        if tag == "tinymce" {
            return Ok(FieldType::RichText);
        }
        FieldType::ALL
            .into_iter()
            .find(|t| t.as_str() == tag)
            .ok_or_else(|| QuireError::validation("field", format!("known type (got '{}')", s)))
    }
}

/// Numeric or temporal constraints, kept as the administrator typed them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<String>,
}

/// Where a select field's options come from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionSource {
    /// Newline-delimited `value|label` lines
    Static(String),

    /// One option per document of another class
    DataSource {
        class_id: Uuid,
        value_attribute: String,
        label_attribute: String,
    },
}

impl Default for OptionSource {
    fn default() -> Self {
        OptionSource::Static(String::new())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    TextArea,
    Email,
    #[serde(alias = "tinymce")]
    RichText,
    Upload,
    Number {
        #[serde(default)]
        bounds: Bounds,
    },
    Date {
        #[serde(default)]
        bounds: Bounds,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        format: Option<String>,
    },
    DateTime {
        #[serde(default)]
        bounds: Bounds,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        format: Option<String>,
    },
    Time {
        #[serde(default)]
        bounds: Bounds,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        format: Option<String>,
    },
    Select {
        #[serde(default)]
        options: OptionSource,
    },
    MultiSelect {
        #[serde(default)]
        options: OptionSource,
    },
}

impl FieldKind {
    /// A kind of the given type with empty settings.
    pub fn of(field_type: FieldType) -> Self {
        match field_type {
            FieldType::Text => FieldKind::Text,
            FieldType::TextArea => FieldKind::TextArea,
            FieldType::Email => FieldKind::Email,
            FieldType::RichText => FieldKind::RichText,
            FieldType::Upload => FieldKind::Upload,
            FieldType::Number => FieldKind::Number {
                bounds: Bounds::default(),
            },
            FieldType::Date => FieldKind::Date {
                bounds: Bounds::default(),
                format: None,
            },
            FieldType::DateTime => FieldKind::DateTime {
                bounds: Bounds::default(),
                format: None,
            },
            FieldType::Time => FieldKind::Time {
                bounds: Bounds::default(),
                format: None,
            },
            FieldType::Select => FieldKind::Select {
                options: OptionSource::default(),
            },
            FieldType::MultiSelect => FieldKind::MultiSelect {
                options: OptionSource::default(),
            },
        }
    }

    pub fn field_type(&self) -> FieldType {
        match self {
            FieldKind::Text => FieldType::Text,
            FieldKind::TextArea => FieldType::TextArea,
            FieldKind::Email => FieldType::Email,
            FieldKind::RichText => FieldType::RichText,
            FieldKind::Upload => FieldType::Upload,
            FieldKind::Number { .. } => FieldType::Number,
            FieldKind::Date { .. } => FieldType::Date,
            FieldKind::DateTime { .. } => FieldType::DateTime,
            FieldKind::Time { .. } => FieldType::Time,
            FieldKind::Select { .. } => FieldType::Select,
            FieldKind::MultiSelect { .. } => FieldType::MultiSelect,
        }
    }
}

/// One schema entry of a class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(default)]
    pub label: String,
    #[serde(flatten)]
    pub kind: FieldKind,
}

impl Field {
    pub fn new(name: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind,
        }
    }

    pub fn field_type(&self) -> FieldType {
        self.kind.field_type()
    }

    pub fn format(&self) -> Option<&str> {
        match &self.kind {
            FieldKind::Date { format, .. }
            | FieldKind::DateTime { format, .. }
            | FieldKind::Time { format, .. } => format.as_deref(),
            _ => None,
        }
    }

    pub fn bounds(&self) -> Option<&Bounds> {
        match &self.kind {
            FieldKind::Number { bounds }
            | FieldKind::Date { bounds, .. }
            | FieldKind::DateTime { bounds, .. }
            | FieldKind::Time { bounds, .. } => Some(bounds),
            _ => None,
        }
    }

    pub fn option_source(&self) -> Option<&OptionSource> {
        match &self.kind {
            FieldKind::Select { options } | FieldKind::MultiSelect { options } => Some(options),
            _ => None,
        }
    }

    /// Formats a stored value for display using this field's type and format.
    pub fn apply(&self, value: &Value) -> String {
        format::apply(Some(self.field_type()), self.format(), value)
    }

    /// Static options of a select field. Data-source options need a store; see
    /// [`crate::commands::options`].
    pub fn option_list(&self) -> Vec<FieldOption> {
        match self.option_source() {
            Some(OptionSource::Static(text)) => options::option_list(text),
            _ => Vec::new(),
        }
    }

    /// Converts raw user input into a stored value for this field.
    ///
    /// Finite numbers become [`Value::Number`] when they parse, multiselect input is
    /// split on commas, everything else is kept as text (dates included, in
    /// their input layout).
    pub fn parse_input(&self, raw: &str) -> Value {
        match self.field_type() {
            FieldType::Number => match raw.trim().parse::<f64>() {
                Ok(n) if n.is_finite() => Value::Number(n),
                _ => Value::Text(raw.to_string()),
            },
            FieldType::MultiSelect => Value::List(
                raw.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(String::from)
                    .collect(),
            ),
            _ => Value::Text(raw.to_string()),
        }
    }
}
