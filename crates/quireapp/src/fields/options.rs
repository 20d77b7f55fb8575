//! Select option lists.
//!
//! Static options are written one per line:
//!
//! ```text
//! news|News
//! blog|Blog posts
//! misc
//! ```
//!
//! A line without a `|` uses the same token as value and label. Whitespace
//! around each side is trimmed and blank lines are skipped. Order is line
//! order.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldOption {
    pub value: String,
    pub label: String,
}

impl FieldOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Parses newline-delimited `value|label` text into options.
///
/// # Examples
/// ```
/// use quireapp::fields::options::{option_list, FieldOption};
///
/// let options = option_list("a|A\nb|B\nC\n");
/// assert_eq!(
///     options,
///     vec![
///         FieldOption::new("a", "A"),
///         FieldOption::new("b", "B"),
///         FieldOption::new("C", "C"),
///     ]
/// );
/// ```
pub fn option_list(text: &str) -> Vec<FieldOption> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| match line.split_once('|') {
            Some((value, label)) => FieldOption::new(value.trim(), label.trim()),
            None => FieldOption::new(line.trim(), line.trim()),
        })
        .collect()
}
