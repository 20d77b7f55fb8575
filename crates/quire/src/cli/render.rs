//! Terminal rendering of command results.
//!
//! Every `render_*` function returns a `String` so it can be tested without a
//! terminal; the command handlers print them. Column widths are measured with
//! `unicode-width` so wide characters line up.

use colored::Colorize;
use quireapp::commands::{CmdMessage, CmdResult, Listing, MessageLevel};
use quireapp::config::QuireConfig;
use quireapp::fields::FieldOption;
use quireapp::model::{Class, Document, Value};
use quireapp::pagination::PageLink;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const MAX_CELL_WIDTH: usize = 40;
const COLUMN_GAP: &str = "  ";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

pub(super) fn print_json(result: &CmdResult) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string_pretty(result)?);
    Ok(())
}

pub(super) fn render_class_list(classes: &[Class]) -> String {
    let rows: Vec<Vec<String>> = classes
        .iter()
        .map(|c| vec![c.slug.clone(), c.name.clone(), c.fields.len().to_string()])
        .collect();
    render_grid(&["Slug", "Name", "Fields"], &rows)
}

pub(super) fn render_class(class: &Class) -> String {
    let mut out = format!("{} {}\n", class.name.bold(), format!("({})", class.slug).dimmed());
    if let Some(id) = class.id {
        out.push_str(&format!("{}\n", id.to_string().dimmed()));
    }
    if class.fields.is_empty() {
        out.push_str(&format!("{}\n", "No fields.".dimmed()));
        return out;
    }
    out.push('\n');
    let rows: Vec<Vec<String>> = class
        .fields
        .iter()
        .map(|f| {
            vec![
                f.name.clone(),
                f.label.clone(),
                f.field_type().to_string(),
                f.format().unwrap_or_default().to_string(),
            ]
        })
        .collect();
    out.push_str(&render_grid(&["Name", "Label", "Type", "Format"], &rows));
    out
}

pub(super) fn render_document(doc: &Document) -> String {
    let mut out = format!("{} {}\n", doc.title.bold(), format!("({})", doc.slug).dimmed());
    let mut line = |key: &str, val: String| {
        out.push_str(&format!("  {:<10} {}\n", key.dimmed(), val));
    };
    if let Some(id) = doc.id {
        line("id", id.to_string());
    }
    if let Some(parent) = doc.parent_id {
        line("parent", parent.to_string());
    }
    line("created", doc.created.format("%Y-%m-%d %H:%M").to_string());
    line("updated", doc.updated.format("%Y-%m-%d %H:%M").to_string());
    for (name, value) in &doc.values {
        line(name.as_str(), display_value(value));
    }
    out
}

fn display_value(value: &Value) -> String {
    match value {
        Value::List(items) => items.join(", "),
        other => quireapp::fields::format::apply(None, None, other),
    }
}

pub(super) fn render_listing(listing: &Listing) -> String {
    let mut out = format!(
        "{} {}\n\n",
        listing.class.name.bold(),
        format!("({} total)", listing.total).dimmed()
    );
    let headers: Vec<&str> = listing.table.headers.iter().map(String::as_str).collect();
    let rows: Vec<Vec<String>> = listing.table.rows.iter().map(|r| r.cells.clone()).collect();
    if !rows.is_empty() {
        out.push_str(&render_grid(&headers, &rows));
    }
    if !listing.links.is_empty() {
        out.push('\n');
        out.push_str(&render_links(&listing.links));
        out.push('\n');
    }
    out
}

/// `Previous  1  3  4  [5]  6  7  9  Next`, dimming disabled links.
pub(super) fn render_links(links: &[PageLink]) -> String {
    links
        .iter()
        .map(|link| {
            if link.active {
                format!("[{}]", link.label).bold().to_string()
            } else if link.disabled {
                link.label.dimmed().to_string()
            } else {
                link.label.clone()
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

pub(super) fn render_options(options: &[FieldOption]) -> String {
    let rows: Vec<Vec<String>> = options
        .iter()
        .map(|o| vec![o.value.clone(), o.label.clone()])
        .collect();
    render_grid(&["Value", "Label"], &rows)
}

pub(super) fn render_config(config: &QuireConfig) -> String {
    config
        .entries()
        .into_iter()
        .map(|(key, value)| format!("{} = {}\n", key, value))
        .collect()
}

/// Left-aligned columns sized to their widest cell (capped), header bold.
fn render_grid(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(cell.width().min(MAX_CELL_WIDTH));
            }
        }
    }

    let mut out = String::new();
    let header_line: Vec<String> = headers
        .iter()
        .zip(&widths)
        .map(|(h, &w)| pad_to_width(h, w))
        .collect();
    out.push_str(&format!("{}\n", header_line.join(COLUMN_GAP).trim_end().bold()));

    for row in rows {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, &w)| pad_to_width(&truncate_to_width(cell, w), w))
            .collect();
        out.push_str(line.join(COLUMN_GAP).trim_end());
        out.push('\n');
    }
    out
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}
