//! # CLI Behavior
//!
//! This is **one possible UI client** for quire, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and
//! output formatting.
//!
//! ## Commands
//!
//! ```text
//! quire class list | show <slug> | put <file.json> | rm <slug>
//! quire doc add <class> --title T --slug S [--parent ID] [--set NAME=VALUE]...
//! quire doc edit <id> [--title T] [--slug S] [--parent ID | --top-level] [--set NAME=VALUE]...
//! quire doc show <id> | rm <id>
//! quire doc list <class> [--page N] [--per-page N]
//! quire doc options <class> <field>
//! quire config
//! ```
//!
//! Every command accepts `--data-dir`, `-v/--verbose` and `--output text|json`.
//!
//! ## Class Definitions
//!
//! `class put` reads a class as JSON. Fields carry their type under `type`,
//! plus whatever that type takes:
//!
//! ```json
//! {
//!   "name": "Events",
//!   "slug": "events",
//!   "table_labels": "Title When",
//!   "table_fields": "title when",
//!   "fields": [
//!     { "name": "when", "label": "When", "type": "datetime", "format": "%b %-d, %Y" },
//!     { "name": "kind", "label": "Kind", "type": "select",
//!       "options": { "static": "talk|Talk\nworkshop|Workshop" } }
//!   ]
//! }
//! ```
//!
//! A class with the same slug is updated in place; otherwise a new class is
//! created.
//!
//! ## Module Structure
//!
//! - `commands`: dispatch from parsed arguments to the API
//! - `render`: output formatting (tables, page links, colors, messages)
//! - `setup`: argument parsing via clap

mod commands;
mod render;
pub mod setup;

pub use commands::run;
