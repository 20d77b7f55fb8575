//! # CLI Layer
//!
//! This module is **one possible UI client** for quire, not the application
//! itself. It is the only place in the workspace that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: shell arguments become typed commands via clap
//! 2. **Logging**: installs the `tracing` subscriber (`-v` for debug output)
//! 3. **Context Setup**: resolves the data directory and loads configuration
//! 4. **API Dispatch**: calls the matching `QuireApi` method
//! 5. **Output Formatting**: renders the `CmdResult` as text or JSON

use super::render::{
    print_json, print_messages, render_class, render_class_list, render_config,
    render_document, render_listing, render_options,
};
use super::setup::{ClassCommands, Cli, Commands, DocCommands, OutputFormat};
use anyhow::Context;
use clap::Parser;
use quireapp::api::{DocumentEdit, NewDocument, ParentChange, QuireApi};
use quireapp::commands::CmdResult;
use quireapp::init::initialize;
use quireapp::model::Class;
use quireapp::store::fs::FileStore;
use std::path::Path;
use tracing_subscriber::filter::LevelFilter;

struct AppContext {
    api: QuireApi<FileStore>,
    output: OutputFormat,
}

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let ctx = initialize(cli.data_dir.clone())?;
    tracing::debug!(data_dir = %ctx.data_dir.display(), "using data directory");
    let mut app = AppContext {
        api: ctx.api,
        output: cli.output,
    };

    match cli.command {
        Commands::Class(cmd) => match cmd {
            ClassCommands::List => handle_class_list(&app),
            ClassCommands::Show { slug } => handle_class_show(&app, &slug),
            ClassCommands::Put { file } => handle_class_put(&mut app, &file),
            ClassCommands::Delete { slug } => {
                let result = app.api.delete_class(&slug)?;
                emit(&app, &result, |_| String::new())
            }
        },
        Commands::Doc(cmd) => match cmd {
            DocCommands::Add {
                class,
                title,
                slug,
                parent,
                values,
            } => {
                let input = NewDocument {
                    title,
                    slug,
                    parent,
                    values: values.set,
                };
                let result = app.api.add_document(&class, input)?;
                emit(&app, &result, ids_of)
            }
            DocCommands::Edit {
                id,
                title,
                slug,
                parent,
                top_level,
                values,
            } => {
                let parent = match (parent, top_level) {
                    (Some(p), _) => ParentChange::Set(p),
                    (None, true) => ParentChange::TopLevel,
                    (None, false) => ParentChange::Keep,
                };
                let edit = DocumentEdit {
                    title,
                    slug,
                    parent,
                    values: values.set,
                };
                let result = app.api.edit_document(&id, edit)?;
                emit(&app, &result, |_| String::new())
            }
            DocCommands::Show { id } => {
                let result = app.api.get_document(&id)?;
                emit(&app, &result, |r| {
                    r.listed_documents.iter().map(render_document).collect()
                })
            }
            DocCommands::Delete { id } => {
                let result = app.api.delete_document(&id)?;
                emit(&app, &result, |_| String::new())
            }
            DocCommands::List {
                class,
                page,
                per_page,
            } => {
                let result = app.api.browse(&class, page, per_page)?;
                emit(&app, &result, |r| {
                    r.listing.as_ref().map(render_listing).unwrap_or_default()
                })
            }
            DocCommands::Options { class, field } => {
                let result = app.api.field_options(&class, &field)?;
                emit(&app, &result, |r| render_options(&r.options))
            }
        },
        Commands::Config => {
            let result = app.api.show_config();
            emit(&app, &result, |r| {
                r.config.as_ref().map(render_config).unwrap_or_default()
            })
        }
    }
}

/// Logs go to stderr so they never mix with rendered output.
fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Prints `result` in the selected format. Text output is the rendered body
/// followed by the command's messages.
fn emit<F>(app: &AppContext, result: &CmdResult, body: F) -> anyhow::Result<()>
where
    F: FnOnce(&CmdResult) -> String,
{
    match app.output {
        OutputFormat::Json => print_json(result)?,
        OutputFormat::Text => {
            print!("{}", body(result));
            print_messages(&result.messages);
        }
    }
    Ok(())
}

fn ids_of(result: &CmdResult) -> String {
    result
        .affected_documents
        .iter()
        .filter_map(|d| d.id)
        .map(|id| format!("{}\n", id))
        .collect()
}

fn handle_class_list(app: &AppContext) -> anyhow::Result<()> {
    let result = app.api.list_classes()?;
    emit(app, &result, |r| {
        if r.listed_classes.is_empty() {
            String::new()
        } else {
            render_class_list(&r.listed_classes)
        }
    })
}

fn handle_class_show(app: &AppContext, slug: &str) -> anyhow::Result<()> {
    let result = app.api.get_class(slug)?;
    emit(app, &result, |r| r.listed_classes.iter().map(render_class).collect())
}

fn handle_class_put(app: &mut AppContext, file: &Path) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("reading {}", file.display()))?;
    let class: Class = serde_json::from_str(&content)
        .with_context(|| format!("parsing class definition {}", file.display()))?;
    let result = app.api.put_class(class)?;
    emit(app, &result, |_| String::new())
}
