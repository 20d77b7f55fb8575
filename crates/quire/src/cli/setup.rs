use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use uuid::Uuid;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "quire",
    bin_name = "quire",
    version,
    disable_help_subcommand = true
)]
#[command(about = "Define content classes and manage their documents", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Data directory (defaults to $QUIRE_DATA, then the OS data dir)
    #[arg(long, global = true, value_name = "PATH", help_heading = "Options")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text, help_heading = "Options")]
    pub output: OutputFormat,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage content classes
    #[command(subcommand)]
    Class(ClassCommands),

    /// Manage documents
    #[command(subcommand)]
    Doc(DocCommands),

    /// Show the effective configuration
    Config,
}

#[derive(Subcommand, Debug)]
pub enum ClassCommands {
    /// List all classes
    #[command(alias = "ls")]
    List,

    /// Show a class and its fields
    Show { slug: String },

    /// Create or update a class from a JSON definition
    Put {
        /// Path to the JSON file
        file: PathBuf,
    },

    /// Delete a class
    #[command(alias = "rm")]
    Delete { slug: String },
}

#[derive(Subcommand, Debug)]
pub enum DocCommands {
    /// Add a document to a class
    Add {
        /// Slug of the class
        class: String,

        #[arg(long)]
        title: String,

        #[arg(long)]
        slug: String,

        /// Id of the parent document
        #[arg(long)]
        parent: Option<Uuid>,

        #[command(flatten)]
        values: ValueArgs,
    },

    /// Change a document
    Edit {
        id: Uuid,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        slug: Option<String>,

        /// Move under this parent document
        #[arg(long, conflicts_with = "top_level")]
        parent: Option<Uuid>,

        /// Move to the top level of its class
        #[arg(long)]
        top_level: bool,

        #[command(flatten)]
        values: ValueArgs,
    },

    /// Show a document
    Show { id: Uuid },

    /// Delete a document
    #[command(alias = "rm")]
    Delete { id: Uuid },

    /// List a class's documents as a table
    #[command(alias = "ls")]
    List {
        /// Slug of the class
        class: String,

        #[arg(long, default_value_t = 1)]
        page: u64,

        /// Documents per page (defaults to the configured per_page)
        #[arg(long)]
        per_page: Option<u64>,
    },

    /// Show the options of a select field
    Options {
        /// Slug of the class
        class: String,

        /// Name of the field
        field: String,
    },
}

#[derive(Args, Debug, Default)]
pub struct ValueArgs {
    /// Set a field value (repeatable)
    #[arg(long = "set", value_name = "NAME=VALUE", value_parser = parse_assignment)]
    pub set: Vec<(String, String)>,
}

fn parse_assignment(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected NAME=VALUE, got `{}`", s)),
    }
}
