//! CLI command structure using clap

use clap::{Args, Parser, Subcommand};
use criaprompt_core::library::SortKey;
use criaprompt_core::template::Dialect;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "criaprompt")]
#[command(version, about = "Create, browse and fill prompt templates", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to criaprompt.toml
    #[arg(long, global = true, env = "CRIAPROMPT_CONFIG")]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Where a template comes from: a library prompt, a file, or stdin
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Template file (reads stdin when omitted)
    #[arg(conflicts_with = "prompt")]
    pub file: Option<PathBuf>,

    /// Prompt id from the library
    #[arg(short, long)]
    pub prompt: Option<String>,

    /// Marker syntax: hash (#name) or bracket ((name) / {name})
    #[arg(short, long, value_parser = parse_dialect)]
    pub dialect: Option<Dialect>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the placeholders of a template
    Fields {
        #[command(flatten)]
        source: SourceArgs,

        #[arg(long)]
        json: bool,

        /// Save the merged field list back to the library prompt
        #[arg(long, requires = "prompt", conflicts_with = "dialect")]
        save: bool,
    },

    /// Fill a template and print the result
    Render {
        #[command(flatten)]
        source: SourceArgs,

        /// Value for a placeholder (repeatable)
        #[arg(short = 's', long = "set", value_name = "NAME=VALUE")]
        set: Vec<String>,

        /// JSON object of placeholder values
        #[arg(short, long)]
        bindings: Option<PathBuf>,
    },

    /// Print the default values of a template's fields as JSON
    Defaults {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// List prompts in the library
    List {
        /// Text to search in title, description, content and tags
        #[arg(short, long)]
        query: Option<String>,

        #[arg(short, long)]
        tag: Option<String>,

        #[arg(short, long)]
        category: Option<String>,

        /// Only public prompts
        #[arg(long)]
        public: bool,

        /// Order: library, views, favorites or title
        #[arg(long, default_value = "library")]
        sort: SortKey,

        #[arg(long)]
        json: bool,
    },

    /// Show one prompt
    Show {
        id: String,

        #[arg(long)]
        json: bool,
    },

    /// Count prompts per tag
    Tags {
        #[arg(long)]
        json: bool,
    },

    /// Print the JSON Schema of a prompt record
    Schema,
}

fn parse_dialect(value: &str) -> Result<Dialect, String> {
    value.parse::<Dialect>().map_err(|e| e.to_string())
}
