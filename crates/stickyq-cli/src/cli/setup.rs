use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "stickyq",
    bin_name = "stickyq",
    version,
    disable_help_subcommand = true
)]
#[command(about = "Pinned-first query augmentation for content listings", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (defaults to ./stickyq.toml when present)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub config: Option<PathBuf>,

    /// JSON file holding per-item attributes
    #[arg(
        short,
        long,
        global = true,
        default_value = "items.json",
        help_heading = "Options"
    )]
    pub store: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Augment a query specification read as JSON
    Augment {
        /// Input file (reads stdin when omitted or "-")
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Restrict to pinned (true) or unpinned (false) items
        #[arg(long, alias = "sticky")]
        pinned: Option<String>,

        /// Order pinned items first
        #[arg(long = "pinned-first", alias = "sticky-first")]
        pinned_first: Option<String>,

        /// Only augment when this content type is configured
        #[arg(long = "content-type")]
        content_type: Option<String>,
    },

    /// Print whether an item is pinned
    Get {
        /// Item id (UUID)
        id: String,
    },

    /// Set or clear the pinned flag of an item
    Set {
        /// Item id (UUID)
        id: String,

        /// true / false (also 1/0, yes/no, on/off)
        value: String,
    },

    /// Apply a saved edit form's pinned checkbox
    Edit {
        /// Item id (UUID)
        id: String,

        #[arg(long = "content-type")]
        content_type: String,

        /// Submitted checkbox value; omit when unchecked
        #[arg(long)]
        checkbox: Option<String>,

        /// Treat as an autosave (never writes)
        #[arg(long)]
        autosave: bool,
    },

    /// Print the attribute schema and listing parameters as JSON
    Schema,

    /// Print a sample stickyq.toml
    Config,
}

pub fn parse_cli() -> Cli {
    Cli::parse()
}
