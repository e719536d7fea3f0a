use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "playbook",
    bin_name = "playbook",
    version,
    disable_help_subcommand = true
)]
#[command(about = "Static paths, search and site output for playbook documentation", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Content root (overrides `content_root` from playbook.toml)
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub content: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List collections
    #[command(display_order = 1)]
    Collections,

    /// List the sections of a collection
    #[command(display_order = 2)]
    Sections {
        collection: String,

        /// Sidebar order, with titles
        #[arg(long)]
        nav: bool,
    },

    /// Print every page the static build must produce
    #[command(display_order = 3)]
    Paths {
        /// Emit JSON instead of routes
        #[arg(long)]
        json: bool,
    },

    /// Show one section
    #[command(display_order = 4)]
    Show {
        collection: String,
        section: String,

        /// Render to HTML
        #[arg(long)]
        html: bool,
    },

    /// Search the index
    #[command(display_order = 5)]
    Search {
        /// Search terms, joined with spaces
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Compare the search index with the content tree
    #[command(display_order = 6)]
    Check,

    /// Write the rendered site
    #[command(display_order = 7)]
    Build {
        /// Output directory
        #[arg(long, short, value_name = "DIR")]
        out: PathBuf,
    },
}
