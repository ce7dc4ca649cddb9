// src/cli/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::domain::Tag;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Path to config file (optional)
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// API base URL, overrides config and NOTEHUB_BASE_URL
    #[arg(long, value_name = "URL", global = true)]
    pub base_url: Option<String>,

    /// Bearer token, overrides config and NOTEHUB_TOKEN
    #[arg(long, value_name = "TOKEN", global = true)]
    pub token: Option<String>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute (list, create, delete, tags, or init)
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List notes, one page at a time
    List {
        /// Optional search term
        #[arg(value_name = "SEARCH")]
        search: Option<String>,

        /// Page number, starting at 1
        #[arg(long, default_value_t = 1)]
        page: u32,

        /// Notes per page (defaults to the configured page size)
        #[arg(long, value_name = "N")]
        per_page: Option<u32>,

        /// Only notes with this tag
        #[arg(long, value_parser = parse_tag)]
        tag: Option<Tag>,

        /// Output the page as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a note; missing fields are asked for interactively
    Create {
        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long)]
        content: Option<String>,

        /// One of: Todo, Work, Personal, Meeting, Shopping
        #[arg(long)]
        tag: Option<String>,

        /// Accept any non-empty tag instead of the fixed set
        #[arg(long)]
        loose_tags: bool,

        /// Output the created note as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a note by ID
    Delete {
        /// Note ID to delete
        #[arg(value_name = "NOTE_ID")]
        note_id: String,

        /// Output the deleted note as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the available tags
    Tags,

    /// Write a default config file (to --config or the default location)
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn parse_tag(s: &str) -> Result<Tag, String> {
    s.parse::<Tag>().map_err(|e| e.to_string())
}
