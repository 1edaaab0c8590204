//! smartnotes: minimal CLI for creating and searching notes
//!
//! All state lives in a single JSON file owned by `smartnotes_core`; this
//! binary only parses arguments, validates input and renders results.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use smartnotes_core::{default_log_level, init_logging, open_store};
use std::path::PathBuf;

mod commands;
mod config;
mod render;

#[derive(Parser)]
#[command(name = "smartnotes")]
#[command(about = "Minimal CLI for creating and searching notes", long_about = None)]
#[command(version)]
#[command(after_help = "\
Examples:
  smartnotes add --title \"Lab\" --body \"Finish the report\" --tags uni urgent
  smartnotes list --tag uni
  smartnotes search \"report\"
  smartnotes delete <id>")]
struct Cli {
    /// Backing notes file (defaults to the platform data directory)
    #[arg(long, global = true, value_name = "PATH")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new note
    Add {
        /// Note title
        #[arg(long)]
        title: String,

        /// Note body
        #[arg(long)]
        body: String,

        /// Tags attached to the note
        #[arg(long, num_args = 0.., value_name = "TAG")]
        tags: Vec<String>,
    },

    /// List all notes
    List {
        /// Only show notes carrying this tag (case-insensitive)
        #[arg(long)]
        tag: Option<String>,
    },

    /// Search notes by keyword
    Search {
        /// Keyword matched against title, body and tags
        keyword: String,
    },

    /// Replace a note's title, body and tags
    Update {
        /// Note id
        note_id: String,

        /// New title
        #[arg(long)]
        title: String,

        /// New body
        #[arg(long)]
        body: String,

        /// New tags (replaces the previous set)
        #[arg(long, num_args = 0.., value_name = "TAG")]
        tags: Vec<String>,
    },

    /// Delete a note by id
    Delete {
        /// Note id
        note_id: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging_best_effort();

    let path = match cli.file {
        Some(path) => path,
        None => config::default_notes_file()?,
    };
    let store = open_store(&path)
        .with_context(|| format!("Failed to open note store at {}", path.display()))?;

    let output = match cli.command {
        Commands::Add { title, body, tags } => {
            commands::add::execute(&store, &title, &body, tags)?
        }
        Commands::List { tag } => commands::list::execute(&store, tag.as_deref())?,
        Commands::Search { keyword } => commands::search::execute(&store, &keyword)?,
        Commands::Update {
            note_id,
            title,
            body,
            tags,
        } => commands::update::execute(&store, &note_id, &title, &body, tags)?,
        Commands::Delete { note_id } => commands::delete::execute(&store, &note_id)?,
    };
    println!("{}", output);

    Ok(())
}

/// A logging bootstrap failure degrades to a stderr warning; it never
/// blocks the command.
fn init_logging_best_effort() {
    let log_dir = match config::default_log_dir() {
        Ok(dir) => dir,
        Err(err) => {
            eprintln!("warning: logging disabled: {err}");
            return;
        }
    };
    let Some(log_dir) = log_dir.to_str() else {
        eprintln!("warning: logging disabled: log directory is not valid UTF-8");
        return;
    };
    if let Err(err) = init_logging(default_log_level(), log_dir) {
        eprintln!("warning: logging disabled: {err}");
    }
}
