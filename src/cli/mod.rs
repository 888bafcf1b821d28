//! CLI definitions using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

pub mod commands;

/// Cairn - self-hosted personal knowledge tracker
#[derive(Parser, Debug)]
#[command(name = "cairn", author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Database path (default: ~/.cairn/cairn.db)
    #[arg(long, global = true, env = "CAIRN_DB")]
    pub db: Option<PathBuf>,

    /// Output as JSON (for scripting)
    #[arg(long, global = true)]
    pub json: bool,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (no output except errors)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the database and apply migrations
    Init {
        /// Overwrite an existing database
        #[arg(long)]
        force: bool,
    },

    /// List all entries, most recently updated first
    List,

    /// Notes
    Note {
        #[command(subcommand)]
        command: NoteCommands,
    },

    /// Bookmarks
    Bookmark {
        #[command(subcommand)]
        command: BookmarkCommands,
    },

    /// Todo lists
    Todo {
        #[command(subcommand)]
        command: TodoCommands,
    },

    /// Print version information
    Version,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completion generation.
#[derive(ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ============================================================================
// Note Commands
// ============================================================================

#[derive(Subcommand, Debug)]
pub enum NoteCommands {
    /// Create a note
    Add {
        /// Note title
        title: String,

        /// Note body
        #[arg(long, default_value = "")]
        body: String,
    },

    /// Show a note
    Show {
        /// Entry ID
        id: String,
    },

    /// Edit a note's title and/or body
    Edit {
        /// Entry ID
        id: String,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New body
        #[arg(long)]
        body: Option<String>,
    },

    /// Delete a note
    Rm {
        /// Entry ID
        id: String,
    },
}

// ============================================================================
// Bookmark Commands
// ============================================================================

#[derive(Subcommand, Debug)]
pub enum BookmarkCommands {
    /// Create a bookmark
    Add {
        /// Bookmark title
        title: String,

        /// Target URL
        url: String,
    },

    /// Show a bookmark with its liveness metadata
    Show {
        /// Entry ID
        id: String,
    },

    /// Edit a bookmark's title and/or URL
    Edit {
        /// Entry ID
        id: String,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New URL
        #[arg(long)]
        url: Option<String>,
    },

    /// Delete a bookmark
    Rm {
        /// Entry ID
        id: String,
    },

    /// Fetch the URL once and record status + content hash
    Check {
        /// Entry ID
        id: String,
    },
}

// ============================================================================
// Todo Commands
// ============================================================================

#[derive(Subcommand, Debug)]
pub enum TodoCommands {
    /// Create a todo list
    Add {
        /// List title
        title: String,
    },

    /// Show a todo list with its items
    Show {
        /// Entry ID
        id: String,
    },

    /// Rename a todo list
    Edit {
        /// Entry ID
        id: String,

        /// New title
        title: String,
    },

    /// Delete a todo list and all its items
    Rm {
        /// Entry ID
        id: String,
    },

    /// Todo items
    Item {
        #[command(subcommand)]
        command: TodoItemCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum TodoItemCommands {
    /// Append an item to a todo list
    Add {
        /// Owning entry ID
        entry_id: String,

        /// Item text
        body: String,
    },

    /// Replace an item's text
    Edit {
        /// Item ID
        item_id: String,

        /// New text
        body: String,
    },

    /// Toggle an item's done flag
    Toggle {
        /// Item ID
        item_id: String,
    },

    /// Delete an item
    Rm {
        /// Item ID
        item_id: String,
    },
}
