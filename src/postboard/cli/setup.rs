use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "postboard", bin_name = "postboard", version)]
#[command(about = "Create, edit, search, and delete short text posts", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding posts and config (defaults to $POSTBOARD_HOME, then the platform data dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new post
    #[command(alias = "n", alias = "new")]
    Create {
        /// Title of the post
        #[arg(short, long)]
        title: Option<String>,

        /// Body of the post (read from stdin when piped)
        #[arg(short, long)]
        content: Option<String>,

        /// Author of the post
        #[arg(short, long)]
        author: Option<String>,

        /// Never open the editor
        #[arg(long)]
        no_editor: bool,
    },

    /// List posts, newest first
    #[command(alias = "ls")]
    List {
        /// Only show posts whose title, content or author contains this text
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Search posts by title, content or author
    Search {
        /// Search text (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        term: Vec<String>,
    },

    /// View one or more posts in full
    #[command(alias = "v")]
    View {
        /// Posts to show (e.g. 1 3 or an id prefix)
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Edit a post
    #[command(alias = "e")]
    Edit {
        /// Post to edit (e.g. 1 or an id prefix)
        selector: String,

        /// New title
        #[arg(short, long)]
        title: Option<String>,

        /// New body
        #[arg(short, long)]
        content: Option<String>,

        /// New author
        #[arg(short, long)]
        author: Option<String>,
    },

    /// Delete one or more posts
    #[command(alias = "rm")]
    Delete {
        /// Posts to delete (e.g. 1 3 or an id prefix)
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Print where posts and config are stored
    Path,

    /// Get or set configuration
    Config {
        /// Configuration key (storage-key, log-level, list-width)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
