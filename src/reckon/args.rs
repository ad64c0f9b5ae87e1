use clap::{Parser, Subcommand};

pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_HASH"),
    " ",
    env!("GIT_COMMIT_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "reckon")]
#[command(about = "Multi-tab scratch calculator for the command line", long_about = None)]
#[command(version, long_version = LONG_VERSION)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Operate on the global board
    #[arg(short, long, global = true)]
    pub global: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate an expression in a tab
    #[command(alias = "e")]
    Eval {
        /// Tab position or name
        tab: String,

        /// Expression text (joined with spaces)
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        expression: Vec<String>,
    },

    /// Show tabs, starred rows, and fragments
    #[command(alias = "ls")]
    List,

    /// Manage tabs
    Tab {
        #[command(subcommand)]
        action: TabCmd,
    },

    /// Manage starred rows
    Row {
        #[command(subcommand)]
        action: RowCmd,
    },

    /// Star an entry (TAB:ENTRY)
    Star {
        /// Entry slot, e.g. 1:2
        entry: String,
    },

    /// Unstar an entry (TAB:ENTRY)
    Unstar {
        /// Entry slot, e.g. 1:2
        entry: String,
    },

    /// Delete an entry (TAB:ENTRY)
    #[command(alias = "rm")]
    Delete {
        /// Entry slot, e.g. 1:2
        entry: String,
    },

    /// Re-sequence tabs, entries, or starred rows
    Move {
        #[command(subcommand)]
        action: MoveCmd,
    },

    /// Drop a frozen fragment onto an entry slot
    Drop {
        /// Fragment position (see list output)
        fragment: usize,

        /// Target entry slot, e.g. 1:2
        target: String,
    },

    /// Manage reusable expression fragments
    Frag {
        #[command(subcommand)]
        action: FragCmd,
    },

    /// Show or set the color theme (light or dark)
    Theme {
        /// New theme; omit to show the current one
        value: Option<String>,
    },

    /// Verify and repair starred-row consistency
    Doctor,

    /// Initialize the board store
    Init,
}

#[derive(Subcommand, Debug)]
pub enum TabCmd {
    /// Add a tab
    Add,

    /// Delete a tab and its entries
    #[command(alias = "rm")]
    Delete {
        /// Tab position or name
        tab: String,
    },

    /// Rename a tab (empty names are ignored)
    Rename {
        /// Tab position or name
        tab: String,

        /// New name
        name: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum RowCmd {
    /// Add a starred row
    Add,

    /// Rename a row
    Rename {
        /// Row position or name
        row: String,

        /// New name
        name: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum MoveCmd {
    /// Reorder tabs by position
    Tab { from: usize, to: usize },

    /// Move an entry within or between tabs (TAB:ENTRY TAB:SLOT)
    Entry { from: String, to: String },

    /// Move a starred entry between rows (ROW:INDEX ROW:INDEX), or to "trash"
    Starred { from: String, to: String },
}

#[derive(Subcommand, Debug)]
pub enum FragCmd {
    /// Add a fragment
    Add {
        /// Fragment text, e.g. "*3"
        value: String,
    },

    /// Replace a fragment's text
    Set {
        /// Fragment position (see list output)
        fragment: usize,

        /// New text
        value: String,
    },

    /// Toggle a fragment's frozen state
    Freeze {
        /// Fragment position (see list output)
        fragment: usize,
    },

    /// Delete a fragment
    #[command(alias = "rm")]
    Delete {
        /// Fragment position (see list output)
        fragment: usize,
    },
}
