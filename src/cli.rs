use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "clipvault", about = "Clipboard history with expiring entries")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Copy text to the system clipboard
    Copy {
        /// Text to copy
        text: String,

        /// History key for later lookup (generated when --expire-ms
        /// is set and no key is given)
        #[arg(long)]
        key: Option<String>,

        /// Drop the entry from history after this many milliseconds,
        /// waiting for the expiry before exiting
        #[arg(long)]
        expire_ms: Option<u64>,

        /// Print the stored history record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the current clipboard text
    Paste,

    /// Probe whether a clipboard capability is present
    Check,
}
