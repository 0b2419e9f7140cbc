use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Handoff - inspect and feed write-once intermediate stores
#[derive(Parser, Debug)]
#[command(name = "handoff")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (default: ./handoff.toml, then the user config)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Store root directory (overrides [store] root)
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Machine-readable JSON output
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List stored outputs as step/output
    List {
        /// Only outputs of this step
        #[arg(long)]
        step: Option<String>,

        /// Show the SHA-256 digest of each payload
        #[arg(long)]
        hash: bool,
    },

    /// Print one stored output
    Show {
        /// Step key
        step: String,

        /// Output name
        output: String,

        /// Dump the stored bytes instead of decoding them
        #[arg(long)]
        raw: bool,
    },

    /// Store one output (write-once) from stdin or a file
    Put {
        /// Step key
        step: String,

        /// Output name
        output: String,

        /// Read the value from this file instead of stdin
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Store the input bytes verbatim instead of parsing JSON
        #[arg(long)]
        raw: bool,
    },

    /// Report entries that break the store layout (exits non-zero if any)
    Check,
}
