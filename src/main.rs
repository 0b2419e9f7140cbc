//! Handoff CLI - inspect and feed write-once intermediate stores
//!
//! Usage: handoff [--root DIR] <COMMAND>
//!
//! Commands:
//!   list   List stored outputs
//!   show   Print one stored output
//!   put    Store one output (write-once)
//!   check  Report entries that break the store layout

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let store = commands::open_root(cli.config.as_deref(), cli.root.as_deref())?;

    match cli.command {
        Commands::List { step, hash } => commands::cmd_list(&store, step.as_deref(), hash, cli.json),
        Commands::Show { step, output, raw } => commands::cmd_show(&store, &step, &output, raw),
        Commands::Put {
            step,
            output,
            file,
            raw,
        } => commands::cmd_put(&store, &step, &output, file.as_deref(), raw, cli.json),
        Commands::Check => commands::cmd_check(&store, cli.json),
    }
}

/// Logs go to stderr; `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
