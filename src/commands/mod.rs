//! Command handlers for the `handoff` binary

mod check;
mod list;
mod put;
mod show;

pub use check::cmd_check;
pub use list::cmd_list;
pub use put::cmd_put;
pub use show::cmd_show;

use std::path::Path;

use anyhow::{Context, Result};

use handoff::config::{Backend, Config};
use handoff::{open_filesystem, FileSystemIntermediatesManager};

/// Resolve configuration and open the filesystem store the CLI works on
///
/// `--root` wins over `HANDOFF_ROOT`, which wins over `[store] root`.
pub fn open_root(
    config_path: Option<&Path>,
    root: Option<&Path>,
) -> Result<FileSystemIntermediatesManager> {
    let (config, warnings) = Config::discover(config_path).context("loading configuration")?;
    for w in &warnings {
        match (w.line, &w.suggestion) {
            (Some(line), Some(s)) => eprintln!(
                "⚠ Unknown config key '{}' in {}:{} (did you mean '{}'?)",
                w.key,
                w.file.display(),
                line,
                s
            ),
            (Some(line), None) => {
                eprintln!("⚠ Unknown config key '{}' in {}:{}", w.key, w.file.display(), line)
            }
            _ => eprintln!("⚠ Unknown config key '{}' in {}", w.key, w.file.display()),
        }
    }

    let mut config = config.with_env_overrides();
    if let Some(root) = root {
        config.store.root = Some(root.to_path_buf());
    }
    if config.store.root.is_none() {
        anyhow::bail!("no store root; pass --root, set HANDOFF_ROOT, or set [store] root");
    }
    if config.store.backend == Backend::Memory {
        tracing::debug!("configured backend is in-memory; the CLI always reads the filesystem root");
        config.store.backend = Backend::Filesystem;
    }

    open_filesystem(&config).context("opening store")
}
