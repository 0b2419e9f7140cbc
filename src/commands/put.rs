//! Put command handler

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::json;

use handoff::{FileSystemIntermediatesManager, StepOutputHandle};

pub fn cmd_put(
    store: &FileSystemIntermediatesManager,
    step: &str,
    output: &str,
    file: Option<&Path>,
    raw: bool,
    json: bool,
) -> Result<()> {
    let handle = StepOutputHandle::new(step, output)?;

    let input = match file {
        Some(path) => {
            std::fs::read(path).with_context(|| format!("reading {}", path.display()))?
        }
        None => {
            let mut buf = Vec::new();
            std::io::stdin()
                .lock()
                .read_to_end(&mut buf)
                .context("reading stdin")?;
            buf
        }
    };

    if raw {
        store.set_bytes(&handle, &input)?;
    } else {
        let value: serde_json::Value = serde_json::from_slice(&input)
            .context("input is not valid JSON (use --raw to store bytes verbatim)")?;
        store.set_value(&handle, &value)?;
    }

    let path = store.path_for(&handle);
    if json {
        println!(
            "{}",
            json!({ "stored": handle.to_string(), "path": path.display().to_string() })
        );
    } else {
        println!("✓ Stored {} at {}", handle, path.display());
    }
    Ok(())
}
