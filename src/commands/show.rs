//! Show command handler

use std::io::Write;

use anyhow::{Context, Result};

use handoff::{FileSystemIntermediatesManager, StepOutputHandle};

pub fn cmd_show(
    store: &FileSystemIntermediatesManager,
    step: &str,
    output: &str,
    raw: bool,
) -> Result<()> {
    let handle = StepOutputHandle::new(step, output)?;

    if raw {
        let bytes = store.get_bytes(&handle)?;
        let mut out = std::io::stdout().lock();
        out.write_all(&bytes)?;
        out.flush()?;
        return Ok(());
    }

    let value: serde_json::Value = store
        .get_value(&handle)
        .with_context(|| format!("decoding {} (try --raw)", handle))?;
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}
