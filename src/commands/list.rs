//! List command handler

use std::path::Path;

use anyhow::Result;
use serde_json::json;

use handoff::FileSystemIntermediatesManager;

pub fn cmd_list(
    store: &FileSystemIntermediatesManager,
    step: Option<&str>,
    hash: bool,
    json: bool,
) -> Result<()> {
    let handles = match step {
        Some(step) => store.step_handles(step)?,
        None => store.handles()?,
    };

    if json {
        let mut entries = Vec::with_capacity(handles.len());
        for handle in &handles {
            let mut entry = json!({
                "step": handle.step_key(),
                "output": handle.output_name(),
                "path": relative(store.root(), &store.path_for(handle)),
            });
            if hash {
                entry["digest"] = json!(store.digest(handle)?.as_str());
            }
            entries.push(entry);
        }
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for handle in &handles {
        if hash {
            println!("{}  {}", handle, store.digest(handle)?);
        } else {
            println!("{}", handle);
        }
    }
    Ok(())
}

fn relative(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .into_owned()
}
