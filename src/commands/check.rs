//! Check command handler

use anyhow::Result;
use serde_json::json;

use handoff::FileSystemIntermediatesManager;

pub fn cmd_check(store: &FileSystemIntermediatesManager, json: bool) -> Result<()> {
    let issues = store.verify()?;

    if json {
        let entries: Vec<_> = issues
            .iter()
            .map(|i| json!({ "path": i.path().display().to_string(), "issue": i.describe() }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else if issues.is_empty() {
        println!("✓ {} is consistent", store.root().display());
    } else {
        for issue in &issues {
            println!("✗ {}: {}", issue.path().display(), issue.describe());
        }
    }

    if !issues.is_empty() {
        anyhow::bail!("{} layout issue(s) found", issues.len());
    }
    Ok(())
}
