use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use talenthub_application::CompletenessService;
use talenthub_infrastructure::JsonFileProfileSource;

pub async fn run(snapshots: &Path, user: &str) -> Result<()> {
    let source = Arc::new(JsonFileProfileSource::new(snapshots.to_path_buf()));
    let service = CompletenessService::new(user, source);

    let breakdown = service
        .reload()
        .await
        .with_context(|| format!("Failed to load profile for {user}"))?;

    println!("{}", serde_json::to_string_pretty(&breakdown)?);
    Ok(())
}
