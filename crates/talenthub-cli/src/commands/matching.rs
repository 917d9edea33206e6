use std::path::Path;

use anyhow::{Context, Result};
use talenthub_core::matching::{Opportunity, rank_talents};
use talenthub_infrastructure::JsonFileProfileSource;

pub async fn run(opportunity: &Path, snapshots: &Path) -> Result<()> {
    let content = tokio::fs::read_to_string(opportunity)
        .await
        .with_context(|| format!("Failed to read {}", opportunity.display()))?;
    let opportunity: Opportunity =
        serde_json::from_str(&content).context("Failed to parse opportunity")?;

    let snapshots = JsonFileProfileSource::new(snapshots.to_path_buf())
        .load_all()
        .await?;
    let talents = snapshots
        .values()
        .filter_map(|snapshot| snapshot.talent_profile.as_ref());

    let ranked = rank_talents(&opportunity, talents);
    tracing::info!(
        opportunity = %opportunity.id,
        candidates = snapshots.len(),
        matches = ranked.len(),
        "[Matching] Ranked talents"
    );
    println!("{}", serde_json::to_string_pretty(&ranked)?);
    Ok(())
}
