//! Profile source backed by a JSON export.
//!
//! The file maps user ids to [`ProfileSnapshot`]s. It is re-read on every
//! fetch so edits show up on the next forced sync, the same way a refetch
//! against the hosted backend would.

use std::collections::HashMap;
use std::path::PathBuf;

use async_trait::async_trait;
use talenthub_core::profile::{ProfileSnapshot, ProfileSource};
use talenthub_core::{Result, TalentError};

pub struct JsonFileProfileSource {
    path: PathBuf,
}

impl JsonFileProfileSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Reads every snapshot in the file.
    pub async fn load_all(&self) -> Result<HashMap<String, ProfileSnapshot>> {
        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            TalentError::data_access(format!("Failed to read {:?}: {}", self.path, e))
        })?;
        Ok(serde_json::from_str(&content)?)
    }
}

#[async_trait]
impl ProfileSource for JsonFileProfileSource {
    async fn fetch_snapshot(&self, user_id: &str) -> Result<ProfileSnapshot> {
        let mut snapshots = self.load_all().await?;
        snapshots
            .remove(user_id)
            .ok_or_else(|| TalentError::not_found("profile", user_id))
    }
}
