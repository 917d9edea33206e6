//! TOML-backed onboarding store.
//!
//! All users share one `onboarding.toml`; each user owns one table keyed by
//! user id, so a reset for one user never touches another. Tables are decoded
//! per user: a malformed entry fails only that user's `load`, and `save` or
//! `clear` replace it.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use talenthub_core::Result;
use talenthub_core::onboarding::{OnboardingRecord, OnboardingStore};

use crate::paths::TalentHubPaths;
use crate::storage::AtomicTomlFile;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct OnboardingFile {
    /// Raw per-user tables, decoded on access
    #[serde(default)]
    users: BTreeMap<String, toml::Value>,
}

pub struct TomlOnboardingStore {
    file: AtomicTomlFile<OnboardingFile>,
}

impl TomlOnboardingStore {
    /// Uses the default platform location.
    pub fn new() -> Result<Self> {
        Ok(Self::with_path(TalentHubPaths::default().onboarding_file()?))
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self {
            file: AtomicTomlFile::new(path),
        }
    }
}

impl OnboardingStore for TomlOnboardingStore {
    fn load(&self, user_id: &str) -> Result<Option<OnboardingRecord>> {
        let file = self.file.load()?.unwrap_or_default();
        let Some(raw) = file.users.get(user_id) else {
            return Ok(None);
        };
        let record = raw.clone().try_into::<OnboardingRecord>().map_err(|e| {
            tracing::warn!(user_id = %user_id, "[Onboarding] Unreadable stored record: {}", e);
            e
        })?;
        Ok(Some(record))
    }

    fn save(&self, user_id: &str, record: &OnboardingRecord) -> Result<()> {
        let value = toml::Value::try_from(record)?;
        self.file.update(OnboardingFile::default(), |file| {
            file.users.insert(user_id.to_string(), value);
        })?;
        Ok(())
    }

    fn clear(&self, user_id: &str) -> Result<()> {
        if !self.file.path().exists() {
            return Ok(());
        }
        self.file.update(OnboardingFile::default(), |file| {
            file.users.remove(user_id);
        })?;
        Ok(())
    }
}
