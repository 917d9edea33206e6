//! Configuration service implementation.
//!
//! Loads `TalentHubConfig` from `config.toml`, falling back to defaults when
//! the file does not exist.

use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use talenthub_core::Result;
use talenthub_core::config::TalentHubConfig;

use crate::paths::TalentHubPaths;
use crate::storage::AtomicTomlFile;

/// Loads and caches the application configuration.
#[derive(Clone)]
pub struct ConfigService {
    path: PathBuf,
    config: Arc<RwLock<Option<TalentHubConfig>>>,
}

impl ConfigService {
    /// Uses the default platform location.
    pub fn new() -> Result<Self> {
        Ok(Self::with_path(TalentHubPaths::default().config_file()?))
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self {
            path,
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Returns the configuration, reading the file on first access.
    ///
    /// A missing file yields defaults; a malformed file is an error.
    pub fn get_config(&self) -> Result<TalentHubConfig> {
        if let Ok(cached) = self.config.read()
            && let Some(config) = cached.as_ref()
        {
            return Ok(config.clone());
        }

        let loaded = AtomicTomlFile::<TalentHubConfig>::new(self.path.clone())
            .load()?
            .unwrap_or_default();
        tracing::debug!("[Config] Loaded configuration from {:?}", self.path);

        if let Ok(mut cache) = self.config.write() {
            *cache = Some(loaded.clone());
        }
        Ok(loaded)
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        if let Ok(mut cache) = self.config.write() {
            *cache = None;
        }
    }
}
