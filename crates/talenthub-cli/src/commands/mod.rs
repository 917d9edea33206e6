pub mod completeness;
pub mod matching;
pub mod onboarding;

use std::path::PathBuf;

use anyhow::Result;
use talenthub_core::config::TalentHubConfig;
use talenthub_infrastructure::{ConfigService, TalentHubPaths};

/// Resolved configuration and file locations shared by the commands.
pub struct Context {
    pub config: TalentHubConfig,
    pub paths: TalentHubPaths,
}

impl Context {
    pub fn new(config_path: Option<PathBuf>, data_dir: Option<PathBuf>) -> Result<Self> {
        let config_service = match config_path {
            Some(path) => ConfigService::with_path(path),
            None => ConfigService::new()?,
        };
        Ok(Self {
            config: config_service.get_config()?,
            paths: TalentHubPaths::new(data_dir),
        })
    }
}
