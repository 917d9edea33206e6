//! Path management for TalentHub local files.
//!
//! ```text
//! ~/.config/talenthub/
//! ├── config.toml        # Application configuration
//! └── onboarding.toml    # Per-user onboarding records
//! ```

use std::path::PathBuf;

use talenthub_core::{Result, TalentError};

const APP_DIR: &str = "talenthub";

/// Resolves TalentHub file locations, optionally under an explicit base
/// directory (tests, portable installs).
#[derive(Debug, Clone, Default)]
pub struct TalentHubPaths {
    base_dir: Option<PathBuf>,
}

impl TalentHubPaths {
    /// Creates a resolver.
    ///
    /// # Arguments
    ///
    /// * `base_dir` - Directory that replaces the platform config directory,
    ///   or `None` for the platform default
    pub fn new(base_dir: Option<PathBuf>) -> Self {
        Self { base_dir }
    }

    /// Returns the configuration directory (e.g. `~/.config/talenthub/`).
    ///
    /// Uses `dirs::config_dir()`, so the location follows XDG on Linux and
    /// the platform conventions on macOS and Windows.
    ///
    /// # Errors
    ///
    /// Returns [`TalentError::Config`] when the platform has no config directory.
    pub fn config_dir(&self) -> Result<PathBuf> {
        if let Some(base) = &self.base_dir {
            return Ok(base.clone());
        }
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| TalentError::config("Cannot find configuration directory"))
    }

    /// Returns the path to `config.toml`.
    pub fn config_file(&self) -> Result<PathBuf> {
        Ok(self.config_dir()?.join("config.toml"))
    }

    /// Returns the path to `onboarding.toml`, shared by every user on this machine.
    pub fn onboarding_file(&self) -> Result<PathBuf> {
        Ok(self.config_dir()?.join("onboarding.toml"))
    }
}
