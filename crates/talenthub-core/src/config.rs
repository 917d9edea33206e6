//! Configuration types.
//!
//! Every field has a default so a partial (or missing) `config.toml` is valid.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::onboarding::{NavigationPolicy, StepRules};

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct TalentHubConfig {
    #[serde(default)]
    pub sync: SyncSettings,
    #[serde(default)]
    pub onboarding: OnboardingSettings,
}

/// Profile sync timing.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SyncSettings {
    /// Trailing-edge delay of `debounced_refresh`
    pub debounce_delay_ms: u64,
    /// Calls arriving this soon after an executed refresh are collapsed into it
    pub min_refresh_interval_ms: u64,
    pub default_retries: u32,
    pub retry_delay_ms: u64,
    pub fresh_threshold_secs: u64,
    pub recent_threshold_secs: u64,
}

impl Default for SyncSettings {
    fn default() -> Self {
        Self {
            debounce_delay_ms: 300,
            min_refresh_interval_ms: 1000,
            default_retries: 2,
            retry_delay_ms: 1000,
            fresh_threshold_secs: 30,
            recent_threshold_secs: 300,
        }
    }
}

impl SyncSettings {
    pub fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.debounce_delay_ms)
    }

    pub fn min_refresh_interval(&self) -> Duration {
        Duration::from_millis(self.min_refresh_interval_ms)
    }

    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }

    pub fn fresh_threshold(&self) -> Duration {
        Duration::from_secs(self.fresh_threshold_secs)
    }

    pub fn recent_threshold(&self) -> Duration {
        Duration::from_secs(self.recent_threshold_secs)
    }
}

/// Onboarding controller thresholds and timings.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct OnboardingSettings {
    pub navigation_policy: NavigationPolicy,
    /// Upper bound on waiting for completeness to change after the wizard finishes
    pub settle_timeout_ms: u64,
    pub settle_poll_interval_ms: u64,
    /// Stored completeness below this marks a new user
    pub new_user_threshold: u8,
    /// `basic_info` at or above this counts as having completed the basics
    pub basics_threshold: u8,
    pub basic_complete_threshold: u8,
    pub early_step_completeness_threshold: u8,
}

impl Default for OnboardingSettings {
    fn default() -> Self {
        let rules = StepRules::default();
        Self {
            navigation_policy: NavigationPolicy::default(),
            settle_timeout_ms: 1000,
            settle_poll_interval_ms: 250,
            new_user_threshold: 20,
            basics_threshold: 30,
            basic_complete_threshold: rules.basic_complete_threshold,
            early_step_completeness_threshold: rules.early_step_threshold,
        }
    }
}

impl OnboardingSettings {
    pub fn settle_timeout(&self) -> Duration {
        Duration::from_millis(self.settle_timeout_ms)
    }

    pub fn settle_poll_interval(&self) -> Duration {
        Duration::from_millis(self.settle_poll_interval_ms)
    }

    pub fn step_rules(&self) -> StepRules {
        StepRules {
            basic_complete_threshold: self.basic_complete_threshold,
            early_step_threshold: self.early_step_completeness_threshold,
        }
    }
}
