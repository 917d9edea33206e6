//! Onboarding state domain models.

use serde::{Deserialize, Deserializer, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Top-level view the onboarding flow routes the user to.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OnboardingView {
    #[default]
    Welcome,
    Dashboard,
    Wizard,
    Settings,
}

/// Mutable onboarding session state for one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingState {
    pub is_first_time_user: bool,
    pub current_view: OnboardingView,
    pub current_step: u32,
    pub show_welcome: bool,
    pub is_initialized: bool,
    /// Epoch milliseconds of the last state change
    pub last_activity: i64,
}

impl OnboardingState {
    /// Pre-initialization state: first-time users land on the welcome view,
    /// returning users on the dashboard until completeness data arrives.
    pub fn new(is_first_time_user: bool) -> Self {
        Self {
            is_first_time_user,
            current_view: if is_first_time_user {
                OnboardingView::Welcome
            } else {
                OnboardingView::Dashboard
            },
            current_step: 0,
            show_welcome: is_first_time_user,
            is_initialized: false,
            last_activity: now_millis(),
        }
    }

    /// State forced by an explicit onboarding reset.
    pub fn reset(is_initialized: bool) -> Self {
        Self {
            is_initialized,
            ..Self::new(true)
        }
    }

    pub fn touch(&mut self) {
        self.last_activity = now_millis();
    }
}

impl Default for OnboardingState {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Persisted onboarding position for one user.
///
/// Replaces the loose per-key strings with one typed record; see
/// [`OnboardingKeys`] for the flat key layout used by key-value stores.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<u32>,
    /// Unknown view names read back as `None`
    #[serde(
        default,
        deserialize_with = "known_view",
        skip_serializing_if = "Option::is_none"
    )]
    pub view: Option<OnboardingView>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_activity: Option<i64>,
    /// Epoch milliseconds at which onboarding was completed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<i64>,
}

impl OnboardingRecord {
    pub fn from_state(state: &OnboardingState, completed: Option<i64>) -> Self {
        Self {
            step: Some(state.current_step),
            view: Some(state.current_view),
            last_activity: Some(state.last_activity),
            completed,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.step.is_none()
            && self.view.is_none()
            && self.last_activity.is_none()
            && self.completed.is_none()
    }
}

fn known_view<'de, D>(deserializer: D) -> Result<Option<OnboardingView>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|name| match name.parse() {
        Ok(view) => Some(view),
        Err(_) => {
            tracing::warn!(view = %name, "[Onboarding] Ignoring unknown stored view");
            None
        }
    }))
}

/// Per-user key names for flat key-value persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnboardingKeys {
    pub step: String,
    pub view: String,
    pub last_activity: String,
    pub completed: String,
}

impl OnboardingKeys {
    pub fn for_user(user_id: &str) -> Self {
        Self {
            step: format!("onboarding.step.{user_id}"),
            view: format!("onboarding.view.{user_id}"),
            last_activity: format!("onboarding.lastActivity.{user_id}"),
            completed: format!("onboarding.completed.{user_id}"),
        }
    }

    pub fn all(&self) -> [&str; 4] {
        [
            self.step.as_str(),
            self.view.as_str(),
            self.last_activity.as_str(),
            self.completed.as_str(),
        ]
    }
}

pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
