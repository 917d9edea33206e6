//! Profile domain models.
//!
//! Records are read from the hosted backend and may be partially loaded or
//! come from legacy rows, so every content field is optional.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Identity record owned by a user account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Unique user identifier
    pub id: String,
    #[serde(default)]
    pub full_name: Option<String>,
    /// Account email, used to reject names auto-filled from the email prefix
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    /// Completeness score last persisted by the backend. May lag behind the
    /// live breakdown.
    #[serde(default)]
    pub completeness: Option<u8>,
}

impl Profile {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Local part of the account email, empty when no email is known.
    pub fn email_local_part(&self) -> &str {
        self.email
            .as_deref()
            .and_then(|email| email.split('@').next())
            .unwrap_or("")
    }

    /// Stored completeness, treating an absent score as zero.
    pub fn stored_completeness(&self) -> u8 {
        self.completeness.unwrap_or(0)
    }
}

/// Years-of-experience buckets accepted by the talent profile form.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
pub enum ExperienceLevel {
    #[serde(rename = "0-1")]
    #[strum(serialize = "0-1")]
    UpToOneYear,
    #[serde(rename = "1-3")]
    #[strum(serialize = "1-3")]
    OneToThreeYears,
    #[serde(rename = "3-6")]
    #[strum(serialize = "3-6")]
    ThreeToSixYears,
    #[serde(rename = "6+")]
    #[strum(serialize = "6+")]
    SixPlusYears,
}

/// Professional record keyed 1:1 to a user.
///
/// `experience_level` is kept as the raw stored string because legacy rows
/// contain values outside [`ExperienceLevel`]; use
/// [`TalentProfile::experience_level`] to get the validated value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TalentProfile {
    pub user_id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub skills: Option<Vec<String>>,
    #[serde(default, rename = "experience_level")]
    pub experience_level_raw: Option<String>,
    /// Primary category reference
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub portfolio_url: Option<String>,
    #[serde(default)]
    pub linkedin_url: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
}

impl TalentProfile {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            ..Self::default()
        }
    }

    /// Parsed experience level; `None` when absent or not one of the known buckets.
    pub fn experience_level(&self) -> Option<ExperienceLevel> {
        self.experience_level_raw
            .as_deref()
            .and_then(|raw| raw.trim().parse().ok())
    }

    pub fn skills(&self) -> &[String] {
        self.skills.as_deref().unwrap_or(&[])
    }
}

/// Returns the trimmed value when the field holds non-blank text.
pub fn present(field: &Option<String>) -> Option<&str> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}
