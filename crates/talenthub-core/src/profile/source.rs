//! Profile data source trait and the snapshot it returns.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::model::{Profile, TalentProfile};
use crate::completeness::{CompletenessBreakdown, calculate};
use crate::error::Result;

/// Everything the completeness calculator consumes for one user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSnapshot {
    #[serde(default)]
    pub profile: Option<Profile>,
    #[serde(default)]
    pub talent_profile: Option<TalentProfile>,
    /// Number of education rows; only existence matters.
    #[serde(default)]
    pub education_count: usize,
    /// Avatar flag from the auth session metadata.
    #[serde(default)]
    pub session_has_avatar: bool,
}

impl ProfileSnapshot {
    pub fn has_education(&self) -> bool {
        self.education_count > 0
    }

    /// Runs the completeness calculator over this snapshot.
    pub fn breakdown(&self) -> CompletenessBreakdown {
        calculate(
            self.profile.as_ref(),
            self.talent_profile.as_ref(),
            self.has_education(),
            self.session_has_avatar,
        )
    }
}

/// Remote collaborator that loads profile records by user id.
///
/// Implementations talk to the hosted backend; failures are reported as
/// [`crate::TalentError::DataAccess`] and are treated as retryable.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    async fn fetch_snapshot(&self, user_id: &str) -> Result<ProfileSnapshot>;
}
