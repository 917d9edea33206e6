//! Onboarding store trait.

use crate::error::Result;
use crate::onboarding::model::OnboardingRecord;

/// Per-user local persistence for onboarding position.
///
/// Calls are synchronous, matching the browser storage this replaces. The
/// controller treats every failure as non-fatal.
pub trait OnboardingStore: Send + Sync {
    /// Loads the record for a user, `None` when nothing was stored.
    fn load(&self, user_id: &str) -> Result<Option<OnboardingRecord>>;

    /// Replaces the record for a user.
    fn save(&self, user_id: &str, record: &OnboardingRecord) -> Result<()>;

    /// Deletes every persisted value for a user.
    fn clear(&self, user_id: &str) -> Result<()>;
}
