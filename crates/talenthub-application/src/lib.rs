//! Application layer for TalentHub onboarding.
//!
//! Services that combine the domain rules in `talenthub-core` with the
//! collaborators injected at startup: live completeness, profile sync
//! coordination and the onboarding state controller.

pub mod completeness_service;
pub mod onboarding_controller;
pub mod profile_sync;
pub mod settle;

#[cfg(test)]
mod testing;

pub use completeness_service::CompletenessService;
pub use onboarding_controller::OnboardingController;
pub use profile_sync::{ProfileSync, ProfileSyncCoordinator, SyncOptions, SyncStatus};
pub use settle::wait_until;
