//! Onboarding domain module.
//!
//! - `model`: `OnboardingState`, `OnboardingView`, the persisted `OnboardingRecord`
//! - `steps`: wizard steps, automatic advance rules and navigation policy
//! - `store`: `OnboardingStore` persistence trait

mod model;
mod steps;
mod store;

pub use model::{OnboardingKeys, OnboardingRecord, OnboardingState, OnboardingView, now_millis};
pub use steps::{NavigationPolicy, StepRules, WizardStep, next_incomplete_step};
pub use store::OnboardingStore;
