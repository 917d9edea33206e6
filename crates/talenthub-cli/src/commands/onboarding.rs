use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use talenthub_application::{CompletenessService, OnboardingController, ProfileSyncCoordinator};
use talenthub_core::profile::Profile;
use talenthub_infrastructure::{JsonFileProfileSource, TomlOnboardingStore};

use super::Context;

fn controller(context: &Context, user: &str, profiles: &Path) -> Result<OnboardingController> {
    let store = Arc::new(TomlOnboardingStore::with_path(context.paths.onboarding_file()?));
    let source = Arc::new(JsonFileProfileSource::new(profiles.to_path_buf()));
    let completeness = Arc::new(CompletenessService::new(user, source));
    let sync = Arc::new(ProfileSyncCoordinator::new(
        completeness.clone(),
        context.config.sync.clone(),
    ));

    Ok(OnboardingController::new(
        user,
        store,
        sync,
        completeness,
        context.config.onboarding.clone(),
    ))
}

/// Loads the profile and runs the initialization transition.
async fn initialized(context: &Context, user: &str, profiles: &Path) -> Result<OnboardingController> {
    let mut controller = controller(context, user, profiles)?;
    let source = JsonFileProfileSource::new(profiles.to_path_buf());

    let snapshot = source.load_all().await?.remove(user).unwrap_or_default();
    let breakdown = snapshot.breakdown();
    let profile = snapshot.profile.unwrap_or_else(|| Profile::new(user));

    controller.initialize(&profile, &breakdown);
    Ok(controller)
}

pub async fn show(context: &Context, user: &str, profiles: &Path) -> Result<()> {
    let controller = initialized(context, user, profiles).await?;
    println!("{}", serde_json::to_string_pretty(controller.state())?);
    Ok(())
}

pub async fn complete(context: &Context, user: &str, profiles: &Path) -> Result<()> {
    let mut controller = initialized(context, user, profiles).await?;
    controller.handle_wizard_complete().await;
    println!("{}", serde_json::to_string_pretty(controller.state())?);
    Ok(())
}

pub fn reset(context: &Context, user: &str) -> Result<()> {
    // Reset never fetches, so the profile file is not consulted.
    let mut controller = controller(context, user, Path::new("profiles.json"))?;
    controller.reset_onboarding();
    println!("{}", serde_json::to_string_pretty(controller.state())?);
    Ok(())
}
