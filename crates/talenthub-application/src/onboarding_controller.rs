//! Onboarding state controller.
//!
//! Owns the [`OnboardingState`] for one user: decides the initial view once
//! completeness data is available, advances the wizard step as completeness
//! grows, and persists the position through an [`OnboardingStore`]. Storage
//! and sync failures are logged and never block a transition.

use std::sync::Arc;

use talenthub_core::completeness::CompletenessBreakdown;
use talenthub_core::config::OnboardingSettings;
use talenthub_core::onboarding::{
    NavigationPolicy, OnboardingRecord, OnboardingState, OnboardingStore, OnboardingView,
    next_incomplete_step, now_millis,
};
use talenthub_core::profile::Profile;

use crate::completeness_service::CompletenessService;
use crate::profile_sync::{ProfileSync, SyncOptions};
use crate::settle::wait_until;

pub struct OnboardingController {
    user_id: String,
    store: Arc<dyn OnboardingStore>,
    sync: Arc<dyn ProfileSync>,
    completeness: Arc<CompletenessService>,
    settings: OnboardingSettings,
    state: OnboardingState,
    completed_at: Option<i64>,
    /// Live total at the last manual step change, while automatic advance is held
    manual_hold: Option<u8>,
    last_total: u8,
}

impl OnboardingController {
    /// Creates the controller in its pre-initialization state.
    ///
    /// The user counts as first-time unless the store holds a completion
    /// marker. An unreadable store is treated as empty.
    pub fn new(
        user_id: impl Into<String>,
        store: Arc<dyn OnboardingStore>,
        sync: Arc<dyn ProfileSync>,
        completeness: Arc<CompletenessService>,
        settings: OnboardingSettings,
    ) -> Self {
        let user_id = user_id.into();
        let completed_at = load_record(store.as_ref(), &user_id).and_then(|record| record.completed);

        Self {
            state: OnboardingState::new(completed_at.is_none()),
            user_id,
            store,
            sync,
            completeness,
            settings,
            completed_at,
            manual_hold: None,
            last_total: 0,
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn state(&self) -> &OnboardingState {
        &self.state
    }

    /// Epoch milliseconds at which onboarding was last completed.
    pub fn completed_at(&self) -> Option<i64> {
        self.completed_at
    }

    /// Runs the one-time initialization transition.
    ///
    /// Routes to the wizard when the stored completeness marks a new user or
    /// the basics are incomplete, otherwise to the dashboard. A persisted
    /// position then overrides the computed one, and the step floor for the
    /// live breakdown is applied. Later calls are ignored.
    pub fn initialize(&mut self, profile: &Profile, breakdown: &CompletenessBreakdown) {
        if self.state.is_initialized {
            return;
        }

        let is_new_user = profile.stored_completeness() < self.settings.new_user_threshold;
        let has_completed_basics = breakdown.basic_info >= self.settings.basics_threshold;

        self.state.current_view = if is_new_user || !has_completed_basics {
            OnboardingView::Wizard
        } else {
            OnboardingView::Dashboard
        };
        self.state.show_welcome = is_new_user;

        if let Some(record) = load_record(self.store.as_ref(), &self.user_id) {
            if let Some(view) = record.view {
                self.state.current_view = view;
            }
            if let Some(step) = record.step {
                self.state.current_step = step;
            }
        }

        self.state.is_initialized = true;
        self.state.touch();
        tracing::info!(
            user_id = %self.user_id,
            view = %self.state.current_view,
            step = self.state.current_step,
            is_new_user,
            "[Onboarding] Initialized"
        );

        self.last_total = breakdown.total;
        self.advance(breakdown);
        self.persist();
    }

    /// Applies automatic step advance for a new breakdown.
    ///
    /// Never lowers `current_step`. Under [`NavigationPolicy::RespectManual`]
    /// a manual step change holds until the total rises past the value seen
    /// when it was made.
    pub fn on_completeness_changed(&mut self, breakdown: &CompletenessBreakdown) {
        self.last_total = breakdown.total;
        if !self.state.is_initialized {
            return;
        }

        if let Some(held_at) = self.manual_hold {
            if breakdown.total <= held_at {
                return;
            }
            self.manual_hold = None;
        }

        if self.advance(breakdown) {
            self.state.touch();
            self.persist();
        }
    }

    /// Pulls the current breakdown from the completeness service and applies it.
    pub async fn refresh(&mut self) {
        let breakdown = self.completeness.breakdown().await;
        self.on_completeness_changed(&breakdown);
    }

    fn advance(&mut self, breakdown: &CompletenessBreakdown) -> bool {
        let rules = self.settings.step_rules();
        let before = self.state.current_step;

        let completion = rules.step_completion(breakdown);
        if let Some(next) = next_incomplete_step(self.state.current_step, &completion) {
            self.state.current_step = next;
        }

        let floor = rules.target_step(breakdown);
        if self.state.current_step < floor {
            self.state.current_step = floor;
        }

        let changed = self.state.current_step != before;
        if changed {
            tracing::debug!(
                user_id = %self.user_id,
                from = before,
                step = self.state.current_step,
                total = breakdown.total,
                "[Onboarding] Step advanced"
            );
        }
        changed
    }

    pub fn set_current_view(&mut self, view: OnboardingView) {
        self.state.current_view = view;
        self.changed();
    }

    /// Moves the wizard to `step`, bypassing the forward-only rule.
    pub fn set_current_step(&mut self, step: u32) {
        self.state.current_step = step;
        if self.settings.navigation_policy == NavigationPolicy::RespectManual {
            self.manual_hold = Some(self.last_total);
        }
        self.changed();
    }

    pub fn set_is_first_time_user(&mut self, is_first_time_user: bool) {
        self.state.is_first_time_user = is_first_time_user;
        self.changed();
    }

    pub fn set_show_welcome(&mut self, show_welcome: bool) {
        self.state.show_welcome = show_welcome;
        self.changed();
    }

    fn changed(&mut self) {
        self.state.touch();
        if self.state.is_initialized {
            self.persist();
        }
    }

    /// Finishes the wizard and routes to the dashboard.
    ///
    /// Forces a profile sync, then waits (bounded) for the completeness total
    /// to move so the dashboard reflects the last save. Sync failures and
    /// timeouts are logged; the transition always happens.
    pub async fn handle_wizard_complete(&mut self) {
        let baseline = self.completeness.completeness().await;

        if let Err(e) = self.sync.sync_profile(SyncOptions::forced()).await {
            tracing::warn!(user_id = %self.user_id, "[Onboarding] Sync on completion failed: {}", e);
        }

        let sync = &self.sync;
        let completeness = &self.completeness;
        let user_id = self.user_id.as_str();
        let settled = wait_until(
            self.settings.settle_timeout(),
            self.settings.settle_poll_interval(),
            || async move {
                if completeness.completeness().await != baseline {
                    return true;
                }
                if let Err(e) = sync
                    .sync_profile(SyncOptions::forced().with_retries(0))
                    .await
                {
                    tracing::debug!(user_id = %user_id, "[Onboarding] Settle re-sync failed: {}", e);
                }
                completeness.completeness().await != baseline
            },
        )
        .await;
        if !settled {
            tracing::debug!(user_id = %self.user_id, "[Onboarding] Completeness did not change before settle timeout");
        }

        self.state.is_first_time_user = false;
        self.state.current_view = OnboardingView::Dashboard;
        self.state.show_welcome = false;
        self.state.touch();
        self.manual_hold = None;
        self.last_total = self.completeness.completeness().await;

        let completed_at = now_millis();
        self.completed_at = Some(completed_at);
        let record = OnboardingRecord {
            step: None,
            ..OnboardingRecord::from_state(&self.state, Some(completed_at))
        };
        self.save_record(&record);

        tracing::info!(user_id = %self.user_id, total = self.last_total, "[Onboarding] Wizard completed");
    }

    /// Returns the user to the first-time welcome flow and deletes every
    /// persisted value.
    pub fn reset_onboarding(&mut self) {
        self.state = OnboardingState::reset(self.state.is_initialized);
        self.completed_at = None;
        self.manual_hold = None;

        if let Err(e) = self.store.clear(&self.user_id) {
            tracing::warn!(user_id = %self.user_id, "[Onboarding] Failed to clear stored state: {}", e);
        }
        tracing::info!(user_id = %self.user_id, "[Onboarding] Reset");
    }

    fn persist(&self) {
        let record = OnboardingRecord::from_state(&self.state, self.completed_at);
        self.save_record(&record);
    }

    fn save_record(&self, record: &OnboardingRecord) {
        if let Err(e) = self.store.save(&self.user_id, record) {
            tracing::warn!(user_id = %self.user_id, "[Onboarding] Failed to persist state: {}", e);
        }
    }
}

fn load_record(store: &dyn OnboardingStore, user_id: &str) -> Option<OnboardingRecord> {
    match store.load(user_id) {
        Ok(record) => record,
        Err(e) => {
            tracing::warn!(user_id = %user_id, "[Onboarding] Failed to restore stored state: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile_sync::ProfileSyncCoordinator;
    use crate::testing::ScriptedSource;
    use std::time::Duration;
    use talenthub_core::config::SyncSettings;
    use talenthub_core::onboarding::OnboardingKeys;
    use talenthub_core::profile::ProfileSnapshot;
    use talenthub_core::{Result, TalentError};
    use talenthub_infrastructure::{InMemoryOnboardingStore, KeyValueOnboardingStore};

    struct FailingStore;

    impl OnboardingStore for FailingStore {
        fn load(&self, _user_id: &str) -> Result<Option<OnboardingRecord>> {
            Err(TalentError::storage("storage unavailable"))
        }

        fn save(&self, _user_id: &str, _record: &OnboardingRecord) -> Result<()> {
            Err(TalentError::storage("storage unavailable"))
        }

        fn clear(&self, _user_id: &str) -> Result<()> {
            Err(TalentError::storage("storage unavailable"))
        }
    }

    fn breakdown(basic: u8, professional: u8, skills: u8, total: u8) -> CompletenessBreakdown {
        CompletenessBreakdown {
            basic_info: basic,
            professional_info: professional,
            skills_and_bio: skills,
            total,
            ..CompletenessBreakdown::default()
        }
    }

    fn profile(stored_completeness: Option<u8>) -> Profile {
        Profile {
            completeness: stored_completeness,
            ..Profile::new("u1")
        }
    }

    fn snapshot_with_city() -> ProfileSnapshot {
        ProfileSnapshot {
            profile: Some(Profile {
                city: Some("Lima".to_string()),
                ..Profile::new("u1")
            }),
            ..ProfileSnapshot::default()
        }
    }

    struct Fixture {
        source: Arc<ScriptedSource>,
        completeness: Arc<CompletenessService>,
        sync: Arc<ProfileSyncCoordinator>,
    }

    impl Fixture {
        fn new(source: ScriptedSource) -> Self {
            let source = Arc::new(source);
            let completeness = Arc::new(CompletenessService::new("u1", source.clone()));
            let sync = Arc::new(ProfileSyncCoordinator::new(
                completeness.clone(),
                SyncSettings::default(),
            ));
            Self {
                source,
                completeness,
                sync,
            }
        }

        fn controller(
            &self,
            store: Arc<dyn OnboardingStore>,
            settings: OnboardingSettings,
        ) -> OnboardingController {
            OnboardingController::new(
                "u1",
                store,
                self.sync.clone(),
                self.completeness.clone(),
                settings,
            )
        }
    }

    #[test]
    fn test_starts_first_time_without_completion_marker() {
        let fixture = Fixture::new(ScriptedSource::ok(ProfileSnapshot::default()));
        let controller = fixture.controller(
            Arc::new(InMemoryOnboardingStore::new()),
            OnboardingSettings::default(),
        );

        let state = controller.state();
        assert!(state.is_first_time_user);
        assert_eq!(state.current_view, OnboardingView::Welcome);
        assert!(state.show_welcome);
        assert!(!state.is_initialized);
    }

    #[test]
    fn test_completion_marker_marks_returning_user() {
        let fixture = Fixture::new(ScriptedSource::ok(ProfileSnapshot::default()));
        let store = Arc::new(InMemoryOnboardingStore::new());
        store
            .save(
                "u1",
                &OnboardingRecord {
                    completed: Some(1_700_000_000_000),
                    ..OnboardingRecord::default()
                },
            )
            .unwrap();

        let controller = fixture.controller(store, OnboardingSettings::default());
        assert!(!controller.state().is_first_time_user);
        assert_eq!(controller.state().current_view, OnboardingView::Dashboard);
        assert_eq!(controller.completed_at(), Some(1_700_000_000_000));
    }

    #[test]
    fn test_low_stored_completeness_routes_to_wizard() {
        let fixture = Fixture::new(ScriptedSource::ok(ProfileSnapshot::default()));
        let mut controller = fixture.controller(
            Arc::new(InMemoryOnboardingStore::new()),
            OnboardingSettings::default(),
        );
        controller.set_is_first_time_user(false);

        controller.initialize(&profile(None), &breakdown(40, 0, 0, 10));

        let state = controller.state();
        assert!(state.is_initialized);
        assert_eq!(state.current_view, OnboardingView::Wizard);
        assert!(state.show_welcome);
    }

    #[test]
    fn test_established_user_with_basics_routes_to_dashboard() {
        let fixture = Fixture::new(ScriptedSource::ok(ProfileSnapshot::default()));
        let mut controller = fixture.controller(
            Arc::new(InMemoryOnboardingStore::new()),
            OnboardingSettings::default(),
        );

        controller.initialize(&profile(Some(60)), &breakdown(40, 50, 0, 30));
        assert_eq!(controller.state().current_view, OnboardingView::Dashboard);
        assert!(!controller.state().show_welcome);

        // Missing basics still force the wizard.
        let mut controller = fixture.controller(
            Arc::new(InMemoryOnboardingStore::new()),
            OnboardingSettings::default(),
        );
        controller.initialize(&profile(Some(60)), &breakdown(20, 100, 100, 67));
        assert_eq!(controller.state().current_view, OnboardingView::Wizard);
    }

    #[test]
    fn test_initialize_runs_once() {
        let fixture = Fixture::new(ScriptedSource::ok(ProfileSnapshot::default()));
        let mut controller = fixture.controller(
            Arc::new(InMemoryOnboardingStore::new()),
            OnboardingSettings::default(),
        );

        controller.initialize(&profile(Some(60)), &breakdown(40, 0, 0, 10));
        controller.set_current_view(OnboardingView::Settings);
        controller.initialize(&profile(None), &breakdown(0, 0, 0, 0));

        assert_eq!(controller.state().current_view, OnboardingView::Settings);
    }

    #[test]
    fn test_stored_position_overrides_computed_view() {
        let fixture = Fixture::new(ScriptedSource::ok(ProfileSnapshot::default()));
        let store = Arc::new(InMemoryOnboardingStore::new());
        store
            .save(
                "u1",
                &OnboardingRecord {
                    step: Some(2),
                    view: Some(OnboardingView::Settings),
                    ..OnboardingRecord::default()
                },
            )
            .unwrap();

        let mut controller = fixture.controller(store.clone(), OnboardingSettings::default());
        controller.initialize(&profile(None), &breakdown(40, 0, 0, 10));

        assert_eq!(controller.state().current_view, OnboardingView::Settings);
        assert_eq!(controller.state().current_step, 2);

        let saved = store.load("u1").unwrap().unwrap();
        assert_eq!(saved.view, Some(OnboardingView::Settings));
        assert_eq!(saved.step, Some(2));
    }

    #[test]
    fn test_step_never_decreases_automatically() {
        let fixture = Fixture::new(ScriptedSource::ok(ProfileSnapshot::default()));
        let mut controller = fixture.controller(
            Arc::new(InMemoryOnboardingStore::new()),
            OnboardingSettings::default(),
        );

        controller.initialize(&profile(None), &breakdown(50, 0, 0, 13));
        assert_eq!(controller.state().current_step, 1);

        controller.on_completeness_changed(&breakdown(100, 0, 0, 25));
        assert_eq!(controller.state().current_step, 2);

        controller.on_completeness_changed(&breakdown(100, 100, 0, 58));
        assert_eq!(controller.state().current_step, 3);

        // Completeness dropping does not move the wizard back.
        controller.on_completeness_changed(&breakdown(50, 0, 0, 13));
        assert_eq!(controller.state().current_step, 3);
    }

    #[test]
    fn test_forward_only_overrides_manual_back_navigation() {
        let fixture = Fixture::new(ScriptedSource::ok(ProfileSnapshot::default()));
        let mut controller = fixture.controller(
            Arc::new(InMemoryOnboardingStore::new()),
            OnboardingSettings::default(),
        );
        controller.initialize(&profile(None), &breakdown(50, 0, 0, 13));

        controller.set_current_step(0);
        assert_eq!(controller.state().current_step, 0);

        controller.on_completeness_changed(&breakdown(50, 0, 0, 13));
        assert_eq!(controller.state().current_step, 1);
    }

    #[test]
    fn test_respect_manual_holds_until_total_rises() {
        let fixture = Fixture::new(ScriptedSource::ok(ProfileSnapshot::default()));
        let settings = OnboardingSettings {
            navigation_policy: NavigationPolicy::RespectManual,
            ..OnboardingSettings::default()
        };
        let mut controller = fixture.controller(Arc::new(InMemoryOnboardingStore::new()), settings);
        controller.initialize(&profile(None), &breakdown(50, 0, 0, 13));

        controller.set_current_step(0);
        controller.on_completeness_changed(&breakdown(50, 0, 0, 13));
        assert_eq!(controller.state().current_step, 0);

        controller.on_completeness_changed(&breakdown(75, 0, 0, 19));
        assert_eq!(controller.state().current_step, 1);
    }

    #[test]
    fn test_lower_basic_threshold_enables_professional_floor() {
        let fixture = Fixture::new(ScriptedSource::ok(ProfileSnapshot::default()));
        let settings = OnboardingSettings {
            basic_complete_threshold: 75,
            ..OnboardingSettings::default()
        };
        let mut controller = fixture.controller(Arc::new(InMemoryOnboardingStore::new()), settings);

        controller.initialize(&profile(None), &breakdown(75, 0, 0, 19));
        assert_eq!(controller.state().current_step, 2);
    }

    #[test]
    fn test_changes_before_initialization_are_not_persisted() {
        let fixture = Fixture::new(ScriptedSource::ok(ProfileSnapshot::default()));
        let store = Arc::new(InMemoryOnboardingStore::new());
        let mut controller = fixture.controller(store.clone(), OnboardingSettings::default());

        controller.set_current_view(OnboardingView::Wizard);
        assert_eq!(store.load("u1").unwrap(), None);

        controller.initialize(&profile(None), &breakdown(40, 0, 0, 10));
        controller.set_show_welcome(false);
        assert!(store.load("u1").unwrap().is_some());
    }

    #[test]
    fn test_manual_setters_refresh_last_activity() {
        let fixture = Fixture::new(ScriptedSource::ok(ProfileSnapshot::default()));
        let store = Arc::new(InMemoryOnboardingStore::new());
        let mut controller = fixture.controller(store.clone(), OnboardingSettings::default());
        controller.initialize(&profile(None), &breakdown(40, 0, 0, 10));

        let setters: [fn(&mut OnboardingController); 4] = [
            |c| c.set_current_view(OnboardingView::Settings),
            |c| c.set_current_step(2),
            |c| c.set_is_first_time_user(false),
            |c| c.set_show_welcome(false),
        ];
        for setter in setters {
            controller.state.last_activity = 0;
            setter(&mut controller);

            let last_activity = controller.state().last_activity;
            assert!(last_activity > 0);
            let saved = store.load("u1").unwrap().unwrap();
            assert_eq!(saved.last_activity, Some(last_activity));
        }
    }

    #[test]
    fn test_corrupt_stored_step_keeps_completion_marker() {
        let fixture = Fixture::new(ScriptedSource::ok(ProfileSnapshot::default()));
        let store = Arc::new(KeyValueOnboardingStore::new());
        store
            .save(
                "u1",
                &OnboardingRecord {
                    view: Some(OnboardingView::Settings),
                    completed: Some(1_700_000_000_000),
                    ..OnboardingRecord::default()
                },
            )
            .unwrap();
        store.set_item(&OnboardingKeys::for_user("u1").step, "two");

        let mut controller = fixture.controller(store, OnboardingSettings::default());
        assert!(!controller.state().is_first_time_user);

        controller.initialize(&profile(Some(60)), &breakdown(40, 0, 0, 10));
        assert_eq!(controller.state().current_view, OnboardingView::Settings);
        assert_eq!(controller.state().current_step, 1);
    }

    #[test]
    fn test_reset_clears_every_persisted_key() {
        let fixture = Fixture::new(ScriptedSource::ok(ProfileSnapshot::default()));
        let store = Arc::new(KeyValueOnboardingStore::new());
        let mut controller = fixture.controller(store.clone(), OnboardingSettings::default());
        controller.initialize(&profile(Some(60)), &breakdown(100, 50, 0, 42));
        controller.set_current_step(3);

        let keys = OnboardingKeys::for_user("u1");
        assert!(store.get_item(&keys.step).is_some());

        controller.reset_onboarding();

        for key in keys.all() {
            assert_eq!(store.get_item(key), None, "{key} should be removed");
        }
        let state = controller.state();
        assert_eq!(state.current_view, OnboardingView::Welcome);
        assert_eq!(state.current_step, 0);
        assert!(state.is_first_time_user);
        assert!(state.show_welcome);
    }

    #[tokio::test(start_paused = true)]
    async fn test_wizard_complete_waits_for_new_total() {
        let fixture = Fixture::new(ScriptedSource::ok(snapshot_with_city()));
        let store = Arc::new(InMemoryOnboardingStore::new());
        let mut controller = fixture.controller(store.clone(), OnboardingSettings::default());
        controller.initialize(&profile(None), &breakdown(0, 0, 0, 0));

        let start = tokio::time::Instant::now();
        controller.handle_wizard_complete().await;

        assert!(start.elapsed() < Duration::from_millis(250));
        assert_eq!(fixture.source.calls(), 1);
        let state = controller.state();
        assert_eq!(state.current_view, OnboardingView::Dashboard);
        assert!(!state.is_first_time_user);
        assert!(!state.show_welcome);

        let saved = store.load("u1").unwrap().unwrap();
        assert_eq!(saved.step, None);
        assert_eq!(saved.view, Some(OnboardingView::Dashboard));
        assert!(saved.completed.is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_wizard_complete_survives_sync_failure() {
        let fixture = Fixture::new(ScriptedSource::failing_then(u32::MAX, snapshot_with_city()));
        let store = Arc::new(KeyValueOnboardingStore::new());
        let mut controller = fixture.controller(store.clone(), OnboardingSettings::default());
        controller.initialize(&profile(None), &breakdown(0, 0, 0, 0));

        controller.handle_wizard_complete().await;

        assert_eq!(controller.state().current_view, OnboardingView::Dashboard);
        assert!(!controller.state().is_first_time_user);
        let keys = OnboardingKeys::for_user("u1");
        assert_eq!(store.get_item(&keys.step), None);
        assert!(store.get_item(&keys.completed).is_some());
    }

    #[tokio::test]
    async fn test_refresh_applies_live_breakdown() {
        let fixture = Fixture::new(ScriptedSource::ok(ProfileSnapshot::default()));
        let mut controller = fixture.controller(
            Arc::new(InMemoryOnboardingStore::new()),
            OnboardingSettings::default(),
        );
        controller.initialize(&profile(None), &breakdown(0, 0, 0, 0));
        assert_eq!(controller.state().current_step, 1);

        let full_basics = ProfileSnapshot {
            profile: Some(Profile {
                full_name: Some("Ana Torres".to_string()),
                email: Some("ana@example.com".to_string()),
                avatar_url: Some("https://cdn.example.com/ana.png".to_string()),
                country: Some("Perú".to_string()),
                city: Some("Lima".to_string()),
                ..Profile::new("u1")
            }),
            ..ProfileSnapshot::default()
        };
        fixture.completeness.set_snapshot(full_basics).await;
        controller.refresh().await;

        // Complete basics put the total at 40, past the early-step threshold.
        assert_eq!(controller.state().current_step, 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failing_store_never_blocks_transitions() {
        let fixture = Fixture::new(ScriptedSource::ok(snapshot_with_city()));
        let mut controller = fixture.controller(Arc::new(FailingStore), OnboardingSettings::default());
        assert!(controller.state().is_first_time_user);

        controller.initialize(&profile(None), &breakdown(40, 0, 0, 10));
        assert_eq!(controller.state().current_view, OnboardingView::Wizard);

        controller.set_current_step(2);
        controller.handle_wizard_complete().await;
        assert_eq!(controller.state().current_view, OnboardingView::Dashboard);

        controller.reset_onboarding();
        assert_eq!(controller.state().current_view, OnboardingView::Welcome);
    }
}
