//! Profile sync coordination.
//!
//! Wraps [`CompletenessService`] with bounded retries, a trailing-edge
//! debounce for bursty refresh requests, and a staleness classification
//! derived from the time of the last successful sync.
//!
//! In-flight syncs are not cancellable: a retry loop whose caller went away
//! keeps running and its result is dropped. Only the pending debounce timer
//! can be cancelled.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use strum::{AsRefStr, Display};
use talenthub_core::Result;
use talenthub_core::config::SyncSettings;
use tokio::task::JoinHandle;
use tokio::time::Instant;

use crate::completeness_service::CompletenessService;

/// Options for a single `sync_profile` call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncOptions {
    /// Refetch from the profile source instead of recomputing from cache
    pub force_refresh: bool,
    /// Retry budget; `None` uses the configured default
    pub retries: Option<u32>,
}

impl SyncOptions {
    pub fn forced() -> Self {
        Self {
            force_refresh: true,
            retries: None,
        }
    }

    pub fn with_retries(mut self, retries: u32) -> Self {
        self.retries = Some(retries);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, AsRefStr)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum SyncStatus {
    Syncing,
    NotSynced,
    Fresh,
    Recent,
    Stale,
}

/// Something that can bring the profile data up to date.
#[async_trait]
pub trait ProfileSync: Send + Sync {
    async fn sync_profile(&self, options: SyncOptions) -> Result<()>;
}

#[derive(Debug, Default)]
struct SyncState {
    /// Number of `sync_profile` calls currently running
    in_flight: usize,
    last_sync: Option<Instant>,
    /// When the debounced refresh last executed
    last_debounced_run: Option<Instant>,
}

struct Inner {
    completeness: Arc<CompletenessService>,
    settings: SyncSettings,
    state: Mutex<SyncState>,
    pending: Mutex<Option<JoinHandle<()>>>,
}

/// Coordinates refreshes of the profile data behind [`CompletenessService`].
///
/// Cheap to clone; clones share state. `debounced_refresh` spawns onto the
/// current tokio runtime.
#[derive(Clone)]
pub struct ProfileSyncCoordinator {
    inner: Arc<Inner>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    // State stays consistent across a panicking holder; keep going.
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl ProfileSyncCoordinator {
    pub fn new(completeness: Arc<CompletenessService>, settings: SyncSettings) -> Self {
        Self {
            inner: Arc::new(Inner {
                completeness,
                settings,
                state: Mutex::new(SyncState::default()),
                pending: Mutex::new(None),
            }),
        }
    }

    pub fn completeness(&self) -> &Arc<CompletenessService> {
        &self.inner.completeness
    }

    pub fn is_syncing(&self) -> bool {
        lock(&self.inner.state).in_flight > 0
    }

    pub fn last_sync_time(&self) -> Option<Instant> {
        lock(&self.inner.state).last_sync
    }

    /// Runs one sync, retrying failed attempts after a fixed delay.
    ///
    /// Every error counts as retryable. Once the budget is spent the last
    /// error is returned.
    pub async fn sync_profile(&self, options: SyncOptions) -> Result<()> {
        let settings = &self.inner.settings;
        let mut retries_left = options.retries.unwrap_or(settings.default_retries);
        let mut attempt = 1u32;

        lock(&self.inner.state).in_flight += 1;
        let result = loop {
            match self.sync_once(options.force_refresh).await {
                Ok(()) => break Ok(()),
                Err(e) if retries_left > 0 => {
                    tracing::warn!(
                        user_id = %self.inner.completeness.user_id(),
                        attempt,
                        retries_left,
                        "[ProfileSync] Sync failed, retrying: {}",
                        e
                    );
                    tokio::time::sleep(settings.retry_delay()).await;
                    retries_left -= 1;
                    attempt += 1;
                }
                Err(e) => break Err(e),
            }
        };

        let mut state = lock(&self.inner.state);
        state.in_flight = state.in_flight.saturating_sub(1);
        match &result {
            Ok(()) => {
                state.last_sync = Some(Instant::now());
                tracing::debug!(
                    user_id = %self.inner.completeness.user_id(),
                    attempt,
                    force = options.force_refresh,
                    "[ProfileSync] Sync complete"
                );
            }
            Err(e) => {
                tracing::error!(
                    user_id = %self.inner.completeness.user_id(),
                    attempt,
                    "[ProfileSync] Sync failed after retries: {}",
                    e
                );
            }
        }
        result
    }

    async fn sync_once(&self, force_refresh: bool) -> Result<()> {
        if force_refresh {
            self.inner.completeness.reload().await?;
        } else {
            self.inner.completeness.refresh_completeness().await;
        }
        Ok(())
    }

    /// Schedules a forced sync `debounce_delay` after the last call of a burst.
    ///
    /// Each call cancels the pending timer and arms a new one. Calls arriving
    /// within `min_refresh_interval` of the last executed refresh are dropped.
    pub fn debounced_refresh(&self) {
        let settings = &self.inner.settings;
        let now = Instant::now();

        if let Some(last_run) = lock(&self.inner.state).last_debounced_run
            && now.duration_since(last_run) < settings.min_refresh_interval()
        {
            tracing::debug!("[ProfileSync] Refresh collapsed into the previous run");
            return;
        }

        let delay = settings.debounce_delay();
        let coordinator = self.clone();
        let mut pending = lock(&self.inner.pending);
        if let Some(handle) = pending.take() {
            handle.abort();
        }
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            lock(&coordinator.inner.state).last_debounced_run = Some(Instant::now());
            // Detached so a later abort only ever hits the timer.
            tokio::spawn(async move {
                if let Err(e) = coordinator.sync_profile(SyncOptions::forced()).await {
                    tracing::warn!("[ProfileSync] Debounced refresh failed: {}", e);
                }
            });
        }));
    }

    /// Cancels a debounced refresh that has not fired yet.
    pub fn cancel_pending_refresh(&self) {
        if let Some(handle) = lock(&self.inner.pending).take() {
            handle.abort();
        }
    }

    pub fn sync_status(&self) -> SyncStatus {
        let state = lock(&self.inner.state);
        if state.in_flight > 0 {
            return SyncStatus::Syncing;
        }
        let Some(last_sync) = state.last_sync else {
            return SyncStatus::NotSynced;
        };
        classify_age(last_sync.elapsed(), &self.inner.settings)
    }
}

fn classify_age(age: Duration, settings: &SyncSettings) -> SyncStatus {
    if age < settings.fresh_threshold() {
        SyncStatus::Fresh
    } else if age < settings.recent_threshold() {
        SyncStatus::Recent
    } else {
        SyncStatus::Stale
    }
}

#[async_trait]
impl ProfileSync for ProfileSyncCoordinator {
    async fn sync_profile(&self, options: SyncOptions) -> Result<()> {
        ProfileSyncCoordinator::sync_profile(self, options).await
    }
}
