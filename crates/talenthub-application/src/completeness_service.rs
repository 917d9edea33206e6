//! Live completeness for the signed-in user.
//!
//! Caches the last fetched [`ProfileSnapshot`] and the breakdown derived from
//! it. `refresh_completeness` recomputes from the cache; `reload` refetches
//! from the [`ProfileSource`] first.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use talenthub_core::Result;
use talenthub_core::completeness::{CompletenessBreakdown, calculate};
use talenthub_core::profile::{ProfileSnapshot, ProfileSource};
use tokio::sync::RwLock;

pub struct CompletenessService {
    user_id: String,
    source: Arc<dyn ProfileSource>,
    snapshot: RwLock<Option<ProfileSnapshot>>,
    breakdown: RwLock<CompletenessBreakdown>,
    loading: AtomicBool,
}

impl CompletenessService {
    pub fn new(user_id: impl Into<String>, source: Arc<dyn ProfileSource>) -> Self {
        Self {
            user_id: user_id.into(),
            source,
            snapshot: RwLock::new(None),
            breakdown: RwLock::new(calculate(None, None, false, false)),
            loading: AtomicBool::new(false),
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Current total score (0-100).
    pub async fn completeness(&self) -> u8 {
        self.breakdown.read().await.total
    }

    pub async fn breakdown(&self) -> CompletenessBreakdown {
        self.breakdown.read().await.clone()
    }

    pub async fn snapshot(&self) -> Option<ProfileSnapshot> {
        self.snapshot.read().await.clone()
    }

    /// True while a refetch is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    /// Recomputes the breakdown from the cached snapshot.
    pub async fn refresh_completeness(&self) -> CompletenessBreakdown {
        let breakdown = match self.snapshot.read().await.as_ref() {
            Some(snapshot) => snapshot.breakdown(),
            None => CompletenessBreakdown::profile_not_found(),
        };
        self.store_breakdown(breakdown).await
    }

    /// Refetches profile, talent profile and education count, then recomputes.
    ///
    /// On failure the cached snapshot and breakdown are left untouched.
    pub async fn reload(&self) -> Result<CompletenessBreakdown> {
        self.loading.store(true, Ordering::SeqCst);
        let fetched = self.source.fetch_snapshot(&self.user_id).await;
        self.loading.store(false, Ordering::SeqCst);

        let snapshot = fetched?;
        Ok(self.set_snapshot(snapshot).await)
    }

    /// Replaces the cached snapshot, e.g. after a local profile edit.
    pub async fn set_snapshot(&self, snapshot: ProfileSnapshot) -> CompletenessBreakdown {
        let breakdown = snapshot.breakdown();
        *self.snapshot.write().await = Some(snapshot);
        self.store_breakdown(breakdown).await
    }

    async fn store_breakdown(&self, breakdown: CompletenessBreakdown) -> CompletenessBreakdown {
        let mut current = self.breakdown.write().await;
        if current.total != breakdown.total {
            tracing::debug!(
                user_id = %self.user_id,
                "[Completeness] {} -> {}",
                current.total,
                breakdown.total
            );
        }
        *current = breakdown.clone();
        breakdown
    }
}
