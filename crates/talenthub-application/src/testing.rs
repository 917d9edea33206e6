//! Test doubles shared by the service tests.

use std::sync::Mutex;

use async_trait::async_trait;
use talenthub_core::profile::{ProfileSnapshot, ProfileSource};
use talenthub_core::{Result, TalentError};
use tokio::time::Instant;

/// Profile source that fails a fixed number of times before serving a
/// snapshot, recording when each fetch happened.
pub(crate) struct ScriptedSource {
    failures_left: Mutex<u32>,
    snapshot: Mutex<ProfileSnapshot>,
    calls: Mutex<Vec<Instant>>,
}

impl ScriptedSource {
    pub(crate) fn ok(snapshot: ProfileSnapshot) -> Self {
        Self::failing_then(0, snapshot)
    }

    pub(crate) fn failing_then(failures: u32, snapshot: ProfileSnapshot) -> Self {
        Self {
            failures_left: Mutex::new(failures),
            snapshot: Mutex::new(snapshot),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub(crate) fn call_times(&self) -> Vec<Instant> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProfileSource for ScriptedSource {
    async fn fetch_snapshot(&self, _user_id: &str) -> Result<ProfileSnapshot> {
        self.calls.lock().unwrap().push(Instant::now());
        let mut failures_left = self.failures_left.lock().unwrap();
        if *failures_left > 0 {
            *failures_left -= 1;
            return Err(TalentError::data_access("backend unavailable"));
        }
        Ok(self.snapshot.lock().unwrap().clone())
    }
}
