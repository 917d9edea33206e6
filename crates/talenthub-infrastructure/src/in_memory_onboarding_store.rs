//! In-memory onboarding stores.
//!
//! `InMemoryOnboardingStore` keeps typed records; `KeyValueOnboardingStore`
//! keeps the flat string keys of browser local storage
//! (`onboarding.step.<user>` and friends).

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use talenthub_core::onboarding::{OnboardingKeys, OnboardingRecord, OnboardingStore, OnboardingView};
use talenthub_core::{Result, TalentError};

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>> {
    mutex
        .lock()
        .map_err(|e| TalentError::storage(format!("Store lock poisoned: {}", e)))
}

#[derive(Debug, Default)]
pub struct InMemoryOnboardingStore {
    records: Mutex<HashMap<String, OnboardingRecord>>,
}

impl InMemoryOnboardingStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OnboardingStore for InMemoryOnboardingStore {
    fn load(&self, user_id: &str) -> Result<Option<OnboardingRecord>> {
        Ok(lock(&self.records)?.get(user_id).cloned())
    }

    fn save(&self, user_id: &str, record: &OnboardingRecord) -> Result<()> {
        lock(&self.records)?.insert(user_id.to_string(), record.clone());
        Ok(())
    }

    fn clear(&self, user_id: &str) -> Result<()> {
        lock(&self.records)?.remove(user_id);
        Ok(())
    }
}

/// Flat string key-value store, one entry per record field.
#[derive(Debug, Default)]
pub struct KeyValueOnboardingStore {
    entries: Mutex<HashMap<String, String>>,
}

impl KeyValueOnboardingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw value of one key, as local storage would return it.
    pub fn get_item(&self, key: &str) -> Option<String> {
        lock(&self.entries).ok()?.get(key).cloned()
    }

    /// Writes one raw value, bypassing record encoding.
    pub fn set_item(&self, key: &str, value: &str) {
        if let Ok(mut entries) = lock(&self.entries) {
            entries.insert(key.to_string(), value.to_string());
        }
    }

    pub fn len(&self) -> usize {
        lock(&self.entries).map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Parses one stored number; garbage is logged and read back as absent.
fn parse_number<T: std::str::FromStr>(key: &str, raw: Option<&String>) -> Option<T> {
    let raw = raw?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(key = %key, value = %raw, "[Onboarding] Ignoring invalid stored value");
            None
        }
    }
}

impl OnboardingStore for KeyValueOnboardingStore {
    fn load(&self, user_id: &str) -> Result<Option<OnboardingRecord>> {
        let keys = OnboardingKeys::for_user(user_id);
        let entries = lock(&self.entries)?;

        let record = OnboardingRecord {
            step: parse_number(&keys.step, entries.get(&keys.step)),
            // Unknown view strings are dropped rather than failing the restore.
            view: entries
                .get(&keys.view)
                .and_then(|raw| raw.parse::<OnboardingView>().ok()),
            last_activity: parse_number(&keys.last_activity, entries.get(&keys.last_activity)),
            completed: parse_number(&keys.completed, entries.get(&keys.completed)),
        };

        Ok((!record.is_empty()).then_some(record))
    }

    fn save(&self, user_id: &str, record: &OnboardingRecord) -> Result<()> {
        let keys = OnboardingKeys::for_user(user_id);
        let mut entries = lock(&self.entries)?;

        let fields = [
            (&keys.step, record.step.map(|v| v.to_string())),
            (&keys.view, record.view.map(|v| v.to_string())),
            (&keys.last_activity, record.last_activity.map(|v| v.to_string())),
            (&keys.completed, record.completed.map(|v| v.to_string())),
        ];
        for (key, value) in fields {
            match value {
                Some(value) => {
                    entries.insert(key.clone(), value);
                }
                None => {
                    entries.remove(key);
                }
            }
        }
        Ok(())
    }

    fn clear(&self, user_id: &str) -> Result<()> {
        let keys = OnboardingKeys::for_user(user_id);
        let mut entries = lock(&self.entries)?;
        for key in keys.all() {
            entries.remove(key);
        }
        Ok(())
    }
}
