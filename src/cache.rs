use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Successful online translations keyed by suffix-stripped bone name, shared
/// by every caller in the process. Entries are never evicted.
#[derive(Debug, Default)]
pub struct TranslationCache {
    map: Mutex<HashMap<String, String>>,
}

impl TranslationCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.lock().insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, String>> {
        // a panicking writer cannot leave the map half-updated
        self.map.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
