//! String key-value persistence of the progression counters.
//!
//! Values are decimal strings under fixed keys, the same layout the
//! browser cookie store used, so any string map can back a session.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use super::PortError;

pub const LEVEL_KEY: &str = "level";
pub const CURRENT_EXPERIENCE_KEY: &str = "currentExperience";
pub const CHALLENGES_COMPLETED_KEY: &str = "challengesCompleted";

/// Key-value store the progression writes to after every change.
pub trait ProgressStore {
    fn get(&self, key: &str) -> Result<Option<String>, PortError>;
    fn set(&self, key: &str, value: &str) -> Result<(), PortError>;
}

/// The persisted part of a progression: everything needed to rebuild a
/// session except the active challenge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub level: u32,
    pub current_experience: u32,
    pub challenges_completed: u32,
}

impl Default for Progress {
    fn default() -> Self {
        Self {
            level: 1,
            current_experience: 0,
            challenges_completed: 0,
        }
    }
}

impl Progress {
    pub fn new(level: u32, current_experience: u32, challenges_completed: u32) -> Self {
        Self {
            level,
            current_experience,
            challenges_completed,
        }
    }

    /// Rehydrate from a store.
    ///
    /// Missing keys, unreadable keys and values that are not a non-negative
    /// integer fall back to the default for that field.
    pub fn load(store: &dyn ProgressStore) -> Self {
        let defaults = Self::default();
        Self {
            level: read_u32(store, LEVEL_KEY).unwrap_or(defaults.level),
            current_experience: read_u32(store, CURRENT_EXPERIENCE_KEY)
                .unwrap_or(defaults.current_experience),
            challenges_completed: read_u32(store, CHALLENGES_COMPLETED_KEY)
                .unwrap_or(defaults.challenges_completed),
        }
    }

    /// Write all three counters.
    ///
    /// Stops at the first failing key.
    pub fn save(&self, store: &dyn ProgressStore) -> Result<(), PortError> {
        store.set(LEVEL_KEY, &self.level.to_string())?;
        store.set(CURRENT_EXPERIENCE_KEY, &self.current_experience.to_string())?;
        store.set(CHALLENGES_COMPLETED_KEY, &self.challenges_completed.to_string())?;
        Ok(())
    }
}

fn read_u32(store: &dyn ProgressStore, key: &str) -> Option<u32> {
    match store.get(key) {
        Ok(Some(raw)) => match raw.trim().parse::<u32>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(key, value = %raw, "ignoring unparsable stored value");
                None
            }
        },
        Ok(None) => None,
        Err(e) => {
            tracing::warn!(key, error = %e, "failed to read stored value");
            None
        }
    }
}

/// In-memory store. Clones share the same map, so a test or an embedding
/// UI can keep a handle and observe what the progression wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.values.borrow().clone()
    }
}

impl ProgressStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, PortError> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PortError> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
