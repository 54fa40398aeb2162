//! Keyed in-memory stores for mood history and user profiles.
//!
//! Both stores are plain values constructed by the caller and passed
//! explicitly; nothing here is process-global. History is append-only: a
//! record, once appended, is never mutated. Records are handed back with no
//! ordering guarantee; ordering is the aggregator's job.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use crate::history::MoodRecord;
use crate::recommend::PreferenceSet;

/// Error type for store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Profile already exists: {0}")]
    ProfileExists(String),

    #[error("Profile not found: {0}")]
    ProfileNotFound(String),
}

/// A persisted record with its assigned id and owner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredMoodRecord {
    pub id: String,
    pub user_id: String,
    #[serde(flatten)]
    pub record: MoodRecord,
}

/// Append-only keyed history storage
pub trait HistoryStore {
    /// Append a record for a user; returns the assigned record id
    fn append(&mut self, user_id: &str, record: MoodRecord) -> String;

    /// All records for a user, in no guaranteed order
    fn records_for(&self, user_id: &str) -> Vec<MoodRecord>;

    /// Number of records stored for a user
    fn count(&self, user_id: &str) -> usize;
}

/// In-memory implementation backed by a keyed table
#[derive(Debug, Default)]
pub struct MemoryHistoryStore {
    records: HashMap<String, Vec<StoredMoodRecord>>,
}

impl MemoryHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HistoryStore for MemoryHistoryStore {
    fn append(&mut self, user_id: &str, record: MoodRecord) -> String {
        let id = Uuid::new_v4().to_string();
        debug!(user_id, record_id = %id, emotion = %record.emotion, "appending mood record");
        self.records
            .entry(user_id.to_string())
            .or_default()
            .push(StoredMoodRecord {
                id: id.clone(),
                user_id: user_id.to_string(),
                record,
            });
        id
    }

    fn records_for(&self, user_id: &str) -> Vec<MoodRecord> {
        self.records
            .get(user_id)
            .map(|stored| stored.iter().map(|s| s.record.clone()).collect())
            .unwrap_or_default()
    }

    fn count(&self, user_id: &str) -> usize {
        self.records.get(user_id).map(Vec::len).unwrap_or(0)
    }
}

/// A user profile owning the standing preference selections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: String,
    pub display_name: String,
    #[serde(default)]
    pub preferences: PreferenceSet,
}

impl UserProfile {
    pub fn new(user_id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            display_name: display_name.into(),
            preferences: PreferenceSet::default(),
        }
    }

    /// Builder method to set the standing preferences
    pub fn with_preferences(mut self, preferences: PreferenceSet) -> Self {
        self.preferences = preferences;
        self
    }
}

/// Keyed profile table, owned by whatever scope constructs it
#[derive(Debug, Default)]
pub struct ProfileStore {
    profiles: HashMap<String, UserProfile>,
}

impl ProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a profile; the user id must be unused
    pub fn create(&mut self, profile: UserProfile) -> Result<(), StoreError> {
        if self.profiles.contains_key(&profile.user_id) {
            return Err(StoreError::ProfileExists(profile.user_id.clone()));
        }
        debug!(user_id = %profile.user_id, "creating profile");
        self.profiles.insert(profile.user_id.clone(), profile);
        Ok(())
    }

    pub fn get(&self, user_id: &str) -> Result<&UserProfile, StoreError> {
        self.profiles
            .get(user_id)
            .ok_or_else(|| StoreError::ProfileNotFound(user_id.to_string()))
    }

    /// Replace a user's standing preferences
    pub fn set_preferences(
        &mut self,
        user_id: &str,
        preferences: PreferenceSet,
    ) -> Result<(), StoreError> {
        let profile = self
            .profiles
            .get_mut(user_id)
            .ok_or_else(|| StoreError::ProfileNotFound(user_id.to_string()))?;
        profile.preferences = preferences;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
