//! Durable slot for adventure progress.
//!
//! The record is stored as one JSON document under [`PROGRESS_KEY`]. Sets become arrays
//! here and nowhere else; the rest of the app only sees `ProgressRecord`.

use std::collections::BTreeMap;
use std::sync::Arc;

use quest_core::model::{AchievementId, ActivityId, ProgressRecord, ZoneId};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::repository::{KeyValueStore, StorageError};

/// The only key the progress store reads or writes.
pub const PROGRESS_KEY: &str = "adventureProgress";

/// Stored shape of a progress record.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredProgress {
    #[serde(default)]
    explored_zones: Vec<String>,
    #[serde(default)]
    completed_activities: Vec<String>,
    #[serde(default, rename = "userXP")]
    user_xp: BTreeMap<String, u32>,
    #[serde(default)]
    achievements: Vec<String>,
}

/// Serialize a record into its stored JSON form.
///
/// # Errors
///
/// Returns `StorageError::Serialization` if encoding fails.
pub fn encode_progress(record: &ProgressRecord) -> Result<String, StorageError> {
    let stored = StoredProgress {
        explored_zones: record
            .explored_zones()
            .iter()
            .map(|z| z.as_str().to_owned())
            .collect(),
        completed_activities: record
            .completed_activities()
            .iter()
            .map(|a| a.as_str().to_owned())
            .collect(),
        user_xp: record
            .xp_by_zone()
            .iter()
            .map(|(z, xp)| (z.as_str().to_owned(), *xp))
            .collect(),
        achievements: record
            .achievements()
            .iter()
            .map(|a| a.as_str().to_owned())
            .collect(),
    };
    serde_json::to_string(&stored).map_err(|e| StorageError::Serialization(e.to_string()))
}

/// Parse the stored JSON form. Missing fields default to empty.
///
/// # Errors
///
/// Returns `StorageError::Serialization` if the text is not a valid progress document.
pub fn decode_progress(raw: &str) -> Result<ProgressRecord, StorageError> {
    let stored: StoredProgress =
        serde_json::from_str(raw).map_err(|e| StorageError::Serialization(e.to_string()))?;

    Ok(ProgressRecord::from_persisted(
        stored.explored_zones.into_iter().map(ZoneId::new).collect(),
        stored
            .completed_activities
            .into_iter()
            .map(ActivityId::new)
            .collect(),
        stored
            .user_xp
            .into_iter()
            .map(|(z, xp)| (ZoneId::new(z), xp))
            .collect(),
        stored
            .achievements
            .into_iter()
            .map(AchievementId::new)
            .collect(),
    ))
}

/// Owner of the progress slot.
///
/// `load`, `save` and `clear` never fail: storage problems are logged and the caller keeps
/// working with its in-memory record. The `try_*` variants expose the underlying errors.
#[derive(Clone)]
pub struct ProgressStore {
    slots: Arc<dyn KeyValueStore>,
}

impl ProgressStore {
    #[must_use]
    pub fn new(slots: Arc<dyn KeyValueStore>) -> Self {
        Self { slots }
    }

    /// Read the stored record, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the slot cannot be read or does not parse.
    pub async fn try_load(&self) -> Result<Option<ProgressRecord>, StorageError> {
        match self.slots.read_slot(PROGRESS_KEY).await? {
            Some(raw) => decode_progress(&raw).map(Some),
            None => Ok(None),
        }
    }

    /// Stored record, or an empty one if nothing usable is stored.
    pub async fn load(&self) -> ProgressRecord {
        match self.try_load().await {
            Ok(Some(record)) => record,
            Ok(None) => {
                debug!(key = PROGRESS_KEY, "no stored progress; starting fresh");
                ProgressRecord::default()
            }
            Err(err) => {
                warn!(key = PROGRESS_KEY, error = %err, "stored progress unreadable; starting fresh");
                ProgressRecord::default()
            }
        }
    }

    /// Write the whole record in one slot write.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if encoding or the write fails.
    pub async fn try_save(&self, record: &ProgressRecord) -> Result<(), StorageError> {
        let raw = encode_progress(record)?;
        self.slots.write_slot(PROGRESS_KEY, &raw).await
    }

    /// Persist the record; failures are logged and otherwise ignored.
    pub async fn save(&self, record: &ProgressRecord) {
        if let Err(err) = self.try_save(record).await {
            warn!(key = PROGRESS_KEY, error = %err, "failed to persist progress");
        }
    }

    /// Remove the stored record.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the slot cannot be cleared.
    pub async fn try_clear(&self) -> Result<(), StorageError> {
        self.slots.clear_slot(PROGRESS_KEY).await
    }

    /// Remove the stored record; failures are logged and otherwise ignored.
    pub async fn clear(&self) {
        if let Err(err) = self.try_clear().await {
            warn!(key = PROGRESS_KEY, error = %err, "failed to clear stored progress");
        }
    }
}
