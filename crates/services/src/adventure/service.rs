use std::sync::Arc;

use quest_core::model::{Achievement, ActivityId, Catalog, ProgressRecord, ZoneId};
use storage::ProgressStore;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use super::rules;
use super::view::ZoneOverview;
use crate::error::AdventureError;

/// Mediates adventure actions between the catalog, the rules and the progress store.
///
/// The session record sits behind an async mutex that stays held until the write to the
/// store finishes, so each action completes its read-modify-write before the next starts.
pub struct AdventureService {
    catalog: Arc<Catalog>,
    store: ProgressStore,
    record: Mutex<ProgressRecord>,
}

impl AdventureService {
    /// Load stored progress and reconcile it with the catalog.
    pub async fn open(catalog: Arc<Catalog>, store: ProgressStore) -> Self {
        let record = load_reconciled(&catalog, &store).await;
        Self {
            catalog,
            store,
            record: Mutex::new(record),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Current progress.
    pub async fn progress(&self) -> ProgressRecord {
        self.record.lock().await.clone()
    }

    /// Re-read progress from the store, replacing the session copy.
    pub async fn reload(&self) -> ProgressRecord {
        let mut current = self.record.lock().await;
        *current = load_reconciled(&self.catalog, &self.store).await;
        current.clone()
    }

    /// # Errors
    ///
    /// Returns `AdventureError::NotFound` for an unknown zone.
    pub async fn explore_zone(&self, zone_id: &ZoneId) -> Result<ProgressRecord, AdventureError> {
        let mut current = self.record.lock().await;
        let next = rules::explore_zone(&self.catalog, &current, zone_id)?;
        self.commit(&mut current, next, "explore_zone").await;
        debug!(zone = %zone_id, "zone explored");
        Ok(current.clone())
    }

    /// # Errors
    ///
    /// Returns `AdventureError::NotFound` if the pair is not in the catalog and
    /// `AdventureError::Locked` if the preceding activity is incomplete.
    pub async fn complete_activity(
        &self,
        zone_id: &ZoneId,
        activity_id: &ActivityId,
    ) -> Result<ProgressRecord, AdventureError> {
        let mut current = self.record.lock().await;
        let next = match rules::complete_activity(&self.catalog, &current, zone_id, activity_id) {
            Ok(next) => next,
            Err(err) => {
                debug!(zone = %zone_id, activity = %activity_id, error = %err, "completion rejected");
                return Err(err);
            }
        };
        self.commit(&mut current, next, "complete_activity").await;
        debug!(
            zone = %zone_id,
            activity = %activity_id,
            zone_xp = current.xp_for(zone_id.as_str()),
            "activity completed"
        );
        Ok(current.clone())
    }

    /// Grant one of the event-driven badges.
    ///
    /// # Errors
    ///
    /// Returns `AdventureError::NotEventDriven` for badges derived from progress.
    pub async fn grant_achievement(
        &self,
        achievement: Achievement,
    ) -> Result<ProgressRecord, AdventureError> {
        let mut current = self.record.lock().await;
        let next = rules::grant_achievement(&self.catalog, &current, achievement)?;
        self.commit(&mut current, next, "grant_achievement").await;
        debug!(%achievement, "achievement granted");
        Ok(current.clone())
    }

    /// Clear stored progress and start over with an empty record.
    pub async fn reset_progress(&self) -> ProgressRecord {
        let mut current = self.record.lock().await;
        self.store.clear().await;
        *current = ProgressRecord::default();
        info!("adventure progress reset");
        current.clone()
    }

    /// # Errors
    ///
    /// Returns `AdventureError::NotFound` for an unknown zone.
    pub async fn zone_overview(&self, zone_id: &ZoneId) -> Result<ZoneOverview, AdventureError> {
        let zone = self.catalog.zone(zone_id)?;
        let current = self.record.lock().await;
        Ok(ZoneOverview::build(&self.catalog, zone, &current))
    }

    /// Overview of every zone in catalog order.
    pub async fn overviews(&self) -> Vec<ZoneOverview> {
        let current = self.record.lock().await;
        self.catalog
            .zones()
            .iter()
            .map(|zone| ZoneOverview::build(&self.catalog, zone, &current))
            .collect()
    }

    async fn commit(&self, current: &mut ProgressRecord, next: ProgressRecord, op: &'static str) {
        self.store.save(&next).await;
        for id in next.achievements().difference(current.achievements()) {
            info!(achievement = %id, op, "achievement unlocked");
        }
        *current = next;
    }
}

async fn load_reconciled(catalog: &Catalog, store: &ProgressStore) -> ProgressRecord {
    let loaded = store.load().await;
    let mut record = loaded.clone();
    let report = record.reconcile(catalog);
    let record = rules::settle(catalog, record);
    if !report.is_clean() {
        warn!(
            dropped_zones = report.dropped_zones.len(),
            dropped_activities = report.dropped_activities.len(),
            xp_corrected = report.xp_corrected,
            "stored progress did not match the catalog; repaired"
        );
    }
    if record != loaded {
        store.save(&record).await;
    }
    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use quest_core::model::ActivityState;
    use storage::PROGRESS_KEY;
    use storage::repository::{InMemoryRepository, KeyValueStore, StorageError};

    struct UnreachableSlots;

    #[async_trait]
    impl KeyValueStore for UnreachableSlots {
        async fn read_slot(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Connection("database is locked".into()))
        }

        async fn write_slot(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Connection("database is locked".into()))
        }

        async fn clear_slot(&self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Connection("database is locked".into()))
        }
    }

    async fn service(repo: &InMemoryRepository) -> AdventureService {
        AdventureService::open(
            Arc::new(Catalog::standard()),
            ProgressStore::new(Arc::new(repo.clone())),
        )
        .await
    }

    #[tokio::test]
    async fn first_open_starts_empty() {
        let repo = InMemoryRepository::new();
        let adventure = service(&repo).await;
        assert!(adventure.progress().await.is_empty());
        assert_eq!(repo.read_slot(PROGRESS_KEY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn every_mutation_is_persisted() {
        let repo = InMemoryRepository::new();
        let adventure = service(&repo).await;

        adventure.explore_zone(&ZoneId::new("5-8")).await.unwrap();
        let after = adventure
            .complete_activity(&ZoneId::new("5-8"), &ActivityId::new("scratch-jr"))
            .await
            .unwrap();

        let reopened = service(&repo).await;
        assert_eq!(reopened.progress().await, after);
        assert!(after.has_achievement("first-steps"));
    }

    #[tokio::test]
    async fn locked_completion_leaves_session_and_store_untouched() {
        let repo = InMemoryRepository::new();
        let adventure = service(&repo).await;

        let err = adventure
            .complete_activity(&ZoneId::new("5-8"), &ActivityId::new("color-quest"))
            .await
            .unwrap_err();
        assert!(matches!(err, AdventureError::Locked { .. }));
        assert!(adventure.progress().await.is_empty());
        assert_eq!(repo.read_slot(PROGRESS_KEY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn reset_clears_store_and_relocks_activities() {
        let repo = InMemoryRepository::new();
        let adventure = service(&repo).await;
        let zone = ZoneId::new("5-8");
        adventure.explore_zone(&zone).await.unwrap();
        adventure
            .complete_activity(&zone, &ActivityId::new("scratch-jr"))
            .await
            .unwrap();
        adventure.grant_achievement(Achievement::Team).await.unwrap();

        let reset = adventure.reset_progress().await;
        assert!(reset.is_empty());
        assert_eq!(repo.read_slot(PROGRESS_KEY).await.unwrap(), None);

        for overview in adventure.overviews().await {
            let states: Vec<ActivityState> =
                overview.activities.iter().map(|a| a.state).collect();
            assert_eq!(states[0], ActivityState::Unlocked);
            assert!(states[1..].iter().all(|s| *s == ActivityState::Locked));
        }
    }

    #[tokio::test]
    async fn stored_progress_is_repaired_on_open() {
        let repo = InMemoryRepository::new();
        repo.write_slot(
            PROGRESS_KEY,
            r#"{"exploredZones":["5-8","moon"],"completedActivities":["scratch-jr","retired-quest"],"userXP":{"5-8":999},"achievements":["team"]}"#,
        )
        .await
        .unwrap();

        let adventure = service(&repo).await;
        let record = adventure.progress().await;
        assert!(!record.has_explored("moon"));
        assert!(!record.has_completed("retired-quest"));
        assert_eq!(record.xp_for("5-8"), 50);
        assert!(record.has_achievement("team"));
        assert!(record.has_achievement("first-steps"));

        let raw = repo.read_slot(PROGRESS_KEY).await.unwrap().unwrap();
        assert!(!raw.contains("retired-quest"));
    }

    #[tokio::test]
    async fn reload_picks_up_external_writes() {
        let repo = InMemoryRepository::new();
        let adventure = service(&repo).await;
        let other = service(&repo).await;

        other.explore_zone(&ZoneId::new("13-18")).await.unwrap();
        assert!(!adventure.progress().await.has_explored("13-18"));
        assert!(adventure.reload().await.has_explored("13-18"));
    }

    #[tokio::test]
    async fn zone_overview_reports_unknown_zone() {
        let repo = InMemoryRepository::new();
        let adventure = service(&repo).await;
        assert!(matches!(
            adventure.zone_overview(&ZoneId::new("19-99")).await,
            Err(AdventureError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn storage_failures_do_not_block_progress() {
        let adventure = AdventureService::open(
            Arc::new(Catalog::standard()),
            ProgressStore::new(Arc::new(UnreachableSlots)),
        )
        .await;
        let zone = ZoneId::new("5-8");

        adventure
            .complete_activity(&zone, &ActivityId::new("scratch-jr"))
            .await
            .unwrap();
        let after = adventure
            .complete_activity(&zone, &ActivityId::new("robot-dance"))
            .await
            .unwrap();
        assert_eq!(after.xp_for("5-8"), 100);
        assert!(after.has_achievement("first-steps"));
        assert_eq!(adventure.progress().await, after);
        assert_eq!(adventure.progress().await.completed_activities().len(), 2);

        assert!(adventure.reset_progress().await.is_empty());
        assert!(adventure.progress().await.is_empty());
    }

    #[tokio::test]
    async fn derived_badges_are_written_back_on_open() {
        let repo = InMemoryRepository::new();
        repo.write_slot(
            PROGRESS_KEY,
            r#"{"exploredZones":[],"completedActivities":["scratch-jr"],"userXP":{"5-8":50},"achievements":[]}"#,
        )
        .await
        .unwrap();

        let adventure = service(&repo).await;
        assert!(adventure.progress().await.has_achievement("first-steps"));

        let raw = repo.read_slot(PROGRESS_KEY).await.unwrap().unwrap();
        assert!(raw.contains("first-steps"), "{raw}");
    }

    #[tokio::test]
    async fn consistent_progress_is_not_rewritten_on_open() {
        let repo = InMemoryRepository::new();
        let stored =
            r#"{ "exploredZones": ["9-12"], "completedActivities": [], "userXP": {}, "achievements": [] }"#;
        repo.write_slot(PROGRESS_KEY, stored).await.unwrap();

        let adventure = service(&repo).await;
        assert!(adventure.progress().await.has_explored("9-12"));
        assert_eq!(repo.read_slot(PROGRESS_KEY).await.unwrap().as_deref(), Some(stored));
    }
}
