use std::collections::{BTreeMap, BTreeSet};

use crate::model::catalog::{Activity, Catalog};
use crate::model::ids::{AchievementId, ActivityId, ZoneId};

/// Adventure progress for one user.
///
/// Sets only grow through the insert methods; the only way to shrink a record is to
/// replace it with `ProgressRecord::default()`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProgressRecord {
    explored_zones: BTreeSet<ZoneId>,
    completed_activities: BTreeSet<ActivityId>,
    xp_by_zone: BTreeMap<ZoneId, u32>,
    achievements: BTreeSet<AchievementId>,
}

/// What `ProgressRecord::reconcile` had to discard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reconciliation {
    pub dropped_zones: Vec<ZoneId>,
    pub dropped_activities: Vec<ActivityId>,
    pub xp_corrected: bool,
}

impl Reconciliation {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.dropped_zones.is_empty() && self.dropped_activities.is_empty() && !self.xp_corrected
    }
}

impl ProgressRecord {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rehydrate a record from persisted parts without applying any rules.
    #[must_use]
    pub fn from_persisted(
        explored_zones: BTreeSet<ZoneId>,
        completed_activities: BTreeSet<ActivityId>,
        xp_by_zone: BTreeMap<ZoneId, u32>,
        achievements: BTreeSet<AchievementId>,
    ) -> Self {
        Self {
            explored_zones,
            completed_activities,
            xp_by_zone,
            achievements,
        }
    }

    #[must_use]
    pub fn explored_zones(&self) -> &BTreeSet<ZoneId> {
        &self.explored_zones
    }

    #[must_use]
    pub fn completed_activities(&self) -> &BTreeSet<ActivityId> {
        &self.completed_activities
    }

    #[must_use]
    pub fn xp_by_zone(&self) -> &BTreeMap<ZoneId, u32> {
        &self.xp_by_zone
    }

    #[must_use]
    pub fn achievements(&self) -> &BTreeSet<AchievementId> {
        &self.achievements
    }

    #[must_use]
    pub fn xp_for(&self, zone_id: &str) -> u32 {
        self.xp_by_zone.get(zone_id).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn total_xp(&self) -> u32 {
        self.xp_by_zone
            .values()
            .fold(0_u32, |acc, xp| acc.saturating_add(*xp))
    }

    #[must_use]
    pub fn has_explored(&self, zone_id: &str) -> bool {
        self.explored_zones.contains(zone_id)
    }

    #[must_use]
    pub fn has_completed(&self, activity_id: &str) -> bool {
        self.completed_activities.contains(activity_id)
    }

    #[must_use]
    pub fn has_achievement(&self, achievement_id: &str) -> bool {
        self.achievements.contains(achievement_id)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.explored_zones.is_empty()
            && self.completed_activities.is_empty()
            && self.xp_by_zone.is_empty()
            && self.achievements.is_empty()
    }

    /// Mark a zone as explored. Returns `false` if it already was.
    pub fn mark_explored(&mut self, zone_id: ZoneId) -> bool {
        self.explored_zones.insert(zone_id)
    }

    /// Record a completed activity and credit its reward to the activity's zone.
    ///
    /// Returns `false` (and credits nothing) if the activity was already completed.
    pub fn mark_completed(&mut self, activity: &Activity) -> bool {
        if !self.completed_activities.insert(activity.id().clone()) {
            return false;
        }
        let xp = self.xp_by_zone.entry(activity.zone_id().clone()).or_insert(0);
        *xp = xp.saturating_add(activity.xp_reward());
        true
    }

    /// Add achievements; existing ones are kept.
    pub fn unlock_achievements(&mut self, ids: impl IntoIterator<Item = AchievementId>) {
        self.achievements.extend(ids);
    }

    /// Bring a record read from untrusted storage back in line with the catalog.
    ///
    /// Zones and activities the catalog does not know are discarded, and per-zone XP
    /// is rebuilt from the completed set. Achievements are left untouched.
    pub fn reconcile(&mut self, catalog: &Catalog) -> Reconciliation {
        let mut report = Reconciliation::default();

        let (kept_zones, dropped_zones): (BTreeSet<_>, BTreeSet<_>) =
            std::mem::take(&mut self.explored_zones)
                .into_iter()
                .partition(|z| catalog.zone(z).is_ok());
        self.explored_zones = kept_zones;
        report.dropped_zones = dropped_zones.into_iter().collect();

        let (kept, dropped): (BTreeSet<_>, BTreeSet<_>) =
            std::mem::take(&mut self.completed_activities)
                .into_iter()
                .partition(|a| catalog.find_activity(a.as_str()).is_some());
        self.completed_activities = kept;
        report.dropped_activities = dropped.into_iter().collect();

        let rebuilt = xp_from_completed(catalog, &self.completed_activities);
        if rebuilt != self.xp_by_zone {
            report.xp_corrected = true;
            self.xp_by_zone = rebuilt;
        }

        report
    }
}

/// Per-zone XP as the sum of rewards of the completed activities in each zone.
#[must_use]
pub fn xp_from_completed(
    catalog: &Catalog,
    completed: &BTreeSet<ActivityId>,
) -> BTreeMap<ZoneId, u32> {
    let mut xp = BTreeMap::new();
    for activity in completed
        .iter()
        .filter_map(|id| catalog.find_activity(id.as_str()))
    {
        let entry = xp.entry(activity.zone_id().clone()).or_insert(0_u32);
        *entry = entry.saturating_add(activity.xp_reward());
    }
    xp
}
