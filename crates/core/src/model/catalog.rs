use std::collections::{BTreeSet, HashMap, HashSet};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::{ActivityId, ZoneId};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("unknown zone: {0}")]
    UnknownZone(ZoneId),

    #[error("unknown activity {activity} in zone {zone}")]
    UnknownActivity { zone: ZoneId, activity: ActivityId },

    #[error("catalog must contain at least one zone")]
    Empty,

    #[error("zone {0} has no activities")]
    EmptyZone(ZoneId),

    #[error("duplicate zone id: {0}")]
    DuplicateZone(ZoneId),

    #[error("duplicate activity id: {0}")]
    DuplicateActivity(ActivityId),

    #[error("activity {activity} declares zone {declared} but is listed under {listed}")]
    ZoneMismatch {
        activity: ActivityId,
        declared: ZoneId,
        listed: ZoneId,
    },
}

//
// ─── ACTIVITIES & ZONES ────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

/// Eligibility of an activity for completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityState {
    Locked,
    Unlocked,
    Completed,
}

/// A single completable challenge with a fixed position in its zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    id: ActivityId,
    title: String,
    difficulty: Difficulty,
    xp_reward: u32,
    zone_id: ZoneId,
}

impl Activity {
    #[must_use]
    pub fn new(
        id: impl Into<ActivityId>,
        title: impl Into<String>,
        difficulty: Difficulty,
        xp_reward: u32,
        zone_id: impl Into<ZoneId>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            difficulty,
            xp_reward,
            zone_id: zone_id.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &ActivityId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn xp_reward(&self) -> u32 {
        self.xp_reward
    }

    #[must_use]
    pub fn zone_id(&self) -> &ZoneId {
        &self.zone_id
    }
}

/// A thematic group of activities, completed in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zone {
    id: ZoneId,
    title: String,
    tagline: String,
    activities: Vec<Activity>,
}

impl Zone {
    #[must_use]
    pub fn new(
        id: impl Into<ZoneId>,
        title: impl Into<String>,
        tagline: impl Into<String>,
        activities: Vec<Activity>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            tagline: tagline.into(),
            activities,
        }
    }

    #[must_use]
    pub fn id(&self) -> &ZoneId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn tagline(&self) -> &str {
        &self.tagline
    }

    #[must_use]
    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    /// Sum of every activity reward in this zone.
    #[must_use]
    pub fn max_xp(&self) -> u32 {
        self.activities
            .iter()
            .fold(0_u32, |acc, a| acc.saturating_add(a.xp_reward))
    }
}

//
// ─── CATALOG ───────────────────────────────────────────────────────────────────
//

/// Immutable zone/activity definitions plus the unlock rules derived from them.
#[derive(Debug, Clone)]
pub struct Catalog {
    zones: Vec<Zone>,
    // activity id -> (zone index, position within zone)
    index: HashMap<ActivityId, (usize, usize)>,
}

impl Catalog {
    /// Build a catalog after checking ids and zone membership.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the catalog is empty, a zone has no activities,
    /// ids repeat, or an activity names a different zone than the one listing it.
    pub fn new(zones: Vec<Zone>) -> Result<Self, CatalogError> {
        if zones.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut zone_ids = HashSet::new();
        let mut activity_ids = HashSet::new();
        for zone in &zones {
            if !zone_ids.insert(zone.id.clone()) {
                return Err(CatalogError::DuplicateZone(zone.id.clone()));
            }
            if zone.activities.is_empty() {
                return Err(CatalogError::EmptyZone(zone.id.clone()));
            }
            for activity in &zone.activities {
                if activity.zone_id != zone.id {
                    return Err(CatalogError::ZoneMismatch {
                        activity: activity.id.clone(),
                        declared: activity.zone_id.clone(),
                        listed: zone.id.clone(),
                    });
                }
                if !activity_ids.insert(activity.id.clone()) {
                    return Err(CatalogError::DuplicateActivity(activity.id.clone()));
                }
            }
        }

        Ok(Self::indexed(zones))
    }

    fn indexed(zones: Vec<Zone>) -> Self {
        let mut index = HashMap::new();
        for (zi, zone) in zones.iter().enumerate() {
            for (ai, activity) in zone.activities.iter().enumerate() {
                index.insert(activity.id.clone(), (zi, ai));
            }
        }
        Self { zones, index }
    }

    /// The adventure shipped with the site: one zone per age track.
    #[must_use]
    pub fn standard() -> Self {
        Self::indexed(standard_zones())
    }

    #[must_use]
    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    #[must_use]
    pub fn zone_count(&self) -> usize {
        self.zones.len()
    }

    /// Look up a zone by id.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::UnknownZone` if the id is not in the catalog.
    pub fn zone(&self, zone_id: &ZoneId) -> Result<&Zone, CatalogError> {
        self.zones
            .iter()
            .find(|z| &z.id == zone_id)
            .ok_or_else(|| CatalogError::UnknownZone(zone_id.clone()))
    }

    /// Ordered activities of a zone.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::UnknownZone` if the id is not in the catalog.
    pub fn activities_of(&self, zone_id: &ZoneId) -> Result<&[Activity], CatalogError> {
        self.zone(zone_id).map(Zone::activities)
    }

    /// Resolve a zone/activity pair.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::UnknownZone` for an unknown zone and
    /// `CatalogError::UnknownActivity` when the activity is not part of that zone.
    pub fn activity(
        &self,
        zone_id: &ZoneId,
        activity_id: &ActivityId,
    ) -> Result<&Activity, CatalogError> {
        self.activities_of(zone_id)?
            .iter()
            .find(|a| &a.id == activity_id)
            .ok_or_else(|| CatalogError::UnknownActivity {
                zone: zone_id.clone(),
                activity: activity_id.clone(),
            })
    }

    #[must_use]
    pub fn find_activity(&self, activity_id: &str) -> Option<&Activity> {
        self.index
            .get(activity_id)
            .map(|&(zi, ai)| &self.zones[zi].activities[ai])
    }

    /// The activity immediately before this one in its zone, if any.
    #[must_use]
    pub fn predecessor(&self, activity_id: &str) -> Option<&Activity> {
        let &(zi, ai) = self.index.get(activity_id)?;
        ai.checked_sub(1).map(|prev| &self.zones[zi].activities[prev])
    }

    /// Whether an activity may be completed.
    ///
    /// True for the first activity of a zone, or when the preceding activity has
    /// been completed. Unknown activities are never unlocked.
    #[must_use]
    pub fn is_unlocked(&self, activity_id: &str, completed: &BTreeSet<ActivityId>) -> bool {
        if !self.index.contains_key(activity_id) {
            return false;
        }
        match self.predecessor(activity_id) {
            None => true,
            Some(prev) => completed.contains(prev.id.as_str()),
        }
    }

    /// Current state of an activity given the completed set.
    #[must_use]
    pub fn activity_state(
        &self,
        activity_id: &str,
        completed: &BTreeSet<ActivityId>,
    ) -> ActivityState {
        if completed.contains(activity_id) {
            ActivityState::Completed
        } else if self.is_unlocked(activity_id, completed) {
            ActivityState::Unlocked
        } else {
            ActivityState::Locked
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

fn zone(id: &str, title: &str, tagline: &str, items: &[(&str, &str, Difficulty, u32)]) -> Zone {
    let activities = items
        .iter()
        .map(|&(aid, atitle, difficulty, xp)| Activity::new(aid, atitle, difficulty, xp, id))
        .collect();
    Zone::new(id, title, tagline, activities)
}

/// Zone definitions behind `Catalog::standard`.
#[must_use]
pub fn standard_zones() -> Vec<Zone> {
    use Difficulty::{Advanced, Beginner, Intermediate};

    vec![
        zone(
            "5-8",
            "Little Coders",
            "Tap, drag and dance your first programs.",
            &[
                ("scratch-jr", "ScratchJr Stories", Beginner, 50),
                ("robot-dance", "Robot Dance Party", Beginner, 50),
                ("color-quest", "Color Quest", Beginner, 50),
            ],
        ),
        zone(
            "9-12",
            "Young Builders",
            "Debug robots and solve logic puzzles with blocks.",
            &[
                ("fix-the-robot", "Fix the Robot", Beginner, 75),
                ("logic-puzzle", "Logic Puzzle", Intermediate, 100),
                ("code-builder", "Code Builder", Intermediate, 100),
            ],
        ),
        zone(
            "13-18",
            "Future Innovators",
            "Ship web pages, games and AI experiments.",
            &[
                ("web-starter", "Build a Web Page", Intermediate, 100),
                ("game-jam", "Game Jam", Advanced, 150),
                ("ai-explorer", "AI Explorer", Advanced, 150),
            ],
        ),
    ]
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn completed(ids: &[&str]) -> BTreeSet<ActivityId> {
        ids.iter().map(|id| ActivityId::new(*id)).collect()
    }

    #[test]
    fn standard_zones_pass_validation() {
        let catalog = Catalog::new(standard_zones()).unwrap();
        assert_eq!(catalog.zone_count(), 3);
    }

    #[test]
    fn activities_of_keeps_catalog_order() {
        let catalog = Catalog::standard();
        let ids: Vec<&str> = catalog
            .activities_of(&ZoneId::new("5-8"))
            .unwrap()
            .iter()
            .map(|a| a.id().as_str())
            .collect();
        assert_eq!(ids, vec!["scratch-jr", "robot-dance", "color-quest"]);
    }

    #[test]
    fn activities_of_unknown_zone_fails() {
        let catalog = Catalog::standard();
        let err = catalog.activities_of(&ZoneId::new("99")).unwrap_err();
        assert_eq!(err, CatalogError::UnknownZone(ZoneId::new("99")));
    }

    #[test]
    fn activity_must_belong_to_zone() {
        let catalog = Catalog::standard();
        let err = catalog
            .activity(&ZoneId::new("9-12"), &ActivityId::new("scratch-jr"))
            .unwrap_err();
        assert!(matches!(err, CatalogError::UnknownActivity { .. }));
    }

    #[test]
    fn first_activity_is_always_unlocked() {
        let catalog = Catalog::standard();
        let none = BTreeSet::new();
        for zone in catalog.zones() {
            assert!(catalog.is_unlocked(zone.activities()[0].id().as_str(), &none));
        }
    }

    #[test]
    fn later_activity_unlocks_after_predecessor() {
        let catalog = Catalog::standard();
        assert!(!catalog.is_unlocked("robot-dance", &completed(&[])));
        assert!(catalog.is_unlocked("robot-dance", &completed(&["scratch-jr"])));
        assert!(!catalog.is_unlocked("color-quest", &completed(&["scratch-jr"])));
    }

    #[test]
    fn unknown_activity_is_never_unlocked() {
        let catalog = Catalog::standard();
        assert!(!catalog.is_unlocked("moon-landing", &completed(&[])));
    }

    #[test]
    fn activity_state_tracks_completion() {
        let catalog = Catalog::standard();
        let done = completed(&["scratch-jr"]);
        assert_eq!(
            catalog.activity_state("scratch-jr", &done),
            ActivityState::Completed
        );
        assert_eq!(
            catalog.activity_state("robot-dance", &done),
            ActivityState::Unlocked
        );
        assert_eq!(
            catalog.activity_state("color-quest", &done),
            ActivityState::Locked
        );
    }

    #[test]
    fn rejects_duplicate_activity_ids() {
        let zones = vec![
            Zone::new(
                "a",
                "A",
                "",
                vec![Activity::new("x", "X", Difficulty::Beginner, 10, "a")],
            ),
            Zone::new(
                "b",
                "B",
                "",
                vec![Activity::new("x", "X", Difficulty::Beginner, 10, "b")],
            ),
        ];
        assert_eq!(
            Catalog::new(zones).unwrap_err(),
            CatalogError::DuplicateActivity(ActivityId::new("x"))
        );
    }

    #[test]
    fn rejects_zone_mismatch_and_empty_zone() {
        let mismatch = vec![Zone::new(
            "a",
            "A",
            "",
            vec![Activity::new("x", "X", Difficulty::Beginner, 10, "b")],
        )];
        assert!(matches!(
            Catalog::new(mismatch).unwrap_err(),
            CatalogError::ZoneMismatch { .. }
        ));

        let empty_zone = vec![Zone::new("a", "A", "", Vec::new())];
        assert_eq!(
            Catalog::new(empty_zone).unwrap_err(),
            CatalogError::EmptyZone(ZoneId::new("a"))
        );
        assert_eq!(Catalog::new(Vec::new()).unwrap_err(), CatalogError::Empty);
    }

    #[test]
    fn zone_max_xp_sums_rewards() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.zone(&ZoneId::new("5-8")).unwrap().max_xp(), 150);
        assert_eq!(catalog.zone(&ZoneId::new("9-12")).unwrap().max_xp(), 275);
    }
}
