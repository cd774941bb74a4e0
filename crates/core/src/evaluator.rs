//! Threshold rules that turn progress counts into achievements.

use std::collections::BTreeSet;

use crate::model::{Achievement, AchievementId, Catalog, ProgressRecord};

/// Completed activities needed for `first-steps`.
pub const FIRST_STEPS_THRESHOLD: usize = 1;
/// Completed activities needed for `builder`.
pub const BUILDER_THRESHOLD: usize = 5;

/// Computes the achievement set for a progress record.
///
/// The result always contains every achievement already on the record, so applying it
/// can only add badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AchievementEvaluator {
    zone_count: usize,
}

impl AchievementEvaluator {
    #[must_use]
    pub fn new(zone_count: usize) -> Self {
        Self { zone_count }
    }

    #[must_use]
    pub fn for_catalog(catalog: &Catalog) -> Self {
        Self::new(catalog.zone_count())
    }

    #[must_use]
    pub fn zone_count(&self) -> usize {
        self.zone_count
    }

    /// Derived achievements earned by the record, ignoring what it already holds.
    #[must_use]
    pub fn derived(&self, record: &ProgressRecord) -> Vec<Achievement> {
        let completed = record.completed_activities().len();
        let explored = record.explored_zones().len();

        let mut earned = Vec::new();
        if completed >= FIRST_STEPS_THRESHOLD {
            earned.push(Achievement::FirstSteps);
        }
        // No explorer badge for a catalog without zones.
        if self.zone_count > 0 && explored >= self.zone_count {
            earned.push(Achievement::Explorer);
        }
        if completed >= BUILDER_THRESHOLD {
            earned.push(Achievement::Builder);
        }
        earned
    }

    /// Full achievement set: what the record holds plus everything now derivable.
    #[must_use]
    pub fn evaluate(&self, record: &ProgressRecord) -> BTreeSet<AchievementId> {
        let mut all = record.achievements().clone();
        all.extend(self.derived(record).into_iter().map(Achievement::id));
        all
    }

    /// Achievements `evaluate` would add that the record does not have yet.
    #[must_use]
    pub fn newly_unlocked(&self, record: &ProgressRecord) -> Vec<Achievement> {
        self.derived(record)
            .into_iter()
            .filter(|a| !record.has_achievement(a.as_str()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ActivityId, ZoneId};
    use std::collections::BTreeMap;

    fn record(zones: &[&str], completed: &[&str], achievements: &[&str]) -> ProgressRecord {
        ProgressRecord::from_persisted(
            zones.iter().map(|z| ZoneId::new(*z)).collect(),
            completed.iter().map(|a| ActivityId::new(*a)).collect(),
            BTreeMap::new(),
            achievements.iter().map(|a| AchievementId::new(*a)).collect(),
        )
    }

    #[test]
    fn empty_record_earns_nothing() {
        let evaluator = AchievementEvaluator::new(3);
        assert!(evaluator.evaluate(&ProgressRecord::new()).is_empty());
    }

    #[test]
    fn one_completion_earns_first_steps() {
        let evaluator = AchievementEvaluator::new(3);
        let got = evaluator.evaluate(&record(&[], &["scratch-jr"], &[]));
        assert_eq!(got, BTreeSet::from([Achievement::FirstSteps.id()]));
    }

    #[test]
    fn exploring_all_zones_earns_explorer() {
        let evaluator = AchievementEvaluator::new(3);
        let partial = evaluator.evaluate(&record(&["5-8", "9-12"], &[], &[]));
        assert!(!partial.contains("explorer"));

        let full = evaluator.evaluate(&record(&["5-8", "9-12", "13-18"], &[], &[]));
        assert!(full.contains("explorer"));
    }

    #[test]
    fn five_completions_earn_builder() {
        let evaluator = AchievementEvaluator::new(3);
        let four = record(&[], &["a", "b", "c", "d"], &[]);
        assert!(!evaluator.evaluate(&four).contains("builder"));

        let five = record(&[], &["a", "b", "c", "d", "e"], &[]);
        let got = evaluator.evaluate(&five);
        assert!(got.contains("builder"));
        assert!(got.contains("first-steps"));
    }

    #[test]
    fn existing_achievements_are_never_retracted() {
        let evaluator = AchievementEvaluator::new(3);
        let held = record(&[], &[], &["team", "explorer", "someday-badge"]);
        let got = evaluator.evaluate(&held);
        assert!(got.is_superset(held.achievements()));
    }

    #[test]
    fn newly_unlocked_skips_held_badges() {
        let evaluator = AchievementEvaluator::new(1);
        let rec = record(&["5-8"], &["scratch-jr"], &["first-steps"]);
        assert_eq!(evaluator.newly_unlocked(&rec), vec![Achievement::Explorer]);
    }

    #[test]
    fn zero_zone_catalog_never_awards_explorer() {
        let evaluator = AchievementEvaluator::new(0);
        assert!(!evaluator.evaluate(&ProgressRecord::new()).contains("explorer"));
    }
}
