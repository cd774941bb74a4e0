//! Pure transitions over a progress record.
//!
//! Each function takes the current record and returns the next one; the input is never
//! modified, so a rejected action leaves the caller's record exactly as it was.

use quest_core::AchievementEvaluator;
use quest_core::model::{Achievement, ActivityId, Catalog, ProgressRecord, ZoneId};

use crate::error::AdventureError;

/// Mark a zone explored. Exploring an already explored zone returns an equal record.
///
/// # Errors
///
/// Returns `AdventureError::NotFound` if the zone is not in the catalog.
pub fn explore_zone(
    catalog: &Catalog,
    record: &ProgressRecord,
    zone_id: &ZoneId,
) -> Result<ProgressRecord, AdventureError> {
    catalog.zone(zone_id)?;
    let mut next = record.clone();
    next.mark_explored(zone_id.clone());
    Ok(settle(catalog, next))
}

/// Complete an unlocked activity and credit its XP once.
///
/// # Errors
///
/// Returns `AdventureError::NotFound` if the pair is not in the catalog and
/// `AdventureError::Locked` if the preceding activity has not been completed.
pub fn complete_activity(
    catalog: &Catalog,
    record: &ProgressRecord,
    zone_id: &ZoneId,
    activity_id: &ActivityId,
) -> Result<ProgressRecord, AdventureError> {
    let activity = catalog.activity(zone_id, activity_id)?;
    if record.has_completed(activity_id.as_str()) {
        return Ok(settle(catalog, record.clone()));
    }
    if !catalog.is_unlocked(activity_id.as_str(), record.completed_activities()) {
        return Err(AdventureError::Locked {
            zone: zone_id.clone(),
            activity: activity_id.clone(),
        });
    }

    let mut next = record.clone();
    next.mark_completed(activity);
    Ok(settle(catalog, next))
}

/// Add an event-driven achievement.
///
/// # Errors
///
/// Returns `AdventureError::NotEventDriven` for achievements computed from progress.
pub fn grant_achievement(
    catalog: &Catalog,
    record: &ProgressRecord,
    achievement: Achievement,
) -> Result<ProgressRecord, AdventureError> {
    if !achievement.is_event_driven() {
        return Err(AdventureError::NotEventDriven(achievement));
    }
    let mut next = record.clone();
    next.unlock_achievements([achievement.id()]);
    Ok(settle(catalog, next))
}

/// Apply the evaluator so the achievement set reflects the record.
pub fn settle(catalog: &Catalog, mut record: ProgressRecord) -> ProgressRecord {
    let earned = AchievementEvaluator::for_catalog(catalog).evaluate(&record);
    record.unlock_achievements(earned);
    record
}
