use quest_core::model::{Achievement, ActivityState, ProgressRecord};
use services::{ActivityOverview, ZoneOverview};

/// One zone tile on the adventure map.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ZoneCardVm {
    pub id: String,
    pub title: String,
    pub tagline: String,
    pub explored: bool,
    pub xp_label: String,
    pub progress_pct: u32,
    pub completed_label: String,
}

impl From<&ZoneOverview> for ZoneCardVm {
    fn from(zone: &ZoneOverview) -> Self {
        let done = zone.completed_count();
        let total = zone.activities.len();
        Self {
            id: zone.id.as_str().to_owned(),
            title: zone.title.clone(),
            tagline: zone.tagline.clone(),
            explored: zone.explored,
            xp_label: format!("{} / {} XP", zone.xp, zone.max_xp),
            progress_pct: percent(zone.xp, zone.max_xp),
            completed_label: format!("{done} of {total} activities done"),
        }
    }
}

#[must_use]
pub fn map_zone_cards(zones: &[ZoneOverview]) -> Vec<ZoneCardVm> {
    zones.iter().map(ZoneCardVm::from).collect()
}

/// One activity row inside a zone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivityRowVm {
    pub id: String,
    pub title: String,
    pub difficulty_label: &'static str,
    pub xp_label: String,
    pub state_label: &'static str,
    pub state_class: &'static str,
    pub can_complete: bool,
}

impl From<&ActivityOverview> for ActivityRowVm {
    fn from(activity: &ActivityOverview) -> Self {
        let (state_label, state_class) = match activity.state {
            ActivityState::Locked => ("Locked", "activity--locked"),
            ActivityState::Unlocked => ("Ready", "activity--unlocked"),
            ActivityState::Completed => ("Completed", "activity--completed"),
        };
        Self {
            id: activity.id.as_str().to_owned(),
            title: activity.title.clone(),
            difficulty_label: activity.difficulty.label(),
            xp_label: format!("+{} XP", activity.xp_reward),
            state_label,
            state_class,
            can_complete: activity.can_complete(),
        }
    }
}

#[must_use]
pub fn map_activity_rows(zone: &ZoneOverview) -> Vec<ActivityRowVm> {
    zone.activities.iter().map(ActivityRowVm::from).collect()
}

/// Headline numbers for the home page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressSummaryVm {
    pub total_xp: u32,
    pub completed: usize,
    pub explored: usize,
    pub badges_label: String,
}

#[must_use]
pub fn map_progress_summary(record: &ProgressRecord) -> ProgressSummaryVm {
    let known = Achievement::ALL
        .iter()
        .filter(|a| record.has_achievement(a.as_str()))
        .count();
    ProgressSummaryVm {
        total_xp: record.total_xp(),
        completed: record.completed_activities().len(),
        explored: record.explored_zones().len(),
        badges_label: format!("{known} of {} badges", Achievement::ALL.len()),
    }
}

fn percent(value: u32, max: u32) -> u32 {
    if max == 0 {
        return 0;
    }
    u32::try_from((u64::from(value) * 100 / u64::from(max)).min(100)).unwrap_or(100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quest_core::model::{ActivityId, Catalog, ZoneId};

    #[test]
    fn zone_card_reports_xp_and_completion() {
        let catalog = Catalog::standard();
        let mut record = ProgressRecord::new();
        record.mark_completed(catalog.find_activity("scratch-jr").unwrap());
        let zone = catalog.zone(&ZoneId::new("5-8")).unwrap();
        let overview = ZoneOverview::build(&catalog, zone, &record);

        let card = ZoneCardVm::from(&overview);
        assert_eq!(card.xp_label, "50 / 150 XP");
        assert_eq!(card.progress_pct, 33);
        assert_eq!(card.completed_label, "1 of 3 activities done");

        let rows = map_activity_rows(&overview);
        assert_eq!(rows[0].state_label, "Completed");
        assert!(rows[1].can_complete);
        assert!(!rows[2].can_complete);
        assert_eq!(rows[2].state_label, "Locked");
        assert_eq!(rows[1].id, ActivityId::new("robot-dance").as_str());
    }

    #[test]
    fn percent_handles_empty_zone() {
        assert_eq!(percent(0, 0), 0);
        assert_eq!(percent(150, 150), 100);
    }
}
