use quest_core::model::{
    ActivityId, ActivityState, Catalog, Difficulty, ProgressRecord, Zone, ZoneId,
};

/// Presentation-agnostic snapshot of one activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityOverview {
    pub id: ActivityId,
    pub title: String,
    pub difficulty: Difficulty,
    pub xp_reward: u32,
    pub state: ActivityState,
}

impl ActivityOverview {
    /// Only unlocked activities accept a completion.
    #[must_use]
    pub fn can_complete(&self) -> bool {
        self.state == ActivityState::Unlocked
    }
}

/// Presentation-agnostic snapshot of one zone against a progress record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneOverview {
    pub id: ZoneId,
    pub title: String,
    pub tagline: String,
    pub explored: bool,
    pub xp: u32,
    pub max_xp: u32,
    pub activities: Vec<ActivityOverview>,
}

impl ZoneOverview {
    #[must_use]
    pub fn build(catalog: &Catalog, zone: &Zone, record: &ProgressRecord) -> Self {
        let completed = record.completed_activities();
        let activities = zone
            .activities()
            .iter()
            .map(|a| ActivityOverview {
                id: a.id().clone(),
                title: a.title().to_owned(),
                difficulty: a.difficulty(),
                xp_reward: a.xp_reward(),
                state: catalog.activity_state(a.id().as_str(), completed),
            })
            .collect();

        Self {
            id: zone.id().clone(),
            title: zone.title().to_owned(),
            tagline: zone.tagline().to_owned(),
            explored: record.has_explored(zone.id().as_str()),
            xp: record.xp_for(zone.id().as_str()),
            max_xp: zone.max_xp(),
            activities,
        }
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.activities
            .iter()
            .filter(|a| a.state == ActivityState::Completed)
            .count()
    }
}
