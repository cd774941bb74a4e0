use crate::model::ids::AchievementId;

/// Badges the adventure knows how to award.
///
/// `FirstSteps`, `Explorer` and `Builder` are derived from progress counts. The rest are
/// granted by explicit events and only ever passed through by the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Achievement {
    FirstSteps,
    Explorer,
    Builder,
    Team,
    Innovator,
    Master,
}

impl Achievement {
    pub const ALL: [Achievement; 6] = [
        Achievement::FirstSteps,
        Achievement::Explorer,
        Achievement::Builder,
        Achievement::Team,
        Achievement::Innovator,
        Achievement::Master,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Achievement::FirstSteps => "first-steps",
            Achievement::Explorer => "explorer",
            Achievement::Builder => "builder",
            Achievement::Team => "team",
            Achievement::Innovator => "innovator",
            Achievement::Master => "master",
        }
    }

    #[must_use]
    pub fn id(self) -> AchievementId {
        AchievementId::new(self.as_str())
    }

    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.as_str() == id)
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Achievement::FirstSteps => "First Steps",
            Achievement::Explorer => "Explorer",
            Achievement::Builder => "Builder",
            Achievement::Team => "Team Player",
            Achievement::Innovator => "Innovator",
            Achievement::Master => "Code Master",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Achievement::FirstSteps => "Complete your first activity.",
            Achievement::Explorer => "Explore every zone.",
            Achievement::Builder => "Complete five activities.",
            Achievement::Team => "Join a team challenge.",
            Achievement::Innovator => "Share an original project.",
            Achievement::Master => "Finish the final showcase.",
        }
    }

    /// True for badges granted by events rather than computed from counts.
    #[must_use]
    pub fn is_event_driven(self) -> bool {
        matches!(
            self,
            Achievement::Team | Achievement::Innovator | Achievement::Master
        )
    }
}

impl std::fmt::Display for Achievement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip() {
        for achievement in Achievement::ALL {
            assert_eq!(Achievement::from_id(achievement.as_str()), Some(achievement));
        }
        assert_eq!(Achievement::from_id("legendary"), None);
    }

    #[test]
    fn only_team_innovator_master_are_event_driven() {
        let event_driven: Vec<_> = Achievement::ALL
            .into_iter()
            .filter(|a| a.is_event_driven())
            .collect();
        assert_eq!(
            event_driven,
            vec![Achievement::Team, Achievement::Innovator, Achievement::Master]
        );
    }
}
