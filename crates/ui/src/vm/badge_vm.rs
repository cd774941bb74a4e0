use quest_core::model::{Achievement, ProgressRecord};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BadgeTileVm {
    pub id: String,
    pub title: String,
    pub description: String,
    pub unlocked: bool,
    pub source_label: &'static str,
}

/// Every known badge in display order, followed by any unrecognised ids the record holds.
#[must_use]
pub fn map_badges(record: &ProgressRecord) -> Vec<BadgeTileVm> {
    let mut tiles: Vec<BadgeTileVm> = Achievement::ALL
        .iter()
        .map(|a| BadgeTileVm {
            id: a.as_str().to_owned(),
            title: a.title().to_owned(),
            description: a.description().to_owned(),
            unlocked: record.has_achievement(a.as_str()),
            source_label: if a.is_event_driven() {
                "Awarded"
            } else {
                "Earned"
            },
        })
        .collect();

    tiles.extend(
        record
            .achievements()
            .iter()
            .filter(|id| Achievement::from_id(id.as_str()).is_none())
            .map(|id| BadgeTileVm {
                id: id.as_str().to_owned(),
                title: id.as_str().to_owned(),
                description: String::new(),
                unlocked: true,
                source_label: "Awarded",
            }),
    );
    tiles
}
