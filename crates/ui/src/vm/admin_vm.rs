use quest_core::model::{Entity, EntityKind, Role};

use super::time_fmt::format_datetime;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdminRowVm {
    pub id: String,
    pub label: String,
    pub updated_str: String,
}

/// One back-office collection as shown in the admin list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdminSectionVm {
    pub kind: EntityKind,
    pub title: &'static str,
    pub rows: Vec<AdminRowVm>,
    pub can_manage: bool,
}

impl AdminSectionVm {
    #[must_use]
    pub fn count_label(&self) -> String {
        match self.rows.len() {
            1 => "1 entry".to_owned(),
            n => format!("{n} entries"),
        }
    }
}

#[must_use]
pub fn map_admin_section<E: Entity>(items: &[E], role: Role) -> AdminSectionVm {
    AdminSectionVm {
        kind: E::KIND,
        title: E::KIND.label(),
        rows: items
            .iter()
            .map(|item| AdminRowVm {
                id: item.id().as_str().to_owned(),
                label: item.label().to_owned(),
                updated_str: format_datetime(item.updated_at()),
            })
            .collect(),
        can_manage: role.can_manage(E::KIND),
    }
}
