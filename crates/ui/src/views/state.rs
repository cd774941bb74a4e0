use dioxus::prelude::*;
use services::{AdventureError, ContentServiceError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    Unknown,
    NotFound,
    Locked,
    Forbidden,
    Invalid,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::Unknown => "Something went wrong. Please try again.",
            ViewError::NotFound => "We couldn't find that.",
            ViewError::Locked => "Complete the previous activity first.",
            ViewError::Forbidden => "You do not have access to this.",
            ViewError::Invalid => "Some fields need another look.",
        }
    }
}

impl From<&AdventureError> for ViewError {
    fn from(err: &AdventureError) -> Self {
        match err {
            AdventureError::NotFound(_) => ViewError::NotFound,
            AdventureError::Locked { .. } => ViewError::Locked,
            _ => ViewError::Unknown,
        }
    }
}

impl From<&ContentServiceError> for ViewError {
    fn from(err: &ContentServiceError) -> Self {
        match err {
            ContentServiceError::NotFound { .. } => ViewError::NotFound,
            ContentServiceError::Forbidden { .. } => ViewError::Forbidden,
            ContentServiceError::Validation(_) => ViewError::Invalid,
            _ => ViewError::Unknown,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(*err),
            None => ViewState::Error(ViewError::Unknown),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quest_core::model::{ActivityId, ZoneId};

    #[test]
    fn locked_maps_to_prerequisite_message() {
        let err = AdventureError::Locked {
            zone: ZoneId::new("5-8"),
            activity: ActivityId::new("robot-dance"),
        };
        assert_eq!(
            ViewError::from(&err).message(),
            "Complete the previous activity first."
        );
    }
}
