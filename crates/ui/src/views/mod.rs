mod admin;
mod adventure;
mod badges;
mod blog;
mod home;
mod state;
mod zone;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use admin::AdminView;
pub use adventure::AdventureView;
pub use badges::BadgesView;
pub use blog::BlogView;
pub use home::HomeView;
pub use state::{ViewError, ViewState, view_state_from_resource};
pub use zone::ZoneView;
