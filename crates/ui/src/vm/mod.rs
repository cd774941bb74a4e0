mod admin_vm;
mod adventure_vm;
mod badge_vm;
mod blog_vm;
mod markdown_vm;
mod time_fmt;

pub use admin_vm::{AdminRowVm, AdminSectionVm, map_admin_section};
pub use adventure_vm::{
    ActivityRowVm, ProgressSummaryVm, ZoneCardVm, map_activity_rows, map_progress_summary,
    map_zone_cards,
};
pub use badge_vm::{BadgeTileVm, map_badges};
pub use blog_vm::{BlogPostVm, EventItemVm, map_blog_posts, map_events};
pub use markdown_vm::{markdown_to_html, sanitize_html};
pub use time_fmt::{format_date, format_datetime};
