use chrono::Duration;
use quest_core::model::{
    ActivityId, BlogPostDraft, EventDraft, Identity, Role, TeamMemberDraft, ZoneId,
};
use quest_core::time::fixed_now;

use super::test_harness::{ViewKind, setup_view_harness};

fn admin() -> Identity {
    Identity::new("root", Role::Admin)
}

fn editor() -> Identity {
    Identity::new("sam", Role::Editor)
}

#[tokio::test(flavor = "current_thread")]
async fn adventure_view_smoke_renders_every_zone() {
    let mut harness = setup_view_harness(ViewKind::Adventure, Identity::anonymous()).await;

    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    for title in ["Little Coders", "Young Builders", "Future Innovators"] {
        assert!(html.contains(title), "missing {title} in {html}");
    }
    assert!(html.contains("0 / 150 XP"), "missing xp label in {html}");
    assert!(html.contains("Reset progress"), "missing reset button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn zone_view_smoke_renders_activity_states() {
    let mut harness = setup_view_harness(ViewKind::Zone("5-8"), Identity::anonymous()).await;

    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("ScratchJr Stories"), "missing activity in {html}");
    assert!(html.contains("Ready"), "missing ready state in {html}");
    assert!(html.contains("Locked"), "missing locked state in {html}");
    assert!(!html.contains("Completed"), "unexpected completion in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn zone_view_smoke_shows_completed_activity() {
    let mut harness = setup_view_harness(ViewKind::Zone("5-8"), Identity::anonymous()).await;
    harness
        .services
        .adventure()
        .complete_activity(&ZoneId::new("5-8"), &ActivityId::new("scratch-jr"))
        .await
        .expect("complete activity");

    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Completed"), "missing completed state in {html}");
    assert!(html.contains("50 / 150 XP"), "missing zone xp in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn zone_view_smoke_reports_unknown_zone() {
    let mut harness = setup_view_harness(ViewKind::Zone("99"), Identity::anonymous()).await;

    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("find that"), "missing not found message in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn badges_view_smoke_marks_unlocked_badge() {
    let mut harness = setup_view_harness(ViewKind::Badges, Identity::anonymous()).await;
    harness
        .services
        .adventure()
        .complete_activity(&ZoneId::new("5-8"), &ActivityId::new("scratch-jr"))
        .await
        .expect("complete activity");

    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("First Steps"), "missing badge in {html}");
    assert!(html.contains("Earned · Unlocked"), "missing unlocked badge in {html}");
    assert!(html.contains("Awarded · Locked"), "missing locked badge in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_stats_and_events() {
    let mut harness = setup_view_harness(ViewKind::Home, Identity::anonymous()).await;
    harness
        .services
        .content()
        .events
        .create(
            &editor(),
            EventDraft {
                title: "Summer Code Camp".into(),
                description: "A week of games and robots.".into(),
                location: "Community Lab".into(),
                starts_at: fixed_now() + Duration::days(7),
                ends_at: None,
                registration_url: None,
                published: true,
            },
        )
        .await
        .expect("create event");

    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Total XP"), "missing stats in {html}");
    assert!(html.contains("Summer Code Camp"), "missing event in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn blog_view_smoke_renders_markdown() {
    let mut harness = setup_view_harness(ViewKind::Blog, Identity::anonymous()).await;
    harness
        .services
        .content()
        .blog_posts
        .create(
            &editor(),
            BlogPostDraft {
                title: "Robots at the library".into(),
                author: "Mentor Jo".into(),
                body: "We built **line followers**.<script>alert(1)</script>".into(),
                published_at: Some(fixed_now() - Duration::days(1)),
                ..BlogPostDraft::default()
            },
        )
        .await
        .expect("create post");

    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Robots at the library"), "missing post in {html}");
    assert!(html.contains("<strong>line followers</strong>"), "missing markdown in {html}");
    assert!(!html.contains("<script>"), "unsanitized html in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn admin_view_smoke_blocks_viewers() {
    let mut harness = setup_view_harness(ViewKind::Admin, Identity::anonymous()).await;

    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("You do not have access to this."), "missing forbidden in {html}");
    assert!(!html.contains("Team"), "sections leaked in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn admin_view_smoke_lists_sections_for_editors() {
    let mut harness = setup_view_harness(ViewKind::Admin, editor()).await;
    harness
        .services
        .content()
        .team
        .create(
            &admin(),
            TeamMemberDraft {
                name: "Priya".into(),
                position: "Lead mentor".into(),
                ..TeamMemberDraft::default()
            },
        )
        .await
        .expect("create team member");

    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Priya"), "missing team member in {html}");
    assert!(html.contains("Delete"), "missing delete action in {html}");
    assert!(html.contains("Nothing here yet."), "missing empty section in {html}");
}
