use chrono::Duration;
use quest_core::model::{
    BlogPostDraft, EventDraft, Identity, MediaItemDraft, MediaKind, Role, TeamMemberDraft,
    TestimonialDraft, UserDraft,
};
use services::{Clock, ContentServiceError, ContentServices};
use tracing::info;

/// Insert one sample of each content kind. Skipped when events already exist.
pub async fn seed_content(content: &ContentServices, clock: Clock) -> Result<(), ContentServiceError> {
    if !content.events.list(1).await?.is_empty() {
        info!("content already present; skipping seed");
        return Ok(());
    }

    let admin = Identity::new("seed", Role::Admin);
    let now = clock.now();

    content
        .events
        .create(
            &admin,
            EventDraft {
                title: "Summer Code Camp".into(),
                description: "Five days of games, robots and web pages.".into(),
                location: "Community Tech Lab".into(),
                starts_at: now + Duration::days(14),
                ends_at: Some(now + Duration::days(19)),
                registration_url: Some("https://example.org/camp".into()),
                published: true,
            },
        )
        .await?;

    content
        .blog_posts
        .create(
            &admin,
            BlogPostDraft {
                title: "Our first hackathon".into(),
                author: "CodeQuest Team".into(),
                excerpt: Some("Forty young coders, one weekend.".into()),
                body: "Teams built **games**, *quizzes* and a robot that waters plants.".into(),
                tags: vec!["hackathon".into(), "community".into()],
                published_at: Some(now - Duration::days(2)),
                ..BlogPostDraft::default()
            },
        )
        .await?;

    content
        .media
        .create(
            &admin,
            MediaItemDraft {
                title: "Robot demo day".into(),
                url: "https://example.org/media/robots.jpg".into(),
                kind: MediaKind::Image,
                alt_text: Some("Kids presenting their robots".into()),
            },
        )
        .await?;

    content
        .testimonials
        .create(
            &admin,
            TestimonialDraft {
                author: "Maria".into(),
                relation: Some("Parent".into()),
                quote: "My daughter now builds her own games.".into(),
                rating: 5,
                featured: true,
            },
        )
        .await?;

    content
        .team
        .create(
            &admin,
            TeamMemberDraft {
                name: "Priya Shah".into(),
                position: "Lead mentor".into(),
                bio: Some("Teaches Python and robotics.".into()),
                photo_url: None,
                sort_order: 1,
            },
        )
        .await?;

    content
        .users
        .create(
            &admin,
            UserDraft {
                name: "Site Admin".into(),
                email: "admin@example.org".into(),
                role: Role::Admin,
                active: true,
            },
        )
        .await?;

    info!("seeded sample content");
    Ok(())
}
