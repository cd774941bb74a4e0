use chrono::{DateTime, Utc};
use quest_core::model::{BlogPost, Entity, Event};

use super::markdown_vm::markdown_to_html;
use super::time_fmt::{format_date, format_datetime};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlogPostVm {
    pub id: String,
    pub title: String,
    pub byline: String,
    pub tags: Vec<String>,
    pub body_html: String,
}

/// Posts published by `now`, newest first.
#[must_use]
pub fn map_blog_posts(posts: &[BlogPost], now: DateTime<Utc>) -> Vec<BlogPostVm> {
    let mut published: Vec<&BlogPost> = posts.iter().filter(|p| p.is_published(now)).collect();
    published.sort_by(|a, b| b.published_at().cmp(&a.published_at()));
    published
        .into_iter()
        .map(|post| {
            let date = post.published_at().map(format_date).unwrap_or_default();
            BlogPostVm {
                id: post.id().as_str().to_owned(),
                title: post.title().to_owned(),
                byline: format!("{} · {date}", post.author()),
                tags: post.tags().to_vec(),
                body_html: markdown_to_html(post.body()),
            }
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventItemVm {
    pub id: String,
    pub title: String,
    pub when: String,
    pub location: String,
    pub registration_url: Option<String>,
}

/// Published events that have not finished yet, soonest first.
#[must_use]
pub fn map_events(events: &[Event], now: DateTime<Utc>) -> Vec<EventItemVm> {
    let mut upcoming: Vec<&Event> = events
        .iter()
        .filter(|e| e.is_published() && e.is_upcoming(now))
        .collect();
    upcoming.sort_by_key(|e| e.starts_at());
    upcoming
        .into_iter()
        .map(|event| EventItemVm {
            id: event.id().as_str().to_owned(),
            title: event.title().to_owned(),
            when: format_datetime(event.starts_at()),
            location: event.location().to_owned(),
            registration_url: event.registration_url().map(str::to_owned),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use quest_core::model::{BlogPostDraft, EntityId, EntityMeta, EventDraft};
    use quest_core::time::fixed_now;

    fn post(id: &str, published_at: Option<DateTime<Utc>>) -> BlogPost {
        BlogPost::from_draft(
            BlogPostDraft {
                title: format!("Post {id}"),
                author: "Mentor".into(),
                body: "Hello *world*".into(),
                published_at,
                ..BlogPostDraft::default()
            },
            EntityMeta::created(EntityId::new(id), fixed_now()),
        )
        .unwrap()
    }

    fn event(id: &str, starts_in_days: i64, published: bool) -> Event {
        Event::from_draft(
            EventDraft {
                title: format!("Event {id}"),
                description: String::new(),
                location: "Lab".into(),
                starts_at: fixed_now() + Duration::days(starts_in_days),
                ends_at: None,
                registration_url: None,
                published,
            },
            EntityMeta::created(EntityId::new(id), fixed_now()),
        )
        .unwrap()
    }

    #[test]
    fn drafts_and_scheduled_posts_are_hidden() {
        let now = fixed_now();
        let posts = vec![
            post("old", Some(now - Duration::days(3))),
            post("draft", None),
            post("future", Some(now + Duration::days(1))),
            post("new", Some(now - Duration::days(1))),
        ];
        let vms = map_blog_posts(&posts, now);
        let ids: Vec<&str> = vms.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["new", "old"]);
        assert!(vms[0].body_html.contains("<em>world</em>"));
    }

    #[test]
    fn only_published_upcoming_events_are_listed() {
        let now = fixed_now();
        let events = vec![
            event("later", 10, true),
            event("past", -10, true),
            event("hidden", 2, false),
            event("soon", 2, true),
        ];
        let ids: Vec<String> = map_events(&events, now).into_iter().map(|e| e.id).collect();
        assert_eq!(ids, vec!["soon", "later"]);
    }
}
