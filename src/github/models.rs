//! Deserialisation targets for GitHub REST payloads.
//!
//! The `Api` types mirror the wire shape of the pull request listing and
//! issue timeline endpoints and convert into the `review` domain entities.
//! Malformed timestamps are dropped during conversion rather than failing
//! the run; the reconciler treats them as unusable events.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::review::models::{PullRequest, TimelineEvent};

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiUser {
    pub(super) login: Option<String>,
}

/// Wire shape of one entry in the pull request listing.
#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiPullRequest {
    pub(super) number: u64,
    pub(super) title: Option<String>,
    pub(super) html_url: Option<String>,
    pub(super) user: Option<ApiUser>,
    #[serde(default)]
    pub(super) assignees: Vec<ApiUser>,
}

/// Wire shape of one issue timeline entry.
///
/// The timeline mixes many record kinds; only `assigned` entries carry an
/// `assignee` and are acted upon downstream.
#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiTimelineEvent {
    pub(super) event: Option<String>,
    pub(super) assignee: Option<ApiUser>,
    pub(super) created_at: Option<String>,
}

fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|instant| instant.with_timezone(&Utc))
}

impl From<ApiPullRequest> for PullRequest {
    fn from(value: ApiPullRequest) -> Self {
        let assignee_logins = value.assignees.into_iter().filter_map(|user| user.login);
        Self::new(
            value.html_url.unwrap_or_default(),
            value.number,
            value.user.and_then(|user| user.login).unwrap_or_default(),
            value.title.unwrap_or_default(),
            assignee_logins,
        )
    }
}

impl From<ApiTimelineEvent> for TimelineEvent {
    fn from(value: ApiTimelineEvent) -> Self {
        Self {
            kind: value.event.unwrap_or_default(),
            assignee: value.assignee.and_then(|user| user.login),
            created_at: value.created_at.as_deref().and_then(parse_instant),
        }
    }
}
