//! Test helpers for constructing review-wait fixtures.
//!
//! These builders cut the boilerplate of assembling pull requests and
//! timeline events in tests while keeping the fixtures consistent.

use chrono::{DateTime, Utc};

use super::{PullRequest, TimelineEvent};

/// Constructs an open pull request with the given assignee logins.
///
/// The URL and title are derived from the number.
///
/// # Examples
///
/// ```
/// use pester::review::models::test_support::open_pull_request;
///
/// let pr = open_pull_request(42, "alice", &["bob"]);
/// assert_eq!(pr.number(), 42);
/// assert_eq!(pr.author(), "alice");
/// assert_eq!(pr.assignees().len(), 1);
/// ```
#[must_use]
pub fn open_pull_request(number: u64, author: &str, assignees: &[&str]) -> PullRequest {
    PullRequest::new(
        format!("https://github.com/octo/repo/pull/{number}"),
        number,
        author,
        format!("Pull request {number}"),
        assignees.iter().map(|login| (*login).to_owned()),
    )
}

/// Constructs an `assigned` timeline event for the given login.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use pester::review::models::test_support::assigned_event;
///
/// let at = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).single().expect("valid");
/// let event = assigned_event("bob", at);
/// assert_eq!(event.kind, "assigned");
/// ```
#[must_use]
pub fn assigned_event(login: &str, at: DateTime<Utc>) -> TimelineEvent {
    TimelineEvent {
        kind: "assigned".to_owned(),
        assignee: Some(login.to_owned()),
        created_at: Some(at),
    }
}
