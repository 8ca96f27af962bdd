//! Domain entities for the review-wait computation.
//!
//! These types are built fresh for every polling run from the GitHub API
//! responses and discarded once the overdue mapping has been handed to the
//! notification layer. Nothing here performs I/O.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

/// Placeholder instant recorded before any assignment event is observed.
///
/// Using the minimum representable UTC instant keeps every wait-time
/// computation well-defined: an assignee that never appears in the timeline
/// simply looks like they have been waiting since the beginning of time.
pub const NEVER_ASSIGNED: DateTime<Utc> = DateTime::<Utc>::MIN_UTC;

/// Reviewer login mapped to the pull requests overdue for their review.
///
/// Each reviewer's list follows pull request discovery order.
pub type OverdueReviews = HashMap<String, Vec<PullRequest>>;

/// A reviewer assigned to a pull request.
///
/// The assignment timestamp only ever advances: replaying assignment events
/// in any order converges on the latest qualifying event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignee {
    /// Reviewer login, unique within a pull request's assignee list.
    pub name: String,
    assigned_at: DateTime<Utc>,
}

impl Assignee {
    /// Creates an assignee that has not yet been observed in the timeline.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            assigned_at: NEVER_ASSIGNED,
        }
    }

    /// The instant of the latest observed assignment event.
    #[must_use]
    pub const fn assigned_at(&self) -> DateTime<Utc> {
        self.assigned_at
    }

    /// Advances the assignment timestamp to `at` if it is later than the
    /// currently stored value.
    pub fn record_assignment(&mut self, at: DateTime<Utc>) {
        self.assigned_at = self.assigned_at.max(at);
    }

    /// Renders the elapsed wait as a human-readable label.
    ///
    /// Combines the non-zero day and hour components, e.g. `2 days, 3 hours`
    /// or `1 hour`. Waits under one hour render as an empty string. This is a
    /// display helper only; overdue decisions compare raw durations.
    #[must_use]
    pub fn waiting_time_label(&self, now: DateTime<Utc>) -> String {
        let elapsed = now - self.assigned_at;
        let days = elapsed.num_days();
        let hours = elapsed.num_hours() - days * 24;

        let mut parts = Vec::new();
        if days > 0 {
            let suffix = if days > 1 { "s" } else { "" };
            parts.push(format!("{days} day{suffix}"));
        }
        if hours > 0 {
            let suffix = if hours > 1 { "s" } else { "" };
            parts.push(format!("{hours} hour{suffix}"));
        }

        parts.join(", ")
    }
}

/// An open pull request with its current assignees.
///
/// Identity fields are immutable after construction; only the assignees'
/// timestamps change, and only through [`Assignee::record_assignment`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequest {
    url: String,
    number: u64,
    author: String,
    title: String,
    assignees: Vec<Assignee>,
}

impl PullRequest {
    /// Creates a pull request with one unobserved [`Assignee`] per login.
    ///
    /// Duplicate logins keep their first occurrence so the assignee list
    /// stays unique by name.
    pub fn new(
        url: impl Into<String>,
        number: u64,
        author: impl Into<String>,
        title: impl Into<String>,
        assignee_logins: impl IntoIterator<Item = String>,
    ) -> Self {
        let mut assignees: Vec<Assignee> = Vec::new();
        for login in assignee_logins {
            if !assignees.iter().any(|existing| existing.name == login) {
                assignees.push(Assignee::new(login));
            }
        }

        Self {
            url: url.into(),
            number,
            author: author.into(),
            title: title.into(),
            assignees,
        }
    }

    /// Browser URL of the pull request.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Pull request number.
    #[must_use]
    pub const fn number(&self) -> u64 {
        self.number
    }

    /// Login of the pull request author.
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Title of the pull request.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Current assignees in listing order.
    #[must_use]
    pub fn assignees(&self) -> &[Assignee] {
        &self.assignees
    }

    /// Whether a reviewer other than the author is assigned.
    ///
    /// Returns `false` only when the sole assignee is the author assigning
    /// themselves; any other configuration, including no assignees at all,
    /// counts as assigned.
    #[must_use]
    pub fn has_reviewer_assigned(&self) -> bool {
        !(self.assignees.len() == 1
            && self
                .assignees
                .first()
                .is_some_and(|only| only.name == self.author))
    }

    /// Looks up an assignee by login.
    pub fn assignee_mut(&mut self, login: &str) -> Option<&mut Assignee> {
        self.assignees
            .iter_mut()
            .find(|assignee| assignee.name == login)
    }
}

/// A platform-emitted record of an action taken on a pull request.
///
/// Only `assigned` events carry semantics for the wait computation; other
/// kinds are retained so callers can observe what the timeline returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineEvent {
    /// Event kind string as reported by the API (e.g. `assigned`).
    pub kind: String,
    /// Login of the affected assignee for assignment events.
    pub assignee: Option<String>,
    /// When the event occurred; `None` when the payload omitted or
    /// malformed the timestamp.
    pub created_at: Option<DateTime<Utc>>,
}

#[cfg(feature = "test-support")]
pub mod test_support;

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};
    use rstest::rstest;

    use super::{Assignee, NEVER_ASSIGNED, PullRequest};

    fn utc(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, hour, 0, 0)
            .single()
            .expect("timestamp should be valid")
    }

    #[test]
    fn new_assignee_starts_at_the_minimum_instant() {
        let assignee = Assignee::new("bob");
        assert_eq!(assignee.assigned_at(), NEVER_ASSIGNED);
    }

    #[rstest]
    #[case::ascending(&[1, 2, 3])]
    #[case::descending(&[3, 2, 1])]
    #[case::interleaved(&[2, 3, 1])]
    fn record_assignment_converges_on_the_maximum(#[case] days: &[u32]) {
        let mut assignee = Assignee::new("bob");
        for day in days {
            assignee.record_assignment(utc(2023, 1, *day, 0));
        }
        assert_eq!(assignee.assigned_at(), utc(2023, 1, 3, 0));
    }

    #[test]
    fn record_assignment_never_rolls_back() {
        let mut assignee = Assignee::new("bob");
        assignee.record_assignment(utc(2023, 6, 1, 0));
        assignee.record_assignment(utc(2023, 1, 1, 0));
        assert_eq!(assignee.assigned_at(), utc(2023, 6, 1, 0));
    }

    #[rstest]
    #[case::days_and_hours(utc(2023, 1, 3, 3), "2 days, 3 hours")]
    #[case::single_hour(utc(2023, 1, 1, 1), "1 hour")]
    #[case::single_day(utc(2023, 1, 2, 0), "1 day")]
    #[case::under_one_hour(utc(2023, 1, 1, 0), "")]
    fn waiting_time_label_combines_nonzero_components(
        #[case] now: DateTime<Utc>,
        #[case] expected: &str,
    ) {
        let mut assignee = Assignee::new("bob");
        assignee.record_assignment(utc(2023, 1, 1, 0));
        assert_eq!(assignee.waiting_time_label(now), expected);
    }

    fn pull_request(author: &str, assignees: &[&str]) -> PullRequest {
        PullRequest::new(
            "https://github.com/octo/repo/pull/1",
            1,
            author,
            "Example",
            assignees.iter().map(|login| (*login).to_owned()),
        )
    }

    #[rstest]
    #[case::self_assignment_only("carol", &["carol"], false)]
    #[case::no_assignees("carol", &[], true)]
    #[case::single_non_author("alice", &["bob"], true)]
    #[case::author_among_others("alice", &["alice", "bob"], true)]
    fn has_reviewer_assigned_excludes_only_the_lone_author(
        #[case] author: &str,
        #[case] assignees: &[&str],
        #[case] expected: bool,
    ) {
        assert_eq!(pull_request(author, assignees).has_reviewer_assigned(), expected);
    }

    #[test]
    fn duplicate_assignee_logins_collapse_to_one_entry() {
        let pr = pull_request("alice", &["bob", "bob"]);
        assert_eq!(pr.assignees().len(), 1);
    }

    #[test]
    fn assignee_mut_finds_by_login() {
        let mut pr = pull_request("alice", &["bob", "dave"]);
        assert!(pr.assignee_mut("dave").is_some());
        assert!(pr.assignee_mut("mallory").is_none());
    }
}
