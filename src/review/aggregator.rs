//! Orchestrates the review-wait computation across paginated sources.
//!
//! A single sequential pass: page through the open pull request listing,
//! reconcile each page's timelines immediately, then group reviewers whose
//! wait meets the threshold. Nothing is persisted between runs; a gateway
//! failure aborts the pass and discards whatever was accumulated.

use chrono::{DateTime, Duration, Utc};

use crate::github::error::PollError;
use crate::github::gateway::{RepositoryGateway, TimelineGateway};
use crate::github::locator::RepositoryLocator;
use crate::review::models::{OverdueReviews, PullRequest};
use crate::review::reconcile;

/// Computes which reviewers have been waiting beyond the threshold.
pub struct ReviewWaitAggregator<'gateways, Repo, Timeline>
where
    Repo: RepositoryGateway,
    Timeline: TimelineGateway,
{
    repository: &'gateways Repo,
    timeline: &'gateways Timeline,
    wait_hours: u32,
}

impl<'gateways, Repo, Timeline> ReviewWaitAggregator<'gateways, Repo, Timeline>
where
    Repo: RepositoryGateway,
    Timeline: TimelineGateway,
{
    /// Creates an aggregator over the given gateways and wait threshold.
    #[must_use]
    pub const fn new(
        repository: &'gateways Repo,
        timeline: &'gateways Timeline,
        wait_hours: u32,
    ) -> Self {
        Self {
            repository,
            timeline,
            wait_hours,
        }
    }

    /// Runs one polling pass and returns the overdue mapping.
    ///
    /// `now` is supplied by the caller so the threshold decision can be
    /// exercised against a fixed instant. The comparison is inclusive: a
    /// wait exactly equal to the threshold counts as overdue.
    ///
    /// # Errors
    ///
    /// Propagates the first gateway failure unrecovered; no partial mapping
    /// is returned.
    pub async fn collect_overdue(
        &self,
        locator: &RepositoryLocator,
        now: DateTime<Utc>,
    ) -> Result<OverdueReviews, PollError> {
        let threshold = Duration::hours(i64::from(self.wait_hours));
        let mut overdue = OverdueReviews::new();

        let mut page = 1_u32;
        loop {
            tracing::info!(page, "fetching pull requests");
            let mut pull_requests = self.repository.list_open_pull_requests(locator, page).await?;
            if pull_requests.is_empty() {
                break;
            }

            for pull_request in &mut pull_requests {
                self.reconcile_timeline(locator, pull_request).await?;
            }

            for pull_request in &pull_requests {
                collect_overdue_reviewers(pull_request, now, threshold, &mut overdue);
            }

            page += 1;
        }

        Ok(overdue)
    }

    async fn reconcile_timeline(
        &self,
        locator: &RepositoryLocator,
        pull_request: &mut PullRequest,
    ) -> Result<(), PollError> {
        let mut page = 1_u32;
        loop {
            tracing::info!(
                number = pull_request.number(),
                page,
                "fetching pull request timeline"
            );
            let events = self
                .timeline
                .list_timeline_events(locator, pull_request.number(), page)
                .await?;
            if events.is_empty() {
                break;
            }
            reconcile::apply_timeline(pull_request, &events);
            page += 1;
        }
        Ok(())
    }
}

/// Appends the pull request to every reviewer whose wait meets the threshold.
fn collect_overdue_reviewers(
    pull_request: &PullRequest,
    now: DateTime<Utc>,
    threshold: Duration,
    overdue: &mut OverdueReviews,
) {
    if !pull_request.has_reviewer_assigned() {
        return;
    }

    for assignee in pull_request.assignees() {
        if assignee.name == pull_request.author() {
            continue;
        }
        if now - assignee.assigned_at() >= threshold {
            overdue
                .entry(assignee.name.clone())
                .or_default()
                .push(pull_request.clone());
        }
    }
}
