//! Gateways for polling GitHub and posting notifications.
//!
//! This module provides trait-based gateways for communicating with the
//! GitHub API. The trait-based design enables mocking in tests while the
//! Octocrab implementations handle real HTTP requests.

mod client;
mod discussion;
mod error_mapping;
mod repository;
mod timeline;

pub use discussion::OctocrabDiscussionGateway;
pub use repository::OctocrabRepositoryGateway;
pub use timeline::OctocrabTimelineGateway;

use async_trait::async_trait;

use crate::github::error::PollError;
use crate::github::locator::RepositoryLocator;
use crate::review::models::{PullRequest, TimelineEvent};

/// Items requested per page from both paginated endpoints.
pub(super) const PAGE_SIZE: u8 = 100;

/// Gateway that lists a repository's open pull requests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RepositoryGateway: Send + Sync {
    /// Fetches one page of open pull requests.
    ///
    /// An empty page marks the end of the listing.
    async fn list_open_pull_requests(
        &self,
        locator: &RepositoryLocator,
        page: u32,
    ) -> Result<Vec<PullRequest>, PollError>;
}

/// Gateway that reads a pull request's issue timeline.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TimelineGateway: Send + Sync {
    /// Fetches one page of timeline events for the pull request.
    ///
    /// An empty page marks the end of the timeline.
    async fn list_timeline_events(
        &self,
        locator: &RepositoryLocator,
        number: u64,
        page: u32,
    ) -> Result<Vec<TimelineEvent>, PollError>;
}

/// Gateway that delivers the review summary as a discussion comment.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DiscussionGateway: Send + Sync {
    /// Posts `body` as a comment on the repository's notification discussion.
    async fn post_review_summary(
        &self,
        locator: &RepositoryLocator,
        category: &str,
        body: &str,
    ) -> Result<(), PollError>;
}

/// Validates a 1-based page number before issuing a request.
pub(super) fn validate_page(page: u32) -> Result<(), PollError> {
    if page == 0 {
        return Err(PollError::InvalidPagination {
            message: "page must be at least 1".to_owned(),
        });
    }
    Ok(())
}
