//! Pester library crate: GitHub review-wait polling and notification.
//!
//! The library pages through a repository's open pull requests and their
//! issue timelines, computes how long each assigned reviewer has been
//! waiting, groups the overdue pairs per reviewer, and renders the result
//! into a summary that can be posted back to GitHub as a discussion
//! comment.

pub mod config;
pub mod github;
pub mod notify;
pub mod review;

pub use config::PesterConfig;
pub use github::{
    DiscussionGateway, OctocrabDiscussionGateway, OctocrabRepositoryGateway,
    OctocrabTimelineGateway, PersonalAccessToken, PollError, RepositoryGateway, RepositoryLocator,
    TimelineGateway,
};
pub use review::{OverdueReviews, ReviewWaitAggregator};
