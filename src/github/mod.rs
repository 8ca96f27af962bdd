//! GitHub-facing layer: identity wrappers, payload models, and gateways.
//!
//! This module wraps Octocrab to page through the pull request listing and
//! per-pull-request issue timelines, and to post summary notifications as
//! discussion comments over GraphQL. Errors are mapped into [`PollError`]
//! variants so that callers can surface precise failures without exposing
//! Octocrab internals.

pub mod error;
pub mod gateway;
pub mod locator;
mod models;

pub use error::PollError;
pub use gateway::{
    DiscussionGateway, OctocrabDiscussionGateway, OctocrabRepositoryGateway,
    OctocrabTimelineGateway, RepositoryGateway, TimelineGateway,
};
pub use locator::{PersonalAccessToken, RepositoryLocator, RepositoryName, RepositoryOwner};
