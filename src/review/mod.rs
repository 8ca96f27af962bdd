//! Review-wait computation engine.
//!
//! Reconciles the open pull request listing with per-pull-request timeline
//! events to determine, per reviewer, how long a review has been outstanding
//! and which (reviewer, pull request) pairs are overdue.

pub mod aggregator;
pub mod models;
pub mod reconcile;

pub use aggregator::ReviewWaitAggregator;
pub use models::{Assignee, NEVER_ASSIGNED, OverdueReviews, PullRequest, TimelineEvent};
