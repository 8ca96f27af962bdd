//! Folds timeline events into pull request assignee timestamps.
//!
//! The GitHub issue timeline arrives in no guaranteed order and may mention
//! logins that are no longer assigned. Reconciliation keeps only the latest
//! `assigned` event per current assignee and ignores everything else, so
//! replaying the same events any number of times yields the same result.

use crate::review::models::{PullRequest, TimelineEvent};

/// Event kind that updates assignment timestamps.
const ASSIGNED_EVENT: &str = "assigned";

/// Applies a batch of timeline events to the pull request's assignees.
///
/// Only `assigned` events with a login and a parseable timestamp qualify.
/// Events naming logins absent from the current assignee list are skipped;
/// the assignee may have been removed or reassigned since the event fired.
pub fn apply_timeline(pull_request: &mut PullRequest, events: &[TimelineEvent]) {
    for event in events {
        if event.kind != ASSIGNED_EVENT {
            continue;
        }
        let Some(login) = event.assignee.as_deref() else {
            continue;
        };
        let Some(created_at) = event.created_at else {
            continue;
        };

        if let Some(assignee) = pull_request.assignee_mut(login) {
            assignee.record_assignment(created_at);
        }
    }
}
