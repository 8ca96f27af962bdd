//! Renders the overdue mapping into a notification body.
//!
//! The body is Markdown suitable for a GitHub discussion comment: one
//! section per reviewer listing each overdue pull request with its
//! waiting-time label. Reviewers are sorted so repeated runs over the same
//! state produce identical bodies.

use chrono::{DateTime, Utc};

use crate::review::models::OverdueReviews;

/// Renders the overdue mapping as a Markdown summary.
///
/// Returns an empty string when no reviewer is overdue.
#[must_use]
pub fn render_summary(overdue: &OverdueReviews, now: DateTime<Utc>) -> String {
    let mut reviewers: Vec<&String> = overdue.keys().collect();
    reviewers.sort();

    let mut sections = Vec::new();
    for reviewer in reviewers {
        let Some(pull_requests) = overdue.get(reviewer) else {
            continue;
        };

        let mut lines = vec![format!(
            "@{reviewer}, these pull requests are waiting on your review:"
        )];
        for pull_request in pull_requests {
            let waiting = pull_request
                .assignees()
                .iter()
                .find(|assignee| assignee.name == **reviewer)
                .map(|assignee| assignee.waiting_time_label(now))
                .unwrap_or_default();

            let entry = format!(
                "- [#{number} {title}]({url})",
                number = pull_request.number(),
                title = pull_request.title(),
                url = pull_request.url()
            );
            if waiting.is_empty() {
                lines.push(entry);
            } else {
                lines.push(format!("{entry} (waiting {waiting})"));
            }
        }
        sections.push(lines.join("\n"));
    }

    sections.join("\n\n")
}
