//! Classification of Octocrab failures into the polling error taxonomy.

use http::StatusCode;

use crate::github::error::PollError;

/// Maps an Octocrab failure for the given operation onto a [`PollError`].
///
/// Credential rejections (401/403) surface as authentication errors so a
/// bad token reads differently from GitHub misbehaving; transport failures
/// surface as network errors; everything else is an API error. All of them
/// are fatal to the polling run.
pub(super) fn poll_error_for(operation: &str, error: &octocrab::Error) -> PollError {
    match error {
        octocrab::Error::GitHub { source, .. } => {
            let message = format!(
                "{operation}: GitHub answered {status}: {detail}",
                status = source.status_code,
                detail = source.message
            );
            if matches!(
                source.status_code,
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN
            ) {
                PollError::Authentication { message }
            } else {
                PollError::Api { message }
            }
        }
        octocrab::Error::Http { .. }
        | octocrab::Error::Hyper { .. }
        | octocrab::Error::Service { .. } => PollError::Network {
            message: format!("{operation}: {error}"),
        },
        _ => PollError::Api {
            message: format!("{operation}: {error}"),
        },
    }
}
