//! Construction of the authenticated Octocrab client.

use http::Uri;
use octocrab::Octocrab;

use crate::github::error::PollError;
use crate::github::locator::{PersonalAccessToken, RepositoryLocator};

/// Builds an Octocrab client bound to the locator's API base.
///
/// Every gateway funnels through here, so each request in a polling run
/// carries the same validated credential against the same host.
///
/// # Errors
///
/// Returns `PollError::InvalidUrl` when the locator's API base is not a
/// usable URI, or `PollError::Configuration` when the client itself cannot
/// be assembled. Both happen before any request is issued.
pub(super) fn authenticated_client(
    token: &PersonalAccessToken,
    locator: &RepositoryLocator,
) -> Result<Octocrab, PollError> {
    let api_base = locator.api_base().as_str();
    let base_uri = api_base.parse::<Uri>().map_err(|error| {
        PollError::InvalidUrl(format!("cannot use '{api_base}' as an API base: {error}"))
    })?;

    let builder = Octocrab::builder()
        .personal_token(token.value())
        .base_uri(base_uri)
        .map_err(|error| PollError::Configuration {
            message: format!("cannot configure the GitHub client: {error}"),
        })?;

    builder.build().map_err(|error| PollError::Configuration {
        message: format!("cannot build the GitHub client: {error}"),
    })
}
