//! Octocrab implementation of the issue timeline gateway.

use async_trait::async_trait;
use octocrab::{Octocrab, Page};

use crate::github::error::PollError;
use crate::github::locator::{PersonalAccessToken, RepositoryLocator};
use crate::github::models::ApiTimelineEvent;
use crate::review::models::TimelineEvent;

use super::client::authenticated_client;
use super::error_mapping::poll_error_for;
use super::{PAGE_SIZE, TimelineGateway, validate_page};

/// Octocrab-backed gateway for per-pull-request timeline pages.
pub struct OctocrabTimelineGateway {
    client: Octocrab,
}

impl OctocrabTimelineGateway {
    /// Creates a new gateway from an Octocrab client.
    #[must_use]
    pub const fn new(client: Octocrab) -> Self {
        Self { client }
    }

    /// Builds an authenticated gateway for the given repository.
    ///
    /// # Errors
    ///
    /// Returns `PollError::InvalidUrl` when the locator's API base is not a
    /// usable URI or `PollError::Configuration` when the client cannot be
    /// assembled.
    pub fn for_token(
        token: &PersonalAccessToken,
        locator: &RepositoryLocator,
    ) -> Result<Self, PollError> {
        let client = authenticated_client(token, locator)?;
        Ok(Self::new(client))
    }
}

#[async_trait]
impl TimelineGateway for OctocrabTimelineGateway {
    async fn list_timeline_events(
        &self,
        locator: &RepositoryLocator,
        number: u64,
        page: u32,
    ) -> Result<Vec<TimelineEvent>, PollError> {
        validate_page(page)?;

        let page_str = page.to_string();
        let per_page_str = PAGE_SIZE.to_string();
        let query_params = [
            ("page", page_str.as_str()),
            ("per_page", per_page_str.as_str()),
        ];

        let page_result: Page<ApiTimelineEvent> = self
            .client
            .get(locator.timeline_path(number), Some(&query_params))
            .await
            .map_err(|error| poll_error_for("issue timeline", &error))?;

        Ok(page_result
            .items
            .into_iter()
            .map(ApiTimelineEvent::into)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::OctocrabTimelineGateway;
    use crate::github::error::PollError;
    use crate::github::gateway::TimelineGateway;
    use crate::github::locator::{PersonalAccessToken, RepositoryLocator};

    fn gateway_against(server: &MockServer) -> (OctocrabTimelineGateway, RepositoryLocator) {
        let locator = RepositoryLocator::parse(&format!("{}/octo/repo", server.uri()))
            .expect("should create repository locator");
        let token = PersonalAccessToken::new("valid-token").expect("token should be valid");
        let gateway =
            OctocrabTimelineGateway::for_token(&token, &locator).expect("should create gateway");
        (gateway, locator)
    }

    #[tokio::test]
    async fn list_timeline_events_parses_assignment_entries() {
        let server = MockServer::start().await;
        let (gateway, locator) = gateway_against(&server);

        let response = ResponseTemplate::new(200).set_body_json(json!([
            {
                "event": "assigned",
                "assignee": { "login": "bob" },
                "created_at": "2023-01-01T00:00:00Z"
            },
            { "event": "labeled", "created_at": "2023-01-02T00:00:00Z" }
        ]));

        Mock::given(method("GET"))
            .and(path("/api/v3/repos/octo/repo/issues/42/timeline"))
            .and(query_param("page", "1"))
            .and(query_param("per_page", "100"))
            .respond_with(response)
            .mount(&server)
            .await;

        let events = gateway
            .list_timeline_events(&locator, 42, 1)
            .await
            .expect("request should succeed");

        assert_eq!(events.len(), 2);
        let first = events.first().expect("should have first event");
        assert_eq!(first.kind, "assigned");
        assert_eq!(first.assignee.as_deref(), Some("bob"));
        assert_eq!(
            first.created_at,
            Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).single()
        );
    }

    #[tokio::test]
    async fn server_failures_abort_with_an_api_error() {
        let server = MockServer::start().await;
        let (gateway, locator) = gateway_against(&server);

        let response =
            ResponseTemplate::new(500).set_body_json(json!({ "message": "Server error" }));
        Mock::given(method("GET"))
            .and(path("/api/v3/repos/octo/repo/issues/42/timeline"))
            .respond_with(response)
            .mount(&server)
            .await;

        let error = gateway
            .list_timeline_events(&locator, 42, 1)
            .await
            .expect_err("request should fail");

        assert!(
            matches!(error, PollError::Api { .. }),
            "expected Api, got {error:?}"
        );
    }
}
