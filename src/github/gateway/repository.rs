//! Octocrab implementation of the pull request listing gateway.

use async_trait::async_trait;
use octocrab::{Octocrab, Page};

use crate::github::error::PollError;
use crate::github::locator::{PersonalAccessToken, RepositoryLocator};
use crate::github::models::ApiPullRequest;
use crate::review::models::PullRequest;

use super::client::authenticated_client;
use super::error_mapping::poll_error_for;
use super::{PAGE_SIZE, RepositoryGateway, validate_page};

/// Octocrab-backed gateway for the open pull request listing.
pub struct OctocrabRepositoryGateway {
    client: Octocrab,
}

impl OctocrabRepositoryGateway {
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
impl RepositoryGateway for OctocrabRepositoryGateway {
    async fn list_open_pull_requests(
        &self,
        locator: &RepositoryLocator,
        page: u32,
    ) -> Result<Vec<PullRequest>, PollError> {
        validate_page(page)?;

        let page_str = page.to_string();
        let per_page_str = PAGE_SIZE.to_string();
        let query_params = [
            ("state", "open"),
            ("page", page_str.as_str()),
            ("per_page", per_page_str.as_str()),
        ];

        let page_result: Page<ApiPullRequest> = self
            .client
            .get(locator.pulls_path(), Some(&query_params))
            .await
            .map_err(|error| poll_error_for("list pulls", &error))?;

        Ok(page_result
            .items
            .into_iter()
            .map(ApiPullRequest::into)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::OctocrabRepositoryGateway;
    use crate::github::error::PollError;
    use crate::github::gateway::RepositoryGateway;
    use crate::github::locator::{PersonalAccessToken, RepositoryLocator};

    fn gateway_against(server: &MockServer) -> (OctocrabRepositoryGateway, RepositoryLocator) {
        let locator = RepositoryLocator::parse(&format!("{}/octo/repo", server.uri()))
            .expect("should create repository locator");
        let token = PersonalAccessToken::new("valid-token").expect("token should be valid");
        let gateway =
            OctocrabRepositoryGateway::for_token(&token, &locator).expect("should create gateway");
        (gateway, locator)
    }

    #[tokio::test]
    async fn list_open_pull_requests_parses_entities_from_the_page() {
        let server = MockServer::start().await;
        let (gateway, locator) = gateway_against(&server);

        let response = ResponseTemplate::new(200).set_body_json(json!([{
            "number": 42,
            "title": "Add pagination",
            "state": "open",
            "html_url": "https://github.com/octo/repo/pull/42",
            "user": { "login": "alice" },
            "assignees": [{ "login": "bob" }]
        }]));

        Mock::given(method("GET"))
            .and(path("/api/v3/repos/octo/repo/pulls"))
            .and(query_param("state", "open"))
            .and(query_param("page", "1"))
            .and(query_param("per_page", "100"))
            .respond_with(response)
            .mount(&server)
            .await;

        let pull_requests = gateway
            .list_open_pull_requests(&locator, 1)
            .await
            .expect("request should succeed");

        assert_eq!(pull_requests.len(), 1);
        let first = pull_requests.first().expect("should have first item");
        assert_eq!(first.number(), 42);
        assert_eq!(first.author(), "alice");
        assert_eq!(first.assignees().len(), 1);
    }

    #[tokio::test]
    async fn an_empty_page_yields_an_empty_listing() {
        let server = MockServer::start().await;
        let (gateway, locator) = gateway_against(&server);

        Mock::given(method("GET"))
            .and(path("/api/v3/repos/octo/repo/pulls"))
            .and(query_param("page", "3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let pull_requests = gateway
            .list_open_pull_requests(&locator, 3)
            .await
            .expect("request should succeed");

        assert!(pull_requests.is_empty());
    }

    #[tokio::test]
    async fn rejected_credentials_map_to_an_authentication_error() {
        let server = MockServer::start().await;
        let (gateway, locator) = gateway_against(&server);

        let response =
            ResponseTemplate::new(401).set_body_json(json!({ "message": "Bad credentials" }));
        Mock::given(method("GET"))
            .and(path("/api/v3/repos/octo/repo/pulls"))
            .respond_with(response)
            .mount(&server)
            .await;

        let error = gateway
            .list_open_pull_requests(&locator, 1)
            .await
            .expect_err("request should fail");

        assert!(
            matches!(error, PollError::Authentication { .. }),
            "expected Authentication, got {error:?}"
        );
    }

    #[tokio::test]
    async fn page_zero_is_rejected_before_any_request() {
        let locator =
            RepositoryLocator::from_owner_repo("octo", "repo").expect("should create locator");
        let token = PersonalAccessToken::new("valid-token").expect("token should be valid");
        let gateway =
            OctocrabRepositoryGateway::for_token(&token, &locator).expect("should create gateway");

        let error = gateway
            .list_open_pull_requests(&locator, 0)
            .await
            .expect_err("page zero should fail");

        assert!(
            matches!(error, PollError::InvalidPagination { .. }),
            "expected InvalidPagination, got {error:?}"
        );
    }
}
