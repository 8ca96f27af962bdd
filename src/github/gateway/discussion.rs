//! Octocrab implementation of the discussion posting gateway.
//!
//! Posting a summary is a three-step GraphQL flow: resolve the notification
//! category by name, resolve the discussion inside it, then add the comment.
//! Each repository is expected to carry a single long-lived discussion in
//! the notification category.

use async_trait::async_trait;
use octocrab::Octocrab;
use serde_json::{Value, json};

use crate::github::error::PollError;
use crate::github::locator::{PersonalAccessToken, RepositoryLocator};

use super::DiscussionGateway;
use super::client::authenticated_client;
use super::error_mapping::poll_error_for;

const DISCUSSION_CATEGORIES_QUERY: &str = "
query($owner: String!, $repository: String!) {
    repository(owner: $owner, name: $repository) {
        discussionCategories(first: 10) {
            nodes {
                id
                name
            }
        }
    }
}";

const DISCUSSIONS_QUERY: &str = "
query($owner: String!, $repository: String!, $category_id: ID!) {
    repository(owner: $owner, name: $repository) {
        discussions(categoryId: $category_id, first: 10) {
            edges {
                node {
                    id
                    title
                }
            }
        }
    }
}";

const ADD_COMMENT_MUTATION: &str = "
mutation($discussion_id: ID!, $comment: String!) {
    addDiscussionComment(input: {discussionId: $discussion_id, body: $comment}) {
        comment {
            id
        }
    }
}";

/// Octocrab-backed gateway for posting the review summary.
pub struct OctocrabDiscussionGateway {
    client: Octocrab,
}

impl OctocrabDiscussionGateway {
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

    async fn execute(&self, operation: &str, payload: &Value) -> Result<Value, PollError> {
        let response: Value = self
            .client
            .graphql(payload)
            .await
            .map_err(|error| poll_error_for(operation, &error))?;

        if let Some(errors) = response.get("errors") {
            return Err(PollError::Api {
                message: format!("{operation} failed: {errors}"),
            });
        }

        Ok(response)
    }

    async fn resolve_category_id(
        &self,
        locator: &RepositoryLocator,
        category: &str,
    ) -> Result<String, PollError> {
        let payload = json!({
            "query": DISCUSSION_CATEGORIES_QUERY,
            "variables": {
                "owner": locator.owner().as_str(),
                "repository": locator.repository().as_str(),
            }
        });
        let response = self.execute("discussion categories", &payload).await?;

        let nodes = response
            .pointer("/data/repository/discussionCategories/nodes")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();

        nodes
            .iter()
            .find_map(|node| {
                let name = node.get("name").and_then(Value::as_str)?;
                if name == category {
                    node.get("id").and_then(Value::as_str).map(ToOwned::to_owned)
                } else {
                    None
                }
            })
            .ok_or_else(|| PollError::Api {
                message: format!("discussion category '{category}' not found"),
            })
    }

    async fn resolve_discussion_id(
        &self,
        locator: &RepositoryLocator,
        category_id: &str,
    ) -> Result<String, PollError> {
        let payload = json!({
            "query": DISCUSSIONS_QUERY,
            "variables": {
                "owner": locator.owner().as_str(),
                "repository": locator.repository().as_str(),
                "category_id": category_id,
            }
        });
        let response = self.execute("discussions", &payload).await?;

        response
            .pointer("/data/repository/discussions/edges/0/node/id")
            .and_then(Value::as_str)
            .map(ToOwned::to_owned)
            .ok_or_else(|| PollError::Api {
                message: "notification category has no discussion to comment on".to_owned(),
            })
    }
}

#[async_trait]
impl DiscussionGateway for OctocrabDiscussionGateway {
    async fn post_review_summary(
        &self,
        locator: &RepositoryLocator,
        category: &str,
        body: &str,
    ) -> Result<(), PollError> {
        let category_id = self.resolve_category_id(locator, category).await?;
        let discussion_id = self.resolve_discussion_id(locator, &category_id).await?;

        let payload = json!({
            "query": ADD_COMMENT_MUTATION,
            "variables": {
                "discussion_id": discussion_id,
                "comment": body,
            }
        });
        self.execute("add discussion comment", &payload).await?;
        Ok(())
    }
}
