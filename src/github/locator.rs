//! Identity wrappers and API path derivation for the polled repository.

use std::fmt;

use url::Url;

use super::error::PollError;

/// Repository owner wrapper to avoid stringly typed parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryOwner(String);

impl RepositoryOwner {
    pub(crate) fn new(value: &str) -> Result<Self, PollError> {
        if value.is_empty() {
            return Err(PollError::Configuration {
                message: "repository owner must not be empty".to_owned(),
            });
        }
        Ok(Self(value.to_owned()))
    }

    /// Borrow the owner value.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Repository name wrapper to prevent parameter mix-ups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryName(String);

impl RepositoryName {
    pub(crate) fn new(value: &str) -> Result<Self, PollError> {
        if value.is_empty() {
            return Err(PollError::Configuration {
                message: "repository name must not be empty".to_owned(),
            });
        }
        Ok(Self(value.to_owned()))
    }

    /// Borrow the repository name.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Personal access token wrapper enforcing presence.
///
/// Gateways can only be constructed from a validated token, so a run that
/// was never given a credential fails before any request is issued.
///
/// The `Debug` output is redacted; the value must never reach log lines or
/// error messages.
#[derive(Clone, PartialEq, Eq)]
pub struct PersonalAccessToken(String);

impl PersonalAccessToken {
    /// Validates and stores a trimmed token.
    ///
    /// # Errors
    ///
    /// Returns `PollError::MissingToken` when the supplied value is empty or
    /// whitespace-only.
    pub fn new(raw: impl Into<String>) -> Result<Self, PollError> {
        let value = raw.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(PollError::MissingToken);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// The token value handed to the HTTP client.
    #[must_use]
    pub fn value(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for PersonalAccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PersonalAccessToken(***)")
    }
}

/// Derives the API base for the host a repository URL points at.
///
/// `github.com` repositories use the public REST host; GitHub Enterprise
/// exposes the REST API under `/api/v3` on the repository's own host, so
/// the parsed URL is reused with its path swapped out.
fn api_base_for(parsed: &Url) -> Result<Url, PollError> {
    let host = parsed
        .host_str()
        .ok_or_else(|| PollError::InvalidUrl("repository URL must include a host".to_owned()))?;

    if host.eq_ignore_ascii_case("github.com") {
        return Url::parse("https://api.github.com")
            .map_err(|error| PollError::InvalidUrl(error.to_string()));
    }

    let mut api_base = parsed.clone();
    api_base.set_path("api/v3");
    api_base.set_query(None);
    api_base.set_fragment(None);
    Ok(api_base)
}

/// Repository identity with its derived API base.
///
/// All REST paths used by the polling run hang off this locator, keyed by the
/// owner and repository names supplied through configuration.
///
/// # Example
///
/// ```
/// use pester::github::locator::RepositoryLocator;
///
/// let locator = RepositoryLocator::parse("https://github.com/octo/repo")
///     .expect("should parse repository URL");
/// assert_eq!(locator.owner().as_str(), "octo");
/// assert_eq!(locator.repository().as_str(), "repo");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryLocator {
    api_base: Url,
    owner: RepositoryOwner,
    repository: RepositoryName,
}

impl RepositoryLocator {
    /// Creates a repository locator from owner and repository name strings.
    ///
    /// Uses `github.com` as the default host.
    ///
    /// # Errors
    ///
    /// Returns `PollError::Configuration` when owner or repo is empty.
    pub fn from_owner_repo(owner: &str, repo: &str) -> Result<Self, PollError> {
        let validated_owner = RepositoryOwner::new(owner)?;
        let repository = RepositoryName::new(repo)?;
        let api_base = Url::parse("https://api.github.com")
            .map_err(|error| PollError::InvalidUrl(error.to_string()))?;

        Ok(Self {
            api_base,
            owner: validated_owner,
            repository,
        })
    }

    /// Parses a GitHub repository URL in the form
    /// `https://github.com/<owner>/<repo>`.
    ///
    /// For GitHub Enterprise hosts, the API base is derived from the host.
    ///
    /// # Errors
    ///
    /// Returns `PollError::InvalidUrl` when parsing fails or
    /// `PollError::Configuration` when the URL path is not `/owner/repo`.
    pub fn parse(input: &str) -> Result<Self, PollError> {
        let parsed = Url::parse(input).map_err(|error| PollError::InvalidUrl(error.to_string()))?;

        let mut segments = parsed.path_segments().ok_or(PollError::Configuration {
            message: "repository URL must contain /owner/repo".to_owned(),
        })?;

        let owner_segment = segments.next().unwrap_or("");
        let repository_segment = segments.next().unwrap_or("");

        let owner = RepositoryOwner::new(owner_segment)?;
        let repository = RepositoryName::new(repository_segment)?;
        let api_base = api_base_for(&parsed)?;

        Ok(Self {
            api_base,
            owner,
            repository,
        })
    }

    /// API base URL derived from the repository host.
    #[must_use]
    pub const fn api_base(&self) -> &Url {
        &self.api_base
    }

    /// Repository owner.
    #[must_use]
    pub const fn owner(&self) -> &RepositoryOwner {
        &self.owner
    }

    /// Repository name.
    #[must_use]
    pub const fn repository(&self) -> &RepositoryName {
        &self.repository
    }

    /// Returns the API path for listing pull requests.
    pub(crate) fn pulls_path(&self) -> String {
        format!(
            "/repos/{}/{}/pulls",
            self.owner.as_str(),
            self.repository.as_str()
        )
    }

    /// Returns the API path for a pull request's issue timeline.
    pub(crate) fn timeline_path(&self, number: u64) -> String {
        format!(
            "/repos/{}/{}/issues/{number}/timeline",
            self.owner.as_str(),
            self.repository.as_str()
        )
    }
}
