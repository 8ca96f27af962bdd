//! Unit tests for configuration resolution.

use super::PesterConfig;
use crate::github::error::PollError;

#[test]
fn defaults_cover_threshold_and_category() {
    let config = PesterConfig::default();
    assert_eq!(config.wait_hours, 24);
    assert_eq!(config.category, "Reviewer notifications");
    assert!(!config.post);
}

#[test]
fn resolve_token_prefers_the_configured_value() {
    let _guard = env_lock::lock_env([("GITHUB_TOKEN", Some("legacy-token"))]);
    let config = PesterConfig {
        token: Some("configured-token".to_owned()),
        ..PesterConfig::default()
    };

    let token = config.resolve_token().expect("token should resolve");
    assert_eq!(token, "configured-token");
}

#[test]
fn resolve_token_falls_back_to_the_legacy_environment_variable() {
    let _guard = env_lock::lock_env([("GITHUB_TOKEN", Some("legacy-token"))]);
    let config = PesterConfig::default();

    let token = config.resolve_token().expect("token should resolve");
    assert_eq!(token, "legacy-token");
}

#[test]
fn resolve_token_fails_when_no_source_provides_a_value() {
    let _guard = env_lock::lock_env([("GITHUB_TOKEN", None::<&str>)]);
    let config = PesterConfig::default();

    let error = config.resolve_token().expect_err("token should be missing");
    assert_eq!(error, PollError::MissingToken);
}

#[test]
fn require_repository_info_returns_both_names() {
    let config = PesterConfig {
        owner: Some("octo".to_owned()),
        repo: Some("repo".to_owned()),
        ..PesterConfig::default()
    };

    let (owner, repo) = config
        .require_repository_info()
        .expect("repository info should resolve");
    assert_eq!(owner, "octo");
    assert_eq!(repo, "repo");
}

#[test]
fn require_repository_info_reports_the_missing_owner_first() {
    let config = PesterConfig {
        repo: Some("repo".to_owned()),
        ..PesterConfig::default()
    };

    let error = config
        .require_repository_info()
        .expect_err("owner should be missing");
    assert!(
        matches!(error, PollError::Configuration { ref message } if message.contains("owner")),
        "expected owner configuration error, got {error:?}"
    );
}

#[test]
fn require_repository_info_reports_a_missing_repository() {
    let config = PesterConfig {
        owner: Some("octo".to_owned()),
        ..PesterConfig::default()
    };

    let error = config
        .require_repository_info()
        .expect_err("repo should be missing");
    assert!(
        matches!(error, PollError::Configuration { ref message } if message.contains("name")),
        "expected repository configuration error, got {error:?}"
    );
}
