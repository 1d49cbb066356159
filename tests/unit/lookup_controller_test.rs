//! Unit tests for the lookup controller's fetch pipeline and view state.

#[path = "../common/mod.rs"]
mod common;

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;

use common::{followers_url, profile_url, repos_url, script_user, ScriptedFetcher, API};
use profile_finder::controller::LookupController;
use profile_finder::types::errors::LookupError;
use profile_finder::types::view::ViewState;

fn controller(fetcher: &Arc<ScriptedFetcher>) -> Arc<LookupController> {
    Arc::new(LookupController::new(fetcher.clone(), API))
}

fn one_repo() -> serde_json::Value {
    json!([{ "id": 1, "name": "hello-world" }])
}

fn one_follower() -> serde_json::Value {
    json!([{ "id": 2, "login": "hubot" }])
}

#[tokio::test]
async fn test_starts_idle() {
    let fetcher = ScriptedFetcher::new();
    let snapshot = controller(&fetcher).snapshot();
    assert_eq!(snapshot.state, ViewState::Idle);
    assert!(snapshot.notice.is_none());
    assert!(!snapshot.in_flight);
}

#[tokio::test]
async fn test_successful_lookup_loads_all_three_resources() {
    let fetcher = ScriptedFetcher::new();
    script_user(&fetcher, "octocat", one_repo(), one_follower());
    let controller = controller(&fetcher);

    controller.perform_lookup("octocat").await.unwrap();

    let snapshot = controller.snapshot();
    let loaded = snapshot.state.loaded().expect("state should be loaded");
    assert_eq!(loaded.profile.login, "octocat");
    assert_eq!(loaded.profile.public_repos, 1234);
    assert_eq!(loaded.repositories.len(), 1);
    assert_eq!(loaded.repositories[0].name, "hello-world");
    assert_eq!(loaded.followers.len(), 1);
    assert_eq!(loaded.followers[0].login, "hubot");
    assert!(!snapshot.in_flight);
    assert!(snapshot.error_text().is_none());

    let mut requests = fetcher.requests();
    assert_eq!(requests.len(), 3);
    assert_eq!(requests[0], profile_url("octocat"));
    requests.sort();
    assert!(requests.contains(&repos_url("octocat")));
    assert!(requests.contains(&followers_url("octocat")));
}

#[tokio::test]
async fn test_collections_use_urls_from_profile() {
    let fetcher = ScriptedFetcher::new();
    fetcher.respond_json(
        &profile_url("octo"),
        json!({
            "login": "octo",
            "repos_url": "http://mirror.test/r",
            "followers_url": "http://mirror.test/f"
        }),
    );
    fetcher.respond_json("http://mirror.test/r", json!([]));
    fetcher.respond_json("http://mirror.test/f", json!([]));
    let controller = controller(&fetcher);

    controller.perform_lookup("octo").await.unwrap();

    let requests = fetcher.requests();
    assert!(requests.contains(&"http://mirror.test/r".to_string()));
    assert!(requests.contains(&"http://mirror.test/f".to_string()));
}

#[tokio::test]
async fn test_input_is_trimmed_before_lookup() {
    let fetcher = ScriptedFetcher::new();
    script_user(&fetcher, "octocat", json!([]), json!([]));
    let controller = controller(&fetcher);

    controller.perform_lookup("  octocat \n").await.unwrap();

    assert_eq!(fetcher.requests()[0], profile_url("octocat"));
}

#[tokio::test]
async fn test_unknown_user_fails_without_collection_requests() {
    let fetcher = ScriptedFetcher::new();
    let controller = controller(&fetcher);

    let err = controller.perform_lookup("ghost").await.unwrap_err();

    assert_eq!(err, LookupError::NotFound);
    assert_eq!(
        controller.snapshot().state,
        ViewState::Failed("User not found".to_string())
    );
    assert_eq!(fetcher.requests(), vec![profile_url("ghost")]);
    assert!(!controller.is_loading());
    assert!(!controller.snapshot().in_flight);
}

#[tokio::test]
async fn test_any_profile_rejection_reads_as_not_found() {
    let fetcher = ScriptedFetcher::new();
    fetcher.respond(&profile_url("octo"), 403, r#"{"message":"rate limited"}"#);
    let controller = controller(&fetcher);

    let err = controller.perform_lookup("octo").await.unwrap_err();
    assert_eq!(err, LookupError::NotFound);
}

#[tokio::test]
async fn test_blank_input_sets_notice_and_makes_no_request() {
    let fetcher = ScriptedFetcher::new();
    let controller = controller(&fetcher);

    let err = controller.perform_lookup("   ").await.unwrap_err();

    assert_eq!(err, LookupError::EmptyInput);
    assert!(fetcher.requests().is_empty());
    let snapshot = controller.snapshot();
    assert_eq!(snapshot.state, ViewState::Idle);
    assert_eq!(snapshot.error_text(), Some("Please enter a GitHub username"));
    assert!(!controller.is_loading());
    assert!(!controller.snapshot().in_flight);
}

#[tokio::test]
async fn test_blank_input_keeps_previous_result() {
    let fetcher = ScriptedFetcher::new();
    script_user(&fetcher, "octocat", one_repo(), one_follower());
    let controller = controller(&fetcher);
    controller.perform_lookup("octocat").await.unwrap();

    let _ = controller.perform_lookup("").await;

    let snapshot = controller.snapshot();
    assert_eq!(snapshot.state.profile().unwrap().login, "octocat");
    assert_eq!(snapshot.notice.as_deref(), Some("Please enter a GitHub username"));
}

#[tokio::test]
async fn test_next_lookup_clears_notice() {
    let fetcher = ScriptedFetcher::new();
    script_user(&fetcher, "octocat", json!([]), json!([]));
    let controller = controller(&fetcher);

    let _ = controller.perform_lookup("").await;
    controller.perform_lookup("octocat").await.unwrap();

    assert!(controller.snapshot().notice.is_none());
}

#[tokio::test]
async fn test_transport_error_message_is_shown() {
    let fetcher = ScriptedFetcher::new();
    fetcher.fail(
        &profile_url("octo"),
        LookupError::Transport("connection refused".to_string()),
    );
    let controller = controller(&fetcher);

    let err = controller.perform_lookup("octo").await.unwrap_err();

    assert_eq!(err, LookupError::Transport("connection refused".to_string()));
    assert_eq!(
        controller.snapshot().state.error_message(),
        Some("connection refused")
    );
    assert!(!controller.is_loading());
    assert!(!controller.snapshot().in_flight);
}

#[tokio::test]
async fn test_malformed_profile_is_parse_error() {
    let fetcher = ScriptedFetcher::new();
    fetcher.respond(&profile_url("octo"), 200, "<html>not json</html>");
    let controller = controller(&fetcher);

    let err = controller.perform_lookup("octo").await.unwrap_err();

    assert!(matches!(err, LookupError::Parse(_)));
    assert!(matches!(controller.snapshot().state, ViewState::Failed(_)));
    assert!(!controller.is_loading());
    assert!(!controller.snapshot().in_flight);
}

#[tokio::test]
async fn test_followers_failure_discards_everything() {
    let fetcher = ScriptedFetcher::new();
    script_user(&fetcher, "octocat", one_repo(), json!([]));
    fetcher.respond(&followers_url("octocat"), 500, "{}");
    let controller = controller(&fetcher);

    let err = controller.perform_lookup("octocat").await.unwrap_err();

    assert_eq!(
        err,
        LookupError::Upstream {
            resource: "followers",
            status: 500
        }
    );
    let snapshot = controller.snapshot();
    assert_eq!(
        snapshot.state,
        ViewState::Failed("Failed to load followers (status 500)".to_string())
    );
    assert!(snapshot.state.repositories().is_empty());
    assert!(!controller.is_loading());
    assert!(!controller.snapshot().in_flight);
}

#[tokio::test]
async fn test_repositories_transport_failure_fails_lookup() {
    let fetcher = ScriptedFetcher::new();
    script_user(&fetcher, "octocat", json!([]), one_follower());
    fetcher.fail(
        &repos_url("octocat"),
        LookupError::Transport("timed out".to_string()),
    );
    let controller = controller(&fetcher);

    assert!(controller.perform_lookup("octocat").await.is_err());
    assert_eq!(controller.snapshot().state.error_message(), Some("timed out"));
    assert!(!controller.is_loading());
    assert!(!controller.snapshot().in_flight);
}

#[tokio::test]
async fn test_failure_then_success_recovers() {
    let fetcher = ScriptedFetcher::new();
    let controller = controller(&fetcher);
    assert!(controller.perform_lookup("octocat").await.is_err());

    script_user(&fetcher, "octocat", json!([]), json!([]));
    controller.perform_lookup("octocat").await.unwrap();

    assert!(controller.snapshot().state.loaded().is_some());
}

#[tokio::test]
async fn test_loading_state_is_observable_while_in_flight() {
    let fetcher = ScriptedFetcher::new();
    script_user(&fetcher, "octocat", json!([]), json!([]));
    fetcher.delay(&profile_url("octocat"), Duration::from_millis(50));
    let controller = controller(&fetcher);
    let mut revisions = controller.subscribe();

    let task = {
        let controller = controller.clone();
        tokio::spawn(async move { controller.perform_lookup("octocat").await })
    };

    revisions.changed().await.unwrap();
    let snapshot = controller.snapshot();
    assert_eq!(snapshot.state, ViewState::Loading);
    assert!(snapshot.in_flight);
    assert!(controller.is_loading());

    task.await.unwrap().unwrap();
    assert!(!controller.is_loading());
    assert!(controller.snapshot().state.loaded().is_some());
}

#[tokio::test]
async fn test_superseded_lookup_does_not_overwrite_newer_result() {
    let fetcher = ScriptedFetcher::new();
    script_user(&fetcher, "slow", json!([]), json!([]));
    script_user(&fetcher, "fast", one_repo(), one_follower());
    fetcher.delay(&profile_url("slow"), Duration::from_millis(100));
    let controller = controller(&fetcher);
    let mut revisions = controller.subscribe();

    let slow = {
        let controller = controller.clone();
        tokio::spawn(async move { controller.perform_lookup("slow").await })
    };
    revisions.changed().await.unwrap();

    controller.perform_lookup("fast").await.unwrap();
    assert!(controller.is_loading());

    slow.await.unwrap().unwrap();

    let snapshot = controller.snapshot();
    assert_eq!(snapshot.state.profile().unwrap().login, "fast");
    assert!(!snapshot.in_flight);
}

#[tokio::test]
async fn test_cancelled_lookup_returns_to_idle() {
    let fetcher = ScriptedFetcher::new();
    script_user(&fetcher, "octocat", json!([]), json!([]));
    fetcher.delay(&profile_url("octocat"), Duration::from_millis(200));
    let controller = controller(&fetcher);

    let result =
        tokio::time::timeout(Duration::from_millis(20), controller.perform_lookup("octocat")).await;

    assert!(result.is_err(), "lookup should have been cut off");
    let snapshot = controller.snapshot();
    assert_eq!(snapshot.state, ViewState::Idle);
    assert!(!snapshot.in_flight);
    assert!(!controller.is_loading());
}

#[tokio::test]
async fn test_cancelled_lookup_keeps_newer_state() {
    let fetcher = ScriptedFetcher::new();
    script_user(&fetcher, "slow", json!([]), json!([]));
    script_user(&fetcher, "fast", one_repo(), one_follower());
    fetcher.delay(&profile_url("slow"), Duration::from_millis(200));
    let controller = controller(&fetcher);
    let mut revisions = controller.subscribe();

    let slow = {
        let controller = controller.clone();
        tokio::spawn(async move { controller.perform_lookup("slow").await })
    };
    revisions.changed().await.unwrap();
    controller.perform_lookup("fast").await.unwrap();

    slow.abort();
    assert!(slow.await.unwrap_err().is_cancelled());

    let snapshot = controller.snapshot();
    assert_eq!(snapshot.state.profile().unwrap().login, "fast");
    assert!(!snapshot.in_flight);
}
