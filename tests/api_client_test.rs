//! RabbleClient endpoint tests using wiremock.
//!
//! These tests verify that the client calls the expected c2s paths, turns
//! `null` bodies into empty results and only retries where it should.

use chump::api::{ApiError, RabbleClient};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn post_json(id: i64, title: &str, published: &str) -> serde_json::Value {
    serde_json::json!({
        "global_id": id,
        "author": "sam",
        "author_host": "",
        "title": title,
        "body": "<p>hi</p>",
        "likes_count": 0,
        "shares_count": 0,
        "published": published,
        "tags": null
    })
}

#[tokio::test]
async fn test_public_feed_path_depends_on_viewer() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/c2s/feed"))
        .respond_with(ResponseTemplate::new(200).set_body_string("null"))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/c2s/feed/aaron"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            post_json(1, "one", "2020-01-01T00:00:00Z")
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = RabbleClient::new(&mock_server.uri()).unwrap();

    let anonymous = client.get_public_posts("").await.unwrap();
    assert!(anonymous.is_empty(), "null feed should be an empty list");

    let personal = client.get_public_posts("aaron").await.unwrap();
    assert_eq!(personal.len(), 1);
    assert!(personal[0].tags.is_empty(), "null tags should be an empty list");
}

#[tokio::test]
async fn test_feed_is_sorted_newest_first() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/c2s/@sam"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            post_json(1, "old", "2019-01-01T00:00:00Z"),
            post_json(2, "undated", "whenever"),
            post_json(3, "new", "2021-06-01T12:00:00Z"),
        ])))
        .mount(&mock_server)
        .await;

    let client = RabbleClient::new(&mock_server.uri()).unwrap();
    let posts = client.get_users_posts("sam").await.unwrap();

    let titles: Vec<&str> = posts.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["new", "old", "undated"]);
    assert!(posts[0].parsed_date.is_some());
    assert!(posts[2].parsed_date.is_none());
}

#[tokio::test]
async fn test_single_post_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/c2s/@sam/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            post_json(42, "answer", "2020-01-01T00:00:00Z")
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = RabbleClient::new(&mock_server.uri()).unwrap();
    let posts = client.get_single_post("sam", "42").await.unwrap();
    assert_eq!(posts[0].global_id, 42);
}

#[tokio::test]
async fn test_feed_error_status_is_an_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/c2s/feed"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such feed"))
        .mount(&mock_server)
        .await;

    let client = RabbleClient::new(&mock_server.uri()).unwrap();
    let err = client.get_public_posts("").await.unwrap_err();

    match err.downcast_ref::<ApiError>() {
        Some(ApiError::Status { status, body }) => {
            assert_eq!(*status, 404);
            assert_eq!(body, "no such feed");
        }
        other => panic!("expected a status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_follow_retries_transient_failures() {
    let mock_server = MockServer::start().await;

    // First attempt fails, the retry succeeds
    Mock::given(method("POST"))
        .and(path("/c2s/follow"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/c2s/follow"))
        .and(body_json(serde_json::json!({
            "follower": "aaron",
            "followed": "cian@elsewhere.ie"
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = RabbleClient::new(&mock_server.uri()).unwrap();
    let status = client
        .create_follow("aaron", "cian", "elsewhere.ie")
        .await
        .unwrap();
    assert_eq!(status, 200);
}

#[tokio::test]
async fn test_follow_gives_up_after_retries() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/c2s/unfollow"))
        .respond_with(ResponseTemplate::new(500))
        .expect(3)
        .mount(&mock_server)
        .await;

    let client = RabbleClient::new(&mock_server.uri()).unwrap();
    let result = client.unfollow("aaron", "cian").await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_like_is_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/c2s/like"))
        .and(body_json(serde_json::json!({"article_id": 7, "is_liked": true})))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = RabbleClient::new(&mock_server.uri()).unwrap();
    assert!(client.send_like(7, true).await.is_err());
}

#[tokio::test]
async fn test_search_sends_query_and_tolerates_nulls() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/c2s/search"))
        .and(query_param("query", "rust lang"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "posts": null,
            "users": [{"handle": "ferris", "host": "", "display_name": "Ferris"}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = RabbleClient::new(&mock_server.uri()).unwrap();
    let results = client.search("rust lang").await.unwrap();
    assert!(results.posts.is_empty());
    assert_eq!(results.users.len(), 1);
    assert_eq!(results.users[0].handle, "ferris");
}

#[tokio::test]
async fn test_login_rejection_is_a_result() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/c2s/login"))
        .and(body_json(serde_json::json!({"handle": "aaron", "password": "nope"})))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "success": true,
            "error": "bad password"
        })))
        .mount(&mock_server)
        .await;

    let client = RabbleClient::new(&mock_server.uri()).unwrap();
    let response = client.login("aaron", "nope").await.unwrap();
    assert!(!response.success, "an error status is never a success");
    assert_eq!(response.status_code, 401);
    assert_eq!(response.error, "bad password");
}

#[tokio::test]
async fn test_preview_null_is_empty_body_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/c2s/preview"))
        .respond_with(ResponseTemplate::new(200).set_body_string("null"))
        .mount(&mock_server)
        .await;

    let client = RabbleClient::new(&mock_server.uri()).unwrap();
    let err = client.create_preview("aaron", "t", "b").await.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ApiError>(),
        Some(ApiError::EmptyBody(_))
    ));
}

#[tokio::test]
async fn test_pending_follows_null_is_an_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/c2s/follows/pending"))
        .respond_with(ResponseTemplate::new(200).set_body_string("null"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = RabbleClient::new(&mock_server.uri()).unwrap();
    let err = client.get_pending_follows().await.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ApiError>(),
        Some(ApiError::EmptyBody(_))
    ));
    assert!(err.to_string().contains("could not parse result"));
}

#[tokio::test]
async fn test_reblog_needs_exactly_200() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/c2s/announce"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = RabbleClient::new(&mock_server.uri()).unwrap();
    let err = client.send_reblog(7).await.unwrap_err();
    assert_eq!(err.to_string(), "status = 201");
}
