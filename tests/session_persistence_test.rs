//! Session persistence across restarts
//!
//! A login written by one `SessionStore` must be seen by the next one
//! opened on the same file, and a logout must clear it for good.

use chump::api::RabbleClient;
use chump::session::SessionStore;
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn test_login_survives_restart() {
    let dir = TempDir::new().unwrap();
    let db = dir.path().join("nested").join("session.db");

    {
        let mut store = SessionStore::open(&db).unwrap();
        assert!(store.session().is_anonymous());
        store.login("aaron", 3).unwrap();
        store.save_cookie("session=abc").unwrap();
    }

    let store = SessionStore::open(&db).unwrap();
    assert_eq!(store.username(), "aaron");
    assert_eq!(store.user_id(), 3);
    assert_eq!(store.cookie().unwrap().as_deref(), Some("session=abc"));
}

#[test]
fn test_logout_survives_restart() {
    let dir = TempDir::new().unwrap();
    let db = dir.path().join("session.db");

    {
        let mut store = SessionStore::open(&db).unwrap();
        store.login("aaron", 3).unwrap();
        store.save_cookie("session=abc").unwrap();
        store.logout().unwrap();
    }

    let store = SessionStore::open(&db).unwrap();
    assert!(store.session().is_anonymous());
    assert_eq!(store.cookie().unwrap(), None);
}

#[tokio::test]
async fn test_restored_cookie_is_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/c2s/details/user"))
        .and(header("cookie", "session=abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "handle": "aaron",
            "display_name": "Aaron",
            "bio": "",
            "custom_css": ""
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = RabbleClient::new(&mock_server.uri()).unwrap();
    client.restore_session_cookie("session=abc").unwrap();
    assert_eq!(client.session_cookie().as_deref(), Some("session=abc"));

    let details = client.get_user_info().await.unwrap();
    assert_eq!(details.handle, "aaron");
}
