/*
[INPUT]:  Mock HTTP responses
[OUTPUT]: Test results for authentication and error mapping
[POS]:    Integration tests - login flows and session handling
[UPDATE]: When auth flow or response handling changes
*/

mod common;

use std::time::Duration;

use common::{TEST_PASSWORD, TEST_USERNAME, client_for, logged_in_client, setup_mock_server};
use serde_json::json;
use smsapi_contacts::{ClientConfig, Session, SmsapiClient, SmsapiError, hash_password};
use tokio_test::assert_ok;
use wiremock::matchers::{bearer_token, body_string, body_string_contains, method, path};
use wiremock::{Mock, ResponseTemplate};

#[test]
fn test_client_creation() {
    let client = assert_ok!(SmsapiClient::new());
    assert_eq!(client.base_url().as_str(), "https://api.smsapi.pl/");
    assert!(!client.session().is_authenticated());
}

#[test]
fn test_client_rejects_bad_server() {
    let err = SmsapiClient::with_config(ClientConfig::with_server("not a url")).unwrap_err();
    assert!(matches!(err, SmsapiError::Config(_)));
}

#[tokio::test]
async fn test_password_login_then_contacts() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/user.do"))
        .and(body_string_contains("credits=1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "points": "100.00" })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/contacts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "size": 0,
            "collection": [],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let account = assert_ok!(
        client
            .authentication()
            .login(TEST_USERNAME, TEST_PASSWORD)
            .await
    );
    assert_eq!(account.points.to_string(), "100.00");

    let contacts = assert_ok!(client.contacts().list().execute().await);
    assert_eq!(contacts.size, 0);
}

#[tokio::test]
async fn test_request_without_login_sends_nothing() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.contacts().list().execute().await.unwrap_err();

    assert!(err.is_auth_error());
}

#[tokio::test]
async fn test_oauth_session_uses_bearer_everywhere() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/contacts/groups"))
        .and(bearer_token("token-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "size": 0,
            "collection": [],
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/phonebook.do"))
        .and(bearer_token("token-123"))
        .and(body_string("format=json&list_groups=1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.session().set(Session::OAuth {
        token: "token-123".to_string(),
    });

    assert_ok!(client.contacts().groups().list().execute().await);
    let groups = assert_ok!(client.phonebook().group_list().execute().await);
    assert!(groups.is_empty());
}

#[tokio::test]
async fn test_rejected_credentials_on_rest_endpoint() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/contacts"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "message": "Authorization failed",
            "error": "authorization_failed",
        })))
        .mount(&server)
        .await;

    let client = logged_in_client(&server);
    let err = client.contacts().list().execute().await.unwrap_err();

    assert!(err.is_auth_error());
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn test_rate_limit_carries_retry_after() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/contacts"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "7"))
        .mount(&server)
        .await;

    let client = logged_in_client(&server);
    let err = client.contacts().list().execute().await.unwrap_err();

    assert!(err.is_retryable());
    assert_eq!(err.retry_delay(), Some(7));
}

#[tokio::test]
async fn test_slow_server_times_out() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/contacts"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "size": 0, "collection": [] }))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let config = ClientConfig {
        timeout: Duration::from_millis(200),
        ..ClientConfig::with_server(server.uri())
    };
    let client = assert_ok!(SmsapiClient::with_config(config));
    client.session().set(Session::Password {
        username: TEST_USERNAME.to_string(),
        password_hash: hash_password(TEST_PASSWORD),
    });

    let err = client.contacts().list().execute().await.unwrap_err();
    assert!(matches!(err, SmsapiError::Timeout { .. }));
}

#[tokio::test]
async fn test_empty_body_where_json_expected() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/contacts/c1"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = logged_in_client(&server);
    let err = client.contacts().get("c1").execute().await.unwrap_err();

    assert!(matches!(err, SmsapiError::InvalidResponse(_)));
}
