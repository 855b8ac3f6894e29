/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for smsapi-contacts tests

use serde_json::{Value, json};
use smsapi_contacts::{ClientConfig, Session, SmsapiClient, hash_password};
use wiremock::MockServer;

pub const TEST_USERNAME: &str = "test-user";
pub const TEST_PASSWORD: &str = "password";
pub const TEST_NUMBER: &str = "48500000000";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock server, without a session
pub fn client_for(server: &MockServer) -> SmsapiClient {
    SmsapiClient::with_config(ClientConfig::with_server(server.uri()))
        .expect("client should build")
}

/// Client pointed at the mock server with a password session already stored
pub fn logged_in_client(server: &MockServer) -> SmsapiClient {
    let client = client_for(server);
    client.session().set(Session::Password {
        username: TEST_USERNAME.to_string(),
        password_hash: hash_password(TEST_PASSWORD),
    });
    client
}

/// Random name for groups and contacts
#[allow(dead_code)]
pub fn random_name() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

/// Contact body as the server returns it
#[allow(dead_code)]
pub fn contact_json(id: &str, first_name: &str) -> Value {
    json!({
        "id": id,
        "phone_number": TEST_NUMBER,
        "first_name": first_name,
        "last_name": "LastName",
        "description": "Additional info",
        "gender": "male",
        "city": "Gliwice",
        "email": "test@example.com",
        "birthday_date": "2000-12-12",
        "source": "api",
        "idx": null,
        "date_created": "2024-01-10T10:00:00+01:00",
        "date_updated": "2024-01-10T10:00:00+01:00",
    })
}

/// Group body as the server returns it
#[allow(dead_code)]
pub fn group_json(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "description": "",
        "idx": null,
        "contacts_count": 0,
        "created_by": TEST_USERNAME,
        "date_created": "2024-01-10T10:00:00+01:00",
        "date_updated": "2024-01-10T10:00:00+01:00",
        "permissions": [
            { "group_id": id, "username": TEST_USERNAME, "read": true, "write": true, "send": true }
        ],
    })
}
