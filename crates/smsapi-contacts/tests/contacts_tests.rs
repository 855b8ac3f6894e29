/*
[INPUT]:  Mock HTTP responses
[OUTPUT]: Test results for contact endpoints
[POS]:    Integration tests - contacts and custom fields
[UPDATE]: When contact endpoints change
*/

mod common;

use common::{TEST_NUMBER, TEST_PASSWORD, TEST_USERNAME, contact_json, logged_in_client, setup_mock_server};
use serde_json::json;
use smsapi_contacts::{ContactParams, FieldType, Gender, SmsapiError, hash_password};
use tokio_test::assert_ok;
use wiremock::matchers::{basic_auth, body_string, body_string_contains, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_list_contacts() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/contacts"))
        .and(basic_auth(TEST_USERNAME, hash_password(TEST_PASSWORD)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "size": 1,
            "collection": [contact_json("c1", "TestName")],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = logged_in_client(&server);
    let result = assert_ok!(client.contacts().list().execute().await);

    assert_eq!(result.size, 1);
    let contact = result.first().expect("one contact");
    assert_eq!(contact.id, "c1");
    assert_eq!(contact.gender, Some(Gender::Male));
    assert_eq!(contact.birthday_date.as_deref(), Some("2000-12-12"));
}

#[tokio::test]
async fn test_list_contacts_sends_filters_as_query() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/contacts"))
        .and(query_param("q", "test"))
        .and(query_param("offset", "10"))
        .and(query_param("limit", "10"))
        .and(query_param("phone_number", "500500500"))
        .and(query_param("gender", "male"))
        .and(query_param("birthday_date", "2000-10-10"))
        .and(query_param("order_by", "first_name"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "size": 0,
            "collection": [],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = logged_in_client(&server);
    let result = assert_ok!(
        client
            .contacts()
            .list()
            .q("test")
            .offset(10)
            .limit(10)
            .phone_number("500500500")
            .gender(Gender::Male)
            .birthday("2000-10-10")
            .order_by("first_name")
            .execute()
            .await
    );

    assert!(result.is_empty());
}

#[tokio::test]
async fn test_contact_lifecycle() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/contacts"))
        .and(body_string_contains(format!("phone_number={TEST_NUMBER}")))
        .and(body_string_contains("gender=male"))
        .respond_with(ResponseTemplate::new(201).set_body_json(contact_json("c1", "TestName")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/contacts/c1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(contact_json("c1", "TestName")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/contacts/c1"))
        .and(body_string_contains("first_name=ChangedName"))
        .respond_with(ResponseTemplate::new(200).set_body_json(contact_json("c1", "ChangedName")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/contacts/c1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = logged_in_client(&server);
    let params = ContactParams {
        phone_number: Some(TEST_NUMBER.to_string()),
        first_name: Some("TestName".to_string()),
        last_name: Some("LastName".to_string()),
        description: Some("Additional info".to_string()),
        gender: Some(Gender::Male),
        city: Some("Gliwice".to_string()),
        email: Some("test@example.com".to_string()),
        birthday_date: Some("2000-12-12".to_string()),
        ..Default::default()
    };

    let added = assert_ok!(assert_ok!(client.contacts().add().params(&params)).execute().await);
    let fetched = assert_ok!(client.contacts().get(&added.id).execute().await);
    assert_eq!(added, fetched);

    let updated = assert_ok!(
        client
            .contacts()
            .update(&added.id)
            .first_name("ChangedName")
            .execute()
            .await
    );
    assert_eq!(updated.first_name.as_deref(), Some("ChangedName"));
    assert_eq!(updated.last_name, added.last_name);

    assert_ok!(client.contacts().delete(&added.id).execute().await);
}

#[tokio::test]
async fn test_missing_contact_is_not_found() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/contacts/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": "not_found_error",
            "message": "Contact not found",
        })))
        .mount(&server)
        .await;

    let client = logged_in_client(&server);
    let err = client.contacts().get("missing").execute().await.unwrap_err();

    match err {
        SmsapiError::NotFound { message } => assert_eq!(message, "Contact not found"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_custom_fields() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/contacts/fields"))
        .and(body_string_contains("name=loyalty"))
        .and(body_string_contains("type=NUMBER"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "f1",
            "name": "loyalty",
            "type": "NUMBER",
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/contacts/fields"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "size": 1,
            "collection": [{ "id": "f1", "name": "loyalty", "type": "NUMBER" }],
        })))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/contacts/c1"))
        .and(body_string_contains("loyalty=42"))
        .respond_with(ResponseTemplate::new(200).set_body_json({
            let mut contact = contact_json("c1", "TestName");
            contact["loyalty"] = json!("42");
            contact
        }))
        .expect(1)
        .mount(&server)
        .await;

    let client = logged_in_client(&server);
    let field = assert_ok!(
        client
            .contacts()
            .fields()
            .add()
            .name("loyalty")
            .field_type(FieldType::Number)
            .execute()
            .await
    );
    assert_eq!(field.field_type, FieldType::Number);

    let fields = assert_ok!(client.contacts().fields().list().execute().await);
    assert_eq!(fields.len(), 1);

    let contact = assert_ok!(
        client
            .contacts()
            .update("c1")
            .custom_field("loyalty", "42")
            .execute()
            .await
    );
    assert_eq!(contact.custom_field("loyalty"), Some(&json!("42")));
}

#[tokio::test]
async fn test_field_rename_and_delete() {
    let server = setup_mock_server().await;
    Mock::given(method("PUT"))
        .and(path("/contacts/fields/f1"))
        .and(body_string("name=points"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "f1",
            "name": "points",
            "type": "NUMBER",
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/contacts/fields/f1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = logged_in_client(&server);
    let fields = client.contacts().fields();

    let field = assert_ok!(fields.update("f1").name("points").execute().await);
    assert_eq!(field.name, "points");
    assert_eq!(field.field_type, FieldType::Number);

    assert_ok!(fields.delete("f1").execute().await);
}

#[tokio::test]
async fn test_rest_error_named_field_is_contact_data() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/contacts/c1"))
        .respond_with(ResponseTemplate::new(200).set_body_json({
            let mut contact = contact_json("c1", "TestName");
            contact["error"] = json!(0);
            contact
        }))
        .expect(1)
        .mount(&server)
        .await;

    let client = logged_in_client(&server);
    let contact = assert_ok!(client.contacts().get("c1").execute().await);

    assert_eq!(contact.id, "c1");
    assert_eq!(contact.custom_field("error"), Some(&json!(0)));
}
