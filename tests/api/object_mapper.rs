use crate::test_data::{TEST_EMAIL, TEST_JOIN_REQUEST_JSON, TEST_NAME, TEST_PASSWORD};
use claims::{assert_err, assert_ok};
use restmapper::demo::sample_join_requests;
use restmapper::domain::JoinRequest;
use restmapper::object_mapper::{ObjectMapper, TypeReference};
use std::collections::{HashMap, HashSet};

fn test_join_request() -> JoinRequest {
    JoinRequest::builder()
        .email(TEST_EMAIL)
        .password(TEST_PASSWORD)
        .confirm_password(TEST_PASSWORD)
        .name(TEST_NAME)
        .build()
}

#[test]
fn join_request_is_encoded_to_the_expected_json() {
    // Arrange
    let object_mapper = ObjectMapper::new();
    // Act
    let json = assert_ok!(object_mapper.write_value_as_string(&test_join_request()));
    // Assert
    assert_eq!(json, TEST_JOIN_REQUEST_JSON);
}

#[test]
fn join_request_survives_a_round_trip() {
    let object_mapper = ObjectMapper::new();
    let form = test_join_request();

    let json = assert_ok!(object_mapper.write_value_as_string(&form));
    let decoded: JoinRequest = assert_ok!(object_mapper.read_value(&json));

    assert_eq!(decoded, form);
}

#[test]
fn list_of_join_requests_survives_a_round_trip_in_order() {
    let object_mapper = ObjectMapper::new();
    let items = sample_join_requests(10);

    let json = assert_ok!(object_mapper.write_value_as_string(&items));
    assert!(json.starts_with(r#"[{"email":"user1@test.org""#));
    let decoded = assert_ok!(
        object_mapper.read_value_as(&json, TypeReference::<Vec<JoinRequest>>::new())
    );

    assert_eq!(decoded, items);
}

#[test]
fn empty_list_is_encoded_as_an_empty_array() {
    let object_mapper = ObjectMapper::new();
    let json = assert_ok!(object_mapper.write_value_as_string(&Vec::<JoinRequest>::new()));
    assert_eq!(json, "[]");
}

#[test]
fn map_and_set_containers_are_decoded_through_type_references() {
    let object_mapper = ObjectMapper::new();

    let by_email: HashMap<String, JoinRequest> = sample_join_requests(3)
        .into_iter()
        .map(|form| (form.email.clone(), form))
        .collect();
    let json = assert_ok!(object_mapper.write_value_as_string(&by_email));
    let decoded = assert_ok!(object_mapper.read_value_as(
        &json,
        TypeReference::<HashMap<String, JoinRequest>>::new()
    ));
    assert_eq!(decoded, by_email);

    let names = assert_ok!(object_mapper.read_value_as(
        r#"["사용자1","사용자2","사용자1"]"#,
        TypeReference::<HashSet<String>>::new()
    ));
    assert_eq!(names.len(), 2);
}

#[test]
fn invalid_json_is_rejected_with_a_decode_error() {
    let object_mapper = ObjectMapper::new();
    let truncated = &TEST_JOIN_REQUEST_JSON[..TEST_JOIN_REQUEST_JSON.len() / 2];
    let test_cases = vec![
        (truncated, "truncated object"),
        ("", "empty text"),
        ("not json", "bare words"),
        (r#"[{"email":"a"}]"#, "array instead of object"),
    ];

    for (invalid_body, error_message) in test_cases {
        let outcome = object_mapper.read_value::<JoinRequest>(invalid_body);
        let error = assert_err!(outcome, "Decoding did not fail for {}", error_message);
        assert!(error.is_decode(), "Wrong error kind for {}", error_message);
    }
}

#[test]
fn truncated_list_is_rejected_by_the_container_path() {
    let object_mapper = ObjectMapper::new();
    let json = assert_ok!(object_mapper.write_value_as_string(&sample_join_requests(2)));
    let truncated = &json[..json.len() - 1];

    assert_err!(object_mapper.read_value_as(truncated, TypeReference::<Vec<JoinRequest>>::new()));
}
