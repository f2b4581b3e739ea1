//! End-to-end tests for the public recasing API.

use recase_core::{
    Error, KeyCase, Overrides, Shape, is_plain_object, map_values, object_to_expected_case,
    recase_serialize, shape_of, to_expected_case,
};
use serde::Serialize;
use serde_json::{Value, json};

fn render(value: &Value) -> String {
    serde_json::to_string_pretty(value).expect("Failed to render JSON")
}

fn api_payload() -> Value {
    json!({
        "request_id": "abc",
        "user": {
            "first_name": "Ada",
            "last_name": "Lovelace",
            "email_addresses": [
                { "address_type": "work", "is_primary": true }
            ]
        },
        "page_size": 20
    })
}

#[test]
fn test_api_payload_to_camel() {
    let result = object_to_expected_case(&api_payload(), KeyCase::Camel).unwrap();
    insta::assert_snapshot!(render(&result), @r#"
    {
      "requestId": "abc",
      "user": {
        "firstName": "Ada",
        "lastName": "Lovelace",
        "emailAddresses": [
          {
            "addressType": "work",
            "isPrimary": true
          }
        ]
      },
      "pageSize": 20
    }
    "#);
}

#[test]
fn test_api_payload_to_header() {
    let result = object_to_expected_case(&api_payload(), KeyCase::Header).unwrap();
    insta::assert_snapshot!(render(&result), @r#"
    {
      "Request-Id": "abc",
      "User": {
        "First-Name": "Ada",
        "Last-Name": "Lovelace",
        "Email-Addresses": [
          {
            "Address-Type": "work",
            "Is-Primary": true
          }
        ]
      },
      "Page-Size": 20
    }
    "#);
}

#[test]
fn test_every_case_is_idempotent() {
    for case in KeyCase::ALL {
        let once = object_to_expected_case(&api_payload(), case).unwrap();
        assert!(case.is_satisfied_by(&once), "{case} left unconverted keys");
        assert_eq!(object_to_expected_case(&once, case).unwrap(), once);
    }
}

#[test]
fn test_digit_keys_are_idempotent() {
    let value = json!({"a_1_b": 1, "nested": {"page10Size": [{"v2_api": true}]}});
    for case in KeyCase::ALL {
        let once = object_to_expected_case(&value, case).unwrap();
        assert!(case.is_satisfied_by(&once), "{case} left unconverted keys");
        assert_eq!(object_to_expected_case(&once, case).unwrap(), once, "{case}");
    }

    let value = json!({"a1B": 1});
    let pascal = object_to_expected_case(&value, KeyCase::Pascal).unwrap();
    assert_eq!(pascal, json!({"A1B": 1}));
    assert_eq!(
        object_to_expected_case(&pascal, KeyCase::Pascal).unwrap(),
        pascal
    );
}

#[test]
fn test_snake_camel_round_trip_is_lossy() {
    let value = json!({"userID": 1});
    let snake = object_to_expected_case(&value, KeyCase::Snake).unwrap();
    assert_eq!(snake, json!({"user_id": 1}));
    let camel = object_to_expected_case(&snake, KeyCase::Camel).unwrap();
    assert_eq!(camel, json!({"userId": 1}));
    assert_ne!(camel, value);
}

#[test]
fn test_nested_collision_aborts() {
    let value = json!({"outer_list": [{"inner": {"a_b": 1, "aB": 2}}]});
    let err = object_to_expected_case(&value, KeyCase::Camel).unwrap_err();
    match *err {
        Error::KeyCollision { key, path, .. } => {
            assert_eq!(key, "aB");
            assert_eq!(path, "/outer_list/0/inner");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_input_is_not_mutated() {
    let value = api_payload();
    let before = value.clone();
    object_to_expected_case(&value, KeyCase::Constant).unwrap();
    assert_eq!(value, before);
}

#[derive(Serialize)]
struct Settings {
    max_retries: u32,
    retry_policy: RetryPolicy,
}

#[derive(Serialize)]
struct RetryPolicy {
    backoff_ms: u64,
}

#[test]
fn test_structs_are_classified_opaque_but_recased() {
    let settings = Settings {
        max_retries: 3,
        retry_policy: RetryPolicy { backoff_ms: 250 },
    };
    assert_eq!(shape_of(&settings), Shape::Opaque);
    assert!(!is_plain_object(&settings));

    let result = recase_serialize(&settings, KeyCase::Dot).unwrap();
    assert_eq!(
        result,
        json!({"max.retries": 3, "retry.policy": {"backoff.ms": 250}})
    );
    assert!(is_plain_object(&result));
}

#[test]
fn test_overrides_apply_to_single_keys() {
    let overrides = Overrides::from_toml_str(r#"user_id = "userID""#).unwrap();
    let keys = json!({"user_id": 1, "group_id": 2});
    let Value::Object(map) = keys else {
        unreachable!()
    };
    let renamed = map_values(&map, |_, key| {
        to_expected_case(key, KeyCase::Camel, Some(&overrides))
    });
    assert_eq!(renamed["user_id"], "userID");
    assert_eq!(renamed["group_id"], "groupId");
}
