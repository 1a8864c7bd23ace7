//! End-to-end checks of the invalid-argument contract and the JSON boundary.

use valet::{array, number, object, string, Value};

#[test]
fn every_validated_helper_reports_its_own_name() {
    let bad = Value::Null;
    let cases: Vec<(&str, valet::InvalidArgument)> = vec![
        ("is_empty_string", string::is_empty_string(&bad).unwrap_err()),
        ("is_email", string::is_email(&bad).unwrap_err()),
        ("is_url", string::is_url(&bad).unwrap_err()),
        ("is_empty_array", array::is_empty_array(&bad).unwrap_err()),
        ("chunk", array::chunk(&bad, 2).unwrap_err()),
        ("chunk_count", array::chunk_count(&bad, 2).unwrap_err()),
        ("chunk_at", array::chunk_at(&bad, 2, 0).unwrap_err()),
        ("unique", array::unique(&bad).unwrap_err()),
        ("flatten", array::flatten(&bad, None).unwrap_err()),
        ("is_empty_object", object::is_empty_object(&bad).unwrap_err()),
        ("pick", object::pick(&bad, &["a"]).unwrap_err()),
        ("omit", object::omit(&bad, &["a"]).unwrap_err()),
        ("is_odd", number::is_odd(&bad).unwrap_err()),
        ("is_even", number::is_even(&bad).unwrap_err()),
        ("is_positive", number::is_positive(&bad).unwrap_err()),
        ("is_negative", number::is_negative(&bad).unwrap_err()),
        ("is_in_range", number::is_in_range(&bad, 0.0, 1.0).unwrap_err()),
        ("is_divisible_by", number::is_divisible_by(&bad, 2.0).unwrap_err()),
        ("is_prime", number::is_prime(&bad).unwrap_err()),
    ];
    for (name, err) in cases {
        assert_eq!(err.function, name);
        assert_eq!(err.kind.as_str(), "null");
        assert_eq!(err.code(), "validation.invalid_argument");
    }
}

#[test]
fn error_message_format_is_diagnostic() {
    let err = number::is_odd(&Value::from("three")).unwrap_err();
    assert_eq!(
        err.to_string(),
        "is_odd(): expected a finite number, but received string"
    );

    let err = string::is_email(&Value::array([1, 2])).unwrap_err();
    assert_eq!(
        err.to_string(),
        "is_email(): expected a string, but received array"
    );
}

#[test]
fn error_details_round_trip_through_json() {
    let err = array::chunk(&Value::from(42), 2).unwrap_err();
    let details = err.details();
    assert_eq!(details["function"], "chunk");
    assert_eq!(details["expected"], "an array");
    assert_eq!(details["receivedKind"], "number");
    assert_eq!(details["received"], 42);
}

#[test]
fn json_input_flows_through_validated_helpers() {
    let parsed = Value::from_json(serde_json::json!({
        "emails": ["user@example.com", "not-an-email"],
        "numbers": [2, 3, 4, 5, 6],
    }));
    let map = parsed.as_object().unwrap();

    let emails = map["emails"].as_array().unwrap();
    assert!(string::is_email(&emails[0]).unwrap());
    assert!(!string::is_email(&emails[1]).unwrap());

    let primes: Vec<bool> = map["numbers"]
        .as_array()
        .unwrap()
        .iter()
        .map(|n| number::is_prime(n).unwrap())
        .collect();
    assert_eq!(primes, vec![true, true, false, true, false]);

    let chunks = array::chunk(&map["numbers"], 2).unwrap();
    assert_eq!(chunks.len(), array::chunk_count(&map["numbers"], 2).unwrap());
}

#[test]
fn merge_and_pick_compose_over_json_objects() {
    let defaults = Value::from_json(serde_json::json!({"host": "localhost", "port": 80}));
    let overrides = Value::from_json(serde_json::json!({"port": 8080, "debug": true}));
    let merged = object::merge(&[defaults, overrides]).unwrap();
    assert_eq!(
        merged,
        Value::from_json(serde_json::json!({"host": "localhost", "port": 8080, "debug": true}))
    );
    assert_eq!(
        object::pick(&merged, &["port"]).unwrap(),
        Value::from_json(serde_json::json!({"port": 8080}))
    );
}
