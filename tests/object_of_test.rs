use gatecheck::checkers::{number, object_of, string};
use gatecheck::{check_value, value_conforms, Value};
use serde_json::json;

#[test]
fn test_homogeneous_map_passes() {
    let counts = object_of(number());
    assert!(value_conforms(
        &counts,
        &Value::from(json!({"reads": 10, "writes": 3}))
    ));
}

#[test]
fn test_empty_object_passes() {
    assert!(value_conforms(&object_of(number()), &Value::from(json!({}))));
}

#[test]
fn test_bad_entry_reports_keyed_path() {
    let counts = object_of(number());
    let value = Value::from(json!({"reads": 10, "writes": "three"}));
    let err = check_value(&counts, &value, "field", "Metrics").unwrap_err();
    let invalid = err.as_invalid().expect("validation failure");
    assert_eq!(invalid.path.to_string(), "value.writes");
    assert_eq!(
        err.to_string(),
        "Invalid field `value.writes` of type `string`, expected `number`."
    );
}

#[test]
fn test_first_failure_follows_insertion_order() {
    let counts = object_of(number());
    // Both entries are invalid; the first inserted key surfaces.
    let value = Value::from(json!({"b": "x", "a": "y"}));
    let err = check_value(&counts, &value, "field", "Metrics").unwrap_err();
    let invalid = err.as_invalid().expect("validation failure");
    assert_eq!(invalid.path.to_string(), "value.b");
}

#[test]
fn test_non_object_value_names_actual_kind() {
    let counts = object_of(number());
    let err = check_value(&counts, &Value::from(json!([1, 2])), "field", "Metrics").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid field `value` of type `array` supplied to `Metrics`, expected an object."
    );
}

#[test]
fn test_nested_object_of() {
    let nested = object_of(object_of(string()));
    assert!(value_conforms(
        &nested,
        &Value::from(json!({"en": {"hello": "hello"}, "fr": {"hello": "bonjour"}}))
    ));

    let err = check_value(
        &nested,
        &Value::from(json!({"en": {"hello": 1}})),
        "field",
        "I18n",
    )
    .unwrap_err();
    let invalid = err.as_invalid().expect("validation failure");
    assert_eq!(invalid.path.to_string(), "value.en.hello");
}

#[test]
fn test_null_entry_respects_presence_gate() {
    let strict = object_of(number());
    assert!(check_value(&strict, &Value::from(json!({"a": null})), "field", "M").is_err());

    let lenient = object_of(number().optional());
    assert!(value_conforms(&lenient, &Value::from(json!({"a": null}))));
}
