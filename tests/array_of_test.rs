use gatecheck::checkers::{array_of, number, one_of, shape, string};
use gatecheck::{check_value, value_conforms, Schema, Value};
use serde_json::json;

#[test]
fn test_homogeneous_array_passes() {
    let retries = array_of(number());
    assert!(value_conforms(&retries, &Value::from(json!([1, 2, 3]))));
}

#[test]
fn test_empty_array_always_passes() {
    assert!(value_conforms(&array_of(number()), &Value::from(json!([]))));
    assert!(value_conforms(&array_of(string()), &Value::from(json!([]))));
}

#[test]
fn test_first_bad_element_reports_indexed_path() {
    let retries = array_of(number());
    let value = Value::from(json!([1, "x", 3]));
    let err = check_value(&retries, &value, "field", "Config").unwrap_err();
    let invalid = err.as_invalid().expect("validation failure");
    assert_eq!(invalid.path.to_string(), "value[1]");
    assert_eq!(
        err.to_string(),
        "Invalid field `value[1]` of type `string`, expected `number`."
    );
}

#[test]
fn test_first_failure_wins_across_elements() {
    let retries = array_of(number());
    // Elements 1 and 2 are both invalid; index order decides.
    let value = Value::from(json!([0, "a", "b"]));
    let err = check_value(&retries, &value, "field", "Config").unwrap_err();
    assert!(err.to_string().contains("`value[1]`"));
}

#[test]
fn test_non_array_value_names_actual_kind() {
    let retries = array_of(number());
    let err = check_value(&retries, &Value::from(json!({"0": 1})), "field", "Config").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid field `value` of type `object` supplied to `Config`, expected an array."
    );

    let err = check_value(&retries, &Value::from("123"), "field", "Config").unwrap_err();
    assert!(err.to_string().contains("of type `string`"));
}

#[test]
fn test_nested_array_of_array() {
    let grid = array_of(array_of(number()));
    assert!(value_conforms(&grid, &Value::from(json!([[1], [2, 3]]))));

    let err = check_value(
        &grid,
        &Value::from(json!([[1], [2, "x"]])),
        "field",
        "Grid",
    )
    .unwrap_err();
    let invalid = err.as_invalid().expect("validation failure");
    assert_eq!(invalid.path.to_string(), "value[1][1]");
}

#[test]
fn test_array_of_shapes() {
    let users = array_of(shape(
        Schema::new()
            .field("name", string())
            .field("role", one_of(json!(["admin", "user"])).optional()),
    ));
    assert!(value_conforms(
        &users,
        &Value::from(json!([{"name": "ada"}, {"name": "tim", "role": "admin"}]))
    ));

    let err = check_value(
        &users,
        &Value::from(json!([{"name": "ada"}, {"role": "admin"}])),
        "field",
        "Team",
    )
    .unwrap_err();
    let invalid = err.as_invalid().expect("validation failure");
    assert_eq!(invalid.path.to_string(), "value[1].name");
    assert_eq!(invalid.code, "required");
}

#[test]
fn test_null_element_fails_under_required_element_checker() {
    let retries = array_of(number());
    let err = check_value(&retries, &Value::from(json!([null])), "field", "C").unwrap_err();
    assert!(err.to_string().ends_with("but its value is `null`."));
}

#[test]
fn test_null_element_passes_under_optional_element_checker() {
    let retries = array_of(number().optional());
    assert!(value_conforms(&retries, &Value::from(json!([1, null, 3]))));
}
