use gatecheck::checkers::{one_of, one_of_with};
use gatecheck::{check_value, value_conforms, Value};
use serde_json::json;
use std::sync::Mutex;

#[test]
fn test_matches_each_allowed_value() {
    let state = one_of(json!(["queued", "running", "done"]));
    assert!(value_conforms(&state, &Value::from("queued")));
    assert!(value_conforms(&state, &Value::from("running")));
    assert!(value_conforms(&state, &Value::from("done")));
    assert!(!value_conforms(&state, &Value::from("paused")));
}

#[test]
fn test_mixed_kind_set() {
    let flag = one_of(json!([0, 1, "auto", null]));
    assert!(value_conforms(&flag, &Value::from(0)));
    assert!(value_conforms(&flag, &Value::from("auto")));
    assert!(!value_conforms(&flag, &Value::from(2)));
    assert!(!value_conforms(&flag, &Value::from("manual")));
}

#[test]
fn test_failure_lists_the_full_set_verbatim() {
    let state = one_of(json!(["queued", "running"]));
    let err = check_value(&state, &Value::from("done"), "field", "Job").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid field `value` of value `done` supplied to `Job`, \
         expected one of [\"queued\",\"running\"]."
    );
}

#[test]
fn test_nan_is_self_equal() {
    let sentinel = one_of(vec![Value::Number(f64::NAN)]);
    assert!(value_conforms(&sentinel, &Value::Number(f64::NAN)));
}

#[test]
fn test_signed_zeros_are_distinct() {
    let zero = one_of(vec![Value::Number(0.0)]);
    assert!(value_conforms(&zero, &Value::Number(0.0)));
    assert!(!value_conforms(&zero, &Value::Number(-0.0)));
}

#[test]
fn test_same_value_not_coercing_equality() {
    let set = one_of(json!([1, "1"]));
    assert!(value_conforms(&set, &Value::from(1)));
    assert!(value_conforms(&set, &Value::from("1")));
    assert!(!value_conforms(&set, &Value::Bool(true)));
}

#[test]
fn test_non_array_argument_degrades_to_always_pass() {
    let warnings = Mutex::new(Vec::new());
    let sink = |m: &str| warnings.lock().unwrap().push(m.to_string());

    let degraded = one_of_with(json!("not-an-array"), &sink);

    // Construction did not fail, and the checker accepts anything.
    assert!(value_conforms(&degraded, &Value::from("whatever")));
    assert!(value_conforms(&degraded, &Value::from(42)));

    let warnings = warnings.lock().unwrap();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("expected an array"));
}

#[test]
fn test_degraded_checker_still_gates_presence() {
    let degraded = one_of_with(json!(42), &|_m: &str| {});
    // Required by default, so null still fails even though the rule
    // degraded to always-pass.
    assert!(check_value(&degraded, &Value::Null, "field", "X").is_err());
    assert!(value_conforms(&degraded.optional(), &Value::Null));
}

#[test]
fn test_structural_match_for_container_members() {
    let preset = one_of(json!([[1, 2], {"mode": "fast"}]));
    assert!(value_conforms(&preset, &Value::from(json!([1, 2]))));
    assert!(value_conforms(&preset, &Value::from(json!({"mode": "fast"}))));
    assert!(!value_conforms(&preset, &Value::from(json!([2, 1]))));
}
