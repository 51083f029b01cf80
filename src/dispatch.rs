//! The dispatch layer: running named checkers over named values.
//!
//! This is where the combinator algebra meets calling code. A [`Schema`]
//! names the checkers, an [`IndexMap`] names the values, and dispatch runs
//! them in schema key order, raising the first failure — there is no
//! aggregation across fields. The single-value entry points wrap one value
//! in the same pipeline.

use indexmap::IndexMap;

use crate::checkers::{CheckContext, Checker};
use crate::error::CheckFailure;
use crate::schema::Schema;
use crate::value::{Value, ANONYMOUS};

/// Location tag used when the caller has nothing more specific to say.
pub const DEFAULT_LOCATION: &str = "value";

/// Subject name used when the caller has nothing more specific to say.
pub const DEFAULT_SUBJECT: &str = ANONYMOUS;

/// Synthetic field name the single-value entry points check under.
pub(crate) const VALUE_FIELD: &str = "value";

/// Checks every schema field against the corresponding value.
///
/// Fields run in schema declaration order; each checker receives the named
/// value (or its absence) with the path rooted at the field name. The
/// first non-pass verdict is raised immediately — a validation failure
/// propagates its message verbatim as [`CheckFailure::Invalid`], a broken
/// schema as [`CheckFailure::Contract`] — and later fields are not
/// consulted.
///
/// `location` and `subject` are free text for messages only (e.g.
/// `"field"` / `"Config"` reads as *Invalid field `port` ... supplied to
/// `Config`*).
///
/// # Example
///
/// ```rust
/// use gatecheck::checkers::{number, string};
/// use gatecheck::{check_fields, Schema, Value};
/// use indexmap::IndexMap;
///
/// let schema = Schema::new()
///     .field("host", string())
///     .field("port", number());
///
/// let mut values = IndexMap::new();
/// values.insert("host".to_string(), Value::from("localhost"));
/// values.insert("port".to_string(), Value::from("not a number"));
///
/// let err = check_fields(&schema, &values, "field", "Config").unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "Invalid field `port` of type `string`, expected `number`."
/// );
/// ```
pub fn check_fields(
    schema: &Schema,
    values: &IndexMap<String, Value>,
    location: &str,
    subject: &str,
) -> Result<(), CheckFailure> {
    check_fields_in(&CheckContext::new(location, subject), schema, values)
}

/// Runs a schema under an existing base context (registry-aware callers
/// build their own).
pub(crate) fn check_fields_in(
    base: &CheckContext,
    schema: &Schema,
    values: &IndexMap<String, Value>,
) -> Result<(), CheckFailure> {
    for (name, checker) in schema.iter() {
        checker
            .check(values.get(name), &base.enter_field(name))
            .into_result()?;
    }
    Ok(())
}

/// Checks a single value against a single checker, raising on failure.
///
/// The value is wrapped as the lone synthetic field `"value"` and run
/// through the same pipeline as [`check_fields`], so messages read
/// consistently (path `value`, your location tag and subject name).
///
/// # Example
///
/// ```rust
/// use gatecheck::checkers::string;
/// use gatecheck::{check_value, Value};
///
/// assert!(check_value(&string(), &Value::from("ok"), "parameter", "rename").is_ok());
/// assert!(check_value(&string(), &Value::from(5), "parameter", "rename").is_err());
/// ```
pub fn check_value(
    checker: &Checker,
    value: &Value,
    location: &str,
    subject: &str,
) -> Result<(), CheckFailure> {
    let ctx = CheckContext::new(location, subject).enter_field(VALUE_FIELD);
    checker.check(Some(value), &ctx).into_result()
}

/// The non-raising variant of [`check_value`]: true when the value
/// conforms, false otherwise, with default location and subject.
///
/// # Example
///
/// ```rust
/// use gatecheck::checkers::string;
/// use gatecheck::{value_conforms, Value};
///
/// assert!(value_conforms(&string(), &Value::from("ok")));
/// assert!(!value_conforms(&string(), &Value::from(5)));
/// ```
pub fn value_conforms(checker: &Checker, value: &Value) -> bool {
    check_value(checker, value, DEFAULT_LOCATION, DEFAULT_SUBJECT).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkers::{number, string};

    fn values(entries: &[(&str, Value)]) -> IndexMap<String, Value> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_all_fields_pass() {
        let schema = Schema::new().field("a", string()).field("b", number());
        let values = values(&[("a", Value::from("x")), ("b", Value::from(1))]);
        assert!(check_fields(&schema, &values, "field", "T").is_ok());
    }

    #[test]
    fn test_schema_order_decides_first_failure() {
        let schema = Schema::new().field("a", string()).field("b", number());
        // Both fields are invalid; "a" is declared first, so "a" surfaces.
        let values = values(&[("b", Value::from("x")), ("a", Value::from(1))]);
        let err = check_fields(&schema, &values, "field", "T").unwrap_err();
        let invalid = err.as_invalid().expect("validation failure");
        assert_eq!(invalid.path.to_string(), "a");
    }

    #[test]
    fn test_value_conforms_does_not_raise() {
        assert!(value_conforms(&number(), &Value::from(5)));
        assert!(!value_conforms(&string(), &Value::from(5)));
    }
}
