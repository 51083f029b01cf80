//! Checker factories and the combinator algebra.
//!
//! Every factory returns a [`Checker`]: a shared validation rule behind a
//! required/optional presence gate. Leaves check one value; combinators
//! take other checkers and delegate, so a schema is just a tree of
//! checkers built by ordinary function calls:
//!
//! ```rust
//! use gatecheck::checkers::{array_of, number, one_of, shape, string};
//! use gatecheck::{check_fields, Schema, Value};
//! use indexmap::IndexMap;
//! use serde_json::json;
//!
//! let schema = Schema::new()
//!     .field("host", string())
//!     .field("port", number())
//!     .field("mode", one_of(json!(["fast", "safe"])).optional())
//!     .field("mirrors", array_of(string()).optional());
//!
//! let mut values = IndexMap::new();
//! values.insert("host".to_string(), Value::from("localhost"));
//! values.insert("port".to_string(), Value::from(8080));
//!
//! assert!(check_fields(&schema, &values, "field", "Config").is_ok());
//! ```

mod array_of;
mod context;
mod instance;
mod object_of;
mod one_of;
mod one_of_type;
mod presence;
mod primitive;
mod ref_checker;
mod shape;
mod traits;

pub use context::CheckContext;
pub use presence::{Checker, Presence};
pub use traits::Rule;

use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::kind::{self, Kind};
use crate::schema::Schema;
use crate::value::Value;

use array_of::ArrayOfRule;
use instance::InstanceOfRule;
use object_of::ObjectOfRule;
use one_of::OneOfRule;
use one_of_type::OneOfTypeRule;
use primitive::{AnyRule, PrimitiveRule};
use ref_checker::RefRule;
use shape::ShapeRule;

/// A checker that accepts every present value.
pub fn any() -> Checker {
    Checker::from_rule(AnyRule)
}

/// Requires an array.
pub fn array() -> Checker {
    Checker::from_rule(PrimitiveRule::new(Kind::Array))
}

/// Requires a boolean.
pub fn boolean() -> Checker {
    Checker::from_rule(PrimitiveRule::new(Kind::Bool))
}

/// Requires a function.
pub fn func() -> Checker {
    Checker::from_rule(PrimitiveRule::new(Kind::Func))
}

/// Requires a number.
pub fn number() -> Checker {
    Checker::from_rule(PrimitiveRule::new(Kind::Number))
}

/// Requires an object (maps, dates, regexps and instances all classify as
/// `object` at matching granularity).
pub fn object() -> Checker {
    Checker::from_rule(PrimitiveRule::new(Kind::Object))
}

/// Requires a string.
pub fn string() -> Checker {
    Checker::from_rule(PrimitiveRule::new(Kind::String))
}

/// Requires a symbol.
pub fn symbol() -> Checker {
    Checker::from_rule(PrimitiveRule::new(Kind::Symbol))
}

/// Requires every element of an array to satisfy `element`.
pub fn array_of(element: Checker) -> Checker {
    Checker::from_rule(ArrayOfRule::new(element))
}

/// Requires every own entry of an object to satisfy `values`.
pub fn object_of(values: Checker) -> Checker {
    Checker::from_rule(ObjectOfRule::new(values))
}

/// Requires membership in a fixed set of allowed values, compared with
/// same-value semantics.
///
/// The allowed set is given as a [`Value`], normally an array (anything
/// convertible works, including `serde_json::json!` literals). Handing it
/// something that is not an array does **not** fail: the checker degrades
/// to always-pass and the problem is reported through the default
/// diagnostic sink, so one bad schema definition cannot take down
/// unrelated validations sharing the checker. Use [`one_of_with`] to
/// direct the report elsewhere.
///
/// ```rust
/// use gatecheck::checkers::one_of;
/// use gatecheck::{value_conforms, Value};
/// use serde_json::json;
///
/// let state = one_of(json!(["queued", "running", "done"]));
/// assert!(value_conforms(&state, &Value::from("queued")));
/// assert!(!value_conforms(&state, &Value::from("paused")));
/// ```
pub fn one_of(values: impl Into<Value>) -> Checker {
    one_of_with(values, &TracingSink)
}

/// [`one_of`] with an explicit sink for the degraded-construction report.
pub fn one_of_with(values: impl Into<Value>, sink: &dyn DiagnosticSink) -> Checker {
    match values.into() {
        Value::Array(allowed) => Checker::from_rule(OneOfRule::new(allowed)),
        other => {
            sink.warn(&format!(
                "invalid argument supplied to one_of: expected an array of allowed values, \
                 got `{}`; this checker will pass every value",
                kind::precise(&other),
            ));
            any()
        }
    }
}

/// Requires at least one member checker to accept the value.
///
/// Members run in order and the first pass wins; member checker-ness is
/// enforced by the type system at construction.
pub fn one_of_type(members: Vec<Checker>) -> Checker {
    Checker::from_rule(OneOfTypeRule::new(members))
}

/// Requires an object matching `schema` field-by-field; keys the schema
/// does not declare are ignored.
pub fn shape(schema: Schema) -> Checker {
    Checker::from_rule(ShapeRule::open(schema))
}

/// Requires an object matching `schema` exactly: declared fields are
/// checked as in [`shape`], and any key the schema does not declare is
/// rejected.
pub fn exact(schema: Schema) -> Checker {
    Checker::from_rule(ShapeRule::exact(schema))
}

/// Requires a [`Value::Instance`] of the nominal type `T`.
///
/// ```rust
/// use gatecheck::checkers::instance_of;
/// use gatecheck::{value_conforms, Instance, Value};
///
/// struct Connection;
///
/// let checker = instance_of::<Connection>();
/// assert!(value_conforms(&checker, &Value::Instance(Instance::of(Connection))));
/// assert!(!value_conforms(&checker, &Value::from("not a connection")));
/// ```
pub fn instance_of<T: 'static>() -> Checker {
    Checker::from_rule(InstanceOfRule::of::<T>())
}

/// A by-name reference to a checker registered in a
/// [`CheckerRegistry`](crate::CheckerRegistry); resolution is deferred to
/// check time, which is what allows recursive shapes.
pub fn ref_(name: impl Into<String>) -> Checker {
    Checker::from_rule(RefRule::new(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_one_of_degrades_on_non_array() {
        let warnings = Mutex::new(Vec::new());
        let sink = |m: &str| warnings.lock().unwrap().push(m.to_string());

        let checker = one_of_with(Value::from("oops"), &sink);

        let ctx = CheckContext::new("field", "X").enter_field("v");
        // Degraded checker passes arbitrary values.
        assert!(checker.check(Some(&Value::from(123)), &ctx).is_pass());
        assert!(checker.check(Some(&Value::Bool(false)), &ctx).is_pass());

        let warnings = warnings.lock().unwrap();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("one_of"));
        assert!(warnings[0].contains("`string`"));
    }

    #[test]
    fn test_one_of_accepts_array_without_warning() {
        let warnings = Mutex::new(Vec::new());
        let sink = |m: &str| warnings.lock().unwrap().push(m.to_string());

        let checker = one_of_with(vec![Value::from(1)], &sink);
        let ctx = CheckContext::new("field", "X").enter_field("v");
        assert!(checker.check(Some(&Value::from(1)), &ctx).is_pass());
        assert!(!checker.check(Some(&Value::from(2)), &ctx).is_pass());
        assert!(warnings.lock().unwrap().is_empty());
    }
}
