//! The dynamic value model checkers discriminate over.
//!
//! [`Value`] covers every kind the checker algebra can tell apart: the JSON
//! scalars and containers plus symbols, functions, dates, regular
//! expressions and type-erased nominal instances. Absent values
//! ("undefined") are *not* a variant; absence is represented by
//! `Option::None` at the checking interface, while [`Value::Null`] is the
//! explicit null. Both collapse to the same branch of the presence gate,
//! but produce distinct wording in required-failure messages.
//!
//! Equality between values uses [`same_value`] semantics: `NaN` is equal to
//! itself, `+0.0` and `-0.0` are distinct, and identity-bearing values
//! (symbols, functions, instances) compare by identity.

use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use regex::Regex;

/// Placeholder used where a nominal type has no discoverable name.
pub(crate) const ANONYMOUS: &str = "<<anonymous>>";

/// The callable payload of [`Value::Function`].
pub type NativeFunction = Arc<dyn Fn(&[Value]) -> Value + Send + Sync>;

/// A dynamic runtime value.
///
/// `Value` is cheap to clone: containers clone their contents, while
/// identity-bearing payloads (functions, regexps, instances, symbols) are
/// reference-counted and clone by bumping a count.
///
/// # Example
///
/// ```rust
/// use gatecheck::Value;
/// use serde_json::json;
///
/// // Values can be built directly...
/// let direct = Value::from("hello");
///
/// // ...or converted from JSON.
/// let config = Value::from(json!({"host": "localhost", "port": 8080}));
/// assert!(config.as_object().is_some());
/// ```
#[derive(Clone)]
pub enum Value {
    /// Explicit null.
    Null,
    /// Boolean.
    Bool(bool),
    /// Double-precision number. `NaN` and signed zeros are representable
    /// and distinguished by [`same_value`].
    Number(f64),
    /// UTF-8 string.
    String(String),
    /// Identity-equal symbol, optionally described.
    Symbol(Symbol),
    /// Ordered sequence.
    Array(Vec<Value>),
    /// Insertion-ordered map of own entries.
    Object(IndexMap<String, Value>),
    /// Opaque callable.
    Function(NativeFunction),
    /// Calendar timestamp.
    Date(DateTime<Utc>),
    /// Compiled regular expression.
    Regexp(Arc<Regex>),
    /// Type-erased nominal value, checked by `instance_of`.
    Instance(Instance),
}

impl Value {
    /// Wraps a callable as a function value.
    pub fn function<F>(f: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Value::Function(Arc::new(f))
    }

    /// Compiles `pattern` into a regexp value.
    pub fn regexp(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Value::Regexp(Arc::new(Regex::new(pattern)?)))
    }

    /// Wraps a timestamp as a date value.
    pub fn date(when: DateTime<Utc>) -> Self {
        Value::Date(when)
    }

    /// Returns true for [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the string slice if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the number if this is a number value.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the elements if this is an array value.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the own entries if this is an object value.
    pub fn as_object(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Value::Object(entries) => Some(entries),
            _ => None,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "Null"),
            Value::Bool(b) => write!(f, "Bool({})", b),
            Value::Number(n) => write!(f, "Number({})", n),
            Value::String(s) => write!(f, "String({:?})", s),
            Value::Symbol(s) => write!(f, "{:?}", s),
            Value::Array(items) => f.debug_tuple("Array").field(items).finish(),
            Value::Object(entries) => f.debug_tuple("Object").field(entries).finish(),
            Value::Function(_) => write!(f, "Function(..)"),
            Value::Date(d) => write!(f, "Date({})", d.to_rfc3339()),
            Value::Regexp(r) => write!(f, "Regexp(/{}/)", r.as_str()),
            Value::Instance(i) => write!(f, "Instance({})", i.type_name()),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Symbol> for Value {
    fn from(s: Symbol) -> Self {
        Value::Symbol(s)
    }
}

impl From<Instance> for Value {
    fn from(i: Instance) -> Self {
        Value::Instance(i)
    }
}

/// An identity-equal symbol.
///
/// Two symbols are the same value only if one is a clone of the other;
/// creating a second symbol with the same description yields a distinct
/// symbol.
///
/// ```rust
/// use gatecheck::{same_value, Symbol, Value};
///
/// let a = Symbol::with_description("id");
/// let b = Symbol::with_description("id");
///
/// assert!(same_value(&Value::Symbol(a.clone()), &Value::Symbol(a.clone())));
/// assert!(!same_value(&Value::Symbol(a), &Value::Symbol(b)));
/// ```
#[derive(Clone)]
pub struct Symbol(Arc<SymbolInner>);

struct SymbolInner {
    description: Option<String>,
}

impl Symbol {
    /// Creates a fresh, undescribed symbol.
    pub fn new() -> Self {
        Symbol(Arc::new(SymbolInner { description: None }))
    }

    /// Creates a fresh symbol carrying a description (display only).
    pub fn with_description(description: impl Into<String>) -> Self {
        Symbol(Arc::new(SymbolInner {
            description: Some(description.into()),
        }))
    }

    /// Returns the description, if any.
    pub fn description(&self) -> Option<&str> {
        self.0.description.as_deref()
    }

    /// Identity comparison; clones of one symbol are the same symbol.
    pub fn same_symbol(&self, other: &Symbol) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Default for Symbol {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.description().unwrap_or(""))
    }
}

/// A type-erased nominal value.
///
/// `Instance` carries an arbitrary Rust value behind `dyn Any` together
/// with its recorded type name, so `instance_of` can both test the nominal
/// relationship and name the actual type in failure messages. Instances
/// built with [`Instance::anonymous`] have no discoverable name and render
/// as `<<anonymous>>`.
///
/// ```rust
/// use gatecheck::{Instance, Value};
///
/// struct Connection {
///     #[allow(dead_code)]
///     id: u32,
/// }
///
/// let value = Value::Instance(Instance::of(Connection { id: 7 }));
/// match value {
///     Value::Instance(inst) => {
///         assert!(inst.is::<Connection>());
///         assert_eq!(inst.type_name(), "Connection");
///     }
///     _ => unreachable!(),
/// }
/// ```
#[derive(Clone)]
pub struct Instance {
    value: Arc<dyn Any + Send + Sync>,
    type_id: TypeId,
    type_name: Option<&'static str>,
}

impl Instance {
    /// Erases `value`, recording its type name for messages.
    pub fn of<T: Any + Send + Sync>(value: T) -> Self {
        Instance {
            value: Arc::new(value),
            type_id: TypeId::of::<T>(),
            type_name: Some(short_type_name::<T>()),
        }
    }

    /// Erases `value` without recording a name; failure messages fall back
    /// to the anonymous placeholder.
    pub fn anonymous<T: Any + Send + Sync>(value: T) -> Self {
        Instance {
            value: Arc::new(value),
            type_id: TypeId::of::<T>(),
            type_name: None,
        }
    }

    /// Tests the nominal relationship against `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }

    /// Tests the nominal relationship against an erased type id.
    pub(crate) fn is_type_id(&self, expected: TypeId) -> bool {
        self.type_id == expected
    }

    /// Borrows the erased value back as `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }

    /// The recorded type name, or the anonymous placeholder.
    pub fn type_name(&self) -> &str {
        self.type_name.unwrap_or(ANONYMOUS)
    }

    fn same_instance(&self, other: &Instance) -> bool {
        Arc::ptr_eq(&self.value, &other.value)
    }
}

/// Strips the module path from a type name for display.
pub(crate) fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

/// Same-value equality over dynamic values.
///
/// This is deliberately not ordinary float equality: `NaN` is equal to
/// itself and `+0.0` is distinct from `-0.0`, so an enum checker built over
/// `[NaN]` accepts `NaN` and one built over `[+0.0]` rejects `-0.0`.
/// Arrays and objects compare structurally (element-wise same-value);
/// symbols, functions and instances compare by identity; regexps compare by
/// pattern.
///
/// # Example
///
/// ```rust
/// use gatecheck::{same_value, Value};
///
/// assert!(same_value(&Value::Number(f64::NAN), &Value::Number(f64::NAN)));
/// assert!(!same_value(&Value::Number(0.0), &Value::Number(-0.0)));
/// assert!(same_value(&Value::from("a"), &Value::from("a")));
/// ```
pub fn same_value(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => same_value_number(*x, *y),
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Symbol(x), Value::Symbol(y)) => x.same_symbol(y),
        (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(a, b)| same_value(a, b))
        }
        (Value::Object(x), Value::Object(y)) => {
            x.len() == y.len()
                && x.iter()
                    .all(|(k, v)| y.get(k).is_some_and(|w| same_value(v, w)))
        }
        (Value::Function(x), Value::Function(y)) => Arc::ptr_eq(x, y),
        (Value::Date(x), Value::Date(y)) => x == y,
        (Value::Regexp(x), Value::Regexp(y)) => x.as_str() == y.as_str(),
        (Value::Instance(x), Value::Instance(y)) => x.same_instance(y),
        _ => false,
    }
}

fn same_value_number(x: f64, y: f64) -> bool {
    if x.is_nan() && y.is_nan() {
        return true;
    }
    // Bit comparison keeps +0.0 and -0.0 apart while agreeing with == on
    // every other non-NaN pair.
    x.to_bits() == y.to_bits()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_value_nan_is_self_equal() {
        assert!(same_value(
            &Value::Number(f64::NAN),
            &Value::Number(f64::NAN)
        ));
    }

    #[test]
    fn test_same_value_signed_zeros_distinct() {
        assert!(!same_value(&Value::Number(0.0), &Value::Number(-0.0)));
        assert!(same_value(&Value::Number(0.0), &Value::Number(0.0)));
        assert!(same_value(&Value::Number(-0.0), &Value::Number(-0.0)));
    }

    #[test]
    fn test_same_value_scalars() {
        assert!(same_value(&Value::Null, &Value::Null));
        assert!(same_value(&Value::Bool(true), &Value::Bool(true)));
        assert!(!same_value(&Value::Bool(true), &Value::Bool(false)));
        assert!(same_value(&Value::from("a"), &Value::from("a")));
        assert!(!same_value(&Value::from("a"), &Value::from("b")));
    }

    #[test]
    fn test_same_value_cross_kind_is_false() {
        assert!(!same_value(&Value::from("1"), &Value::from(1)));
        assert!(!same_value(&Value::Null, &Value::Bool(false)));
        assert!(!same_value(&Value::from(0), &Value::Bool(false)));
    }

    #[test]
    fn test_same_value_arrays_structural() {
        let a = Value::Array(vec![Value::from(1), Value::from(2)]);
        let b = Value::Array(vec![Value::from(1), Value::from(2)]);
        let c = Value::Array(vec![Value::from(2), Value::from(1)]);
        assert!(same_value(&a, &b));
        assert!(!same_value(&a, &c));
    }

    #[test]
    fn test_same_value_objects_ignore_entry_order() {
        let mut x = IndexMap::new();
        x.insert("a".to_string(), Value::from(1));
        x.insert("b".to_string(), Value::from(2));
        let mut y = IndexMap::new();
        y.insert("b".to_string(), Value::from(2));
        y.insert("a".to_string(), Value::from(1));
        assert!(same_value(&Value::Object(x), &Value::Object(y)));
    }

    #[test]
    fn test_symbols_are_identity_equal() {
        let s = Symbol::with_description("tag");
        let other = Symbol::with_description("tag");
        assert!(same_value(
            &Value::Symbol(s.clone()),
            &Value::Symbol(s.clone())
        ));
        assert!(!same_value(&Value::Symbol(s), &Value::Symbol(other)));
    }

    #[test]
    fn test_functions_are_identity_equal() {
        let f = Value::function(|_| Value::Null);
        let g = Value::function(|_| Value::Null);
        assert!(same_value(&f, &f.clone()));
        assert!(!same_value(&f, &g));
    }

    #[test]
    fn test_instance_downcast_and_name() {
        struct Widget(u8);

        let inst = Instance::of(Widget(9));
        assert!(inst.is::<Widget>());
        assert!(!inst.is::<String>());
        assert_eq!(inst.downcast_ref::<Widget>().map(|w| w.0), Some(9));
        assert_eq!(inst.type_name(), "Widget");

        let anon = Instance::anonymous(Widget(1));
        assert_eq!(anon.type_name(), ANONYMOUS);
    }

    #[test]
    fn test_regexps_compare_by_pattern() {
        let a = Value::regexp("^a+$").unwrap();
        let b = Value::regexp("^a+$").unwrap();
        let c = Value::regexp("^b+$").unwrap();
        assert!(same_value(&a, &b));
        assert!(!same_value(&a, &c));
    }
}
