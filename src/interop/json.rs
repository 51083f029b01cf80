//! Conversions between `serde_json::Value` and [`Value`].

use indexmap::IndexMap;

use crate::value::Value;

/// JSON converts without loss; object key order is preserved, numbers
/// become `f64`.
///
/// ```rust
/// use gatecheck::Value;
/// use serde_json::json;
///
/// let value = Value::from(json!({"b": 1, "a": [true, null]}));
/// let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
/// assert_eq!(keys, vec!["b", "a"]);
/// ```
impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(entries) => {
                let mut map = IndexMap::with_capacity(entries.len());
                for (key, entry) in entries {
                    map.insert(key, Value::from(entry));
                }
                Value::Object(map)
            }
        }
    }
}

/// Lossy serialization for message embedding.
///
/// Kinds JSON cannot express are rendered as descriptive strings: symbols
/// as `Symbol(desc)`, functions as `[Function]`, dates as RFC 3339
/// strings, regexps as `/pattern/`, instances as `[instance of Name]`.
/// Non-finite numbers become `null`, matching JSON serialization
/// semantics.
pub fn to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Number(n) => serde_json::Number::from_f64(*n)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        Value::String(s) => serde_json::Value::String(s.clone()),
        Value::Symbol(s) => {
            serde_json::Value::String(format!("Symbol({})", s.description().unwrap_or("")))
        }
        Value::Array(items) => serde_json::Value::Array(items.iter().map(to_json).collect()),
        Value::Object(entries) => {
            let mut map = serde_json::Map::with_capacity(entries.len());
            for (key, entry) in entries {
                map.insert(key.clone(), to_json(entry));
            }
            serde_json::Value::Object(map)
        }
        Value::Function(_) => serde_json::Value::String("[Function]".to_string()),
        Value::Date(d) => serde_json::Value::String(d.to_rfc3339()),
        Value::Regexp(r) => serde_json::Value::String(format!("/{}/", r.as_str())),
        Value::Instance(i) => {
            serde_json::Value::String(format!("[instance of {}]", i.type_name()))
        }
    }
}

/// Renders a value for inline message embedding.
///
/// Scalars render bare (`done`, `5`, `true`, `null`, `NaN`) so messages
/// read naturally; containers render as compact JSON.
pub fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Symbol(s) => format!("Symbol({})", s.description().unwrap_or("")),
        Value::Function(_) => "[Function]".to_string(),
        Value::Date(d) => d.to_rfc3339(),
        Value::Regexp(r) => format!("/{}/", r.as_str()),
        Value::Instance(i) => format!("[instance of {}]", i.type_name()),
        container => to_json(container).to_string(),
    }
}

/// Renders a value as indented JSON for multi-line diagnostics.
pub fn describe_pretty(value: &Value) -> String {
    serde_json::to_string_pretty(&to_json(value)).unwrap_or_else(|_| describe(value))
}
