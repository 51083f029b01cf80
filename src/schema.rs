//! The named collection of checkers describing an expected value mapping.

use indexmap::IndexMap;

use crate::checkers::Checker;

/// An insertion-ordered mapping from field name to [`Checker`].
///
/// A `Schema` is what [`shape`](crate::checkers::shape),
/// [`exact`](crate::checkers::exact) and
/// [`check_fields`](crate::check_fields) consume. Field order matters:
/// when several fields are invalid, the first one *in declaration order*
/// is the failure that surfaces, so declaring important fields first is a
/// meaningful choice, not a style preference.
///
/// There is no nesting restriction — a field's checker may itself be any
/// combinator, including another shape.
///
/// # Example
///
/// ```rust
/// use gatecheck::checkers::{boolean, number, shape, string};
/// use gatecheck::Schema;
///
/// let address = Schema::new()
///     .field("street", string())
///     .field("city", string());
///
/// let user = Schema::new()
///     .field("name", string())
///     .field("age", number().optional())
///     .field("address", shape(address))
///     .field("active", boolean().optional());
///
/// assert_eq!(user.len(), 4);
/// ```
#[derive(Clone, Default)]
pub struct Schema {
    fields: IndexMap<String, Checker>,
}

impl Schema {
    /// Creates an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a field; re-declaring a name replaces its checker in
    /// place, keeping the original position.
    pub fn field(mut self, name: impl Into<String>, checker: Checker) -> Self {
        self.fields.insert(name.into(), checker);
        self
    }

    /// Looks up a field's checker.
    pub fn get(&self, name: &str) -> Option<&Checker> {
        self.fields.get(name)
    }

    /// Iterates fields in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Checker)> {
        self.fields.iter().map(|(name, checker)| (name.as_str(), checker))
    }

    /// Iterates field names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true when no fields are declared.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
