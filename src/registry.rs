//! Named checker storage and reference resolution.
//!
//! This module provides [`CheckerRegistry`], a thread-safe store of named
//! checkers. Registering a checker under a name lets other checkers point
//! at it with [`ref_`](crate::checkers::ref_), which is how shared and
//! recursive shapes are expressed.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::checkers::{CheckContext, Checker};
use crate::dispatch::{self, DEFAULT_LOCATION, DEFAULT_SUBJECT};
use crate::error::{CheckFailure, ContractViolation};
use crate::path::ValuePath;
use crate::schema::Schema;
use crate::value::Value;

/// Reference-depth bound applied when no registry configures one.
pub(crate) const DEFAULT_MAX_DEPTH: usize = 100;

/// A thread-safe registry of named checkers.
///
/// Checks started through the registry carry a handle to it in their
/// context, so `ref_` checkers anywhere in the tree can resolve. A depth
/// bound (default 100) stops self-referential schemas from descending
/// forever into cyclic *values*; hitting the bound is a contract
/// violation, not a validation failure.
///
/// Cloning a registry clones a handle — both clones see the same
/// registrations. Reads are concurrent; registration takes the write
/// lock.
///
/// # Example
///
/// ```rust
/// use gatecheck::checkers::{array_of, number, ref_, shape, string};
/// use gatecheck::{CheckerRegistry, Schema, Value};
/// use serde_json::json;
///
/// let registry = CheckerRegistry::new();
/// registry
///     .register(
///         "Node",
///         shape(
///             Schema::new()
///                 .field("label", string())
///                 .field("children", array_of(ref_("Node")).optional()),
///         ),
///     )
///     .unwrap();
///
/// let tree = Value::from(json!({
///     "label": "root",
///     "children": [{"label": "leaf"}],
/// }));
/// assert!(registry.check_named("Node", &tree, "field", "Tree").is_ok());
/// ```
pub struct CheckerRegistry {
    checkers: Arc<RwLock<HashMap<String, Checker>>>,
    max_depth: usize,
}

impl CheckerRegistry {
    /// Creates an empty registry with the default depth bound.
    pub fn new() -> Self {
        Self {
            checkers: Arc::new(RwLock::new(HashMap::new())),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Sets the reference-depth bound.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Registers a checker under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateName`] if the name is taken.
    pub fn register(
        &self,
        name: impl Into<String>,
        checker: Checker,
    ) -> Result<(), RegistryError> {
        let name = name.into();
        let mut checkers = self.checkers.write();
        if checkers.contains_key(&name) {
            return Err(RegistryError::DuplicateName(name));
        }
        checkers.insert(name, checker);
        Ok(())
    }

    /// Looks up a registered checker.
    pub fn get(&self, name: &str) -> Option<Checker> {
        self.checkers.read().get(name).cloned()
    }

    /// Checks a single value against the checker registered under `name`.
    ///
    /// The value is treated as the lone synthetic field `"value"`, exactly
    /// like [`check_value`](crate::check_value). An unregistered `name` is
    /// a contract violation.
    pub fn check_named(
        &self,
        name: &str,
        value: &Value,
        location: &str,
        subject: &str,
    ) -> Result<(), CheckFailure> {
        let Some(checker) = self.get(name) else {
            return Err(CheckFailure::Contract(ContractViolation::UnresolvedRef {
                name: name.to_string(),
                path: ValuePath::root(),
            }));
        };
        self.check_value(&checker, value, location, subject)
    }

    /// [`check_value`](crate::check_value) with references resolving
    /// through this registry.
    pub fn check_value(
        &self,
        checker: &Checker,
        value: &Value,
        location: &str,
        subject: &str,
    ) -> Result<(), CheckFailure> {
        let ctx = CheckContext::new(location, subject).with_registry(self.clone(), self.max_depth);
        checker
            .check(Some(value), &ctx.enter_field(dispatch::VALUE_FIELD))
            .into_result()
    }

    /// [`check_fields`](crate::check_fields) with references resolving
    /// through this registry.
    pub fn check_fields(
        &self,
        schema: &Schema,
        values: &IndexMap<String, Value>,
        location: &str,
        subject: &str,
    ) -> Result<(), CheckFailure> {
        let ctx = CheckContext::new(location, subject).with_registry(self.clone(), self.max_depth);
        dispatch::check_fields_in(&ctx, schema, values)
    }

    /// The non-raising variant of [`check_named`](Self::check_named).
    pub fn conforms(&self, name: &str, value: &Value) -> bool {
        self.check_named(name, value, DEFAULT_LOCATION, DEFAULT_SUBJECT)
            .is_ok()
    }
}

impl Default for CheckerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for CheckerRegistry {
    fn clone(&self) -> Self {
        Self {
            checkers: Arc::clone(&self.checkers),
            max_depth: self.max_depth,
        }
    }
}

/// Errors from registry bookkeeping.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// Attempted to register a checker under a name that already exists.
    #[error("checker '{0}' already registered")]
    DuplicateName(String),
}
