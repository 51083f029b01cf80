//! Per-call context threaded through every checker invocation.

use crate::path::ValuePath;
use crate::registry::{CheckerRegistry, DEFAULT_MAX_DEPTH};

/// Everything a rule needs to know about *where* it is running.
///
/// A context carries the free-text location tag and subject name used in
/// messages, the accumulated [`ValuePath`], and — when validation was
/// started through a [`CheckerRegistry`] — the registry handle and
/// reference-depth bookkeeping that `ref_` checkers resolve through.
///
/// Contexts are immutable; the `enter_*` methods derive a child context
/// for a descent, leaving the original untouched. Checkers hold no
/// per-call state of their own, so a single checker value can serve many
/// concurrent calls, each with its own context chain.
///
/// # Example
///
/// ```rust
/// use gatecheck::{checkers, CheckContext, Value};
///
/// let ctx = CheckContext::new("parameter", "connect").enter_field("port");
/// let verdict = checkers::number().check(Some(&Value::from(8080)), &ctx);
/// assert!(verdict.is_pass());
/// ```
#[derive(Clone)]
pub struct CheckContext {
    location: String,
    subject: String,
    path: ValuePath,
    registry: Option<CheckerRegistry>,
    depth: usize,
    max_depth: usize,
}

impl CheckContext {
    /// Creates a root context with the given location tag and subject name.
    pub fn new(location: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            subject: subject.into(),
            path: ValuePath::root(),
            registry: None,
            depth: 0,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Attaches a registry so `ref_` checkers can resolve.
    pub(crate) fn with_registry(mut self, registry: CheckerRegistry, max_depth: usize) -> Self {
        self.registry = Some(registry);
        self.max_depth = max_depth;
        self
    }

    /// The free-text location tag ("field", "parameter", ...).
    pub fn location(&self) -> &str {
        &self.location
    }

    /// The subject name messages attribute failures to.
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// The accumulated path of this invocation.
    pub fn path(&self) -> &ValuePath {
        &self.path
    }

    /// Derives the context for descending into a named field.
    pub fn enter_field(&self, name: impl Into<String>) -> Self {
        let mut child = self.clone();
        child.path = self.path.push_field(name);
        child
    }

    /// Derives the context for descending into an array element.
    pub fn enter_index(&self, index: usize) -> Self {
        let mut child = self.clone();
        child.path = self.path.push_index(index);
        child
    }

    /// Derives the context for following a checker reference.
    pub(crate) fn enter_ref(&self) -> Self {
        let mut child = self.clone();
        child.depth = self.depth + 1;
        child
    }

    /// The registry to resolve references through, if any.
    pub(crate) fn registry(&self) -> Option<&CheckerRegistry> {
        self.registry.as_ref()
    }

    /// How many references have been followed so far.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The reference-depth bound.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}
