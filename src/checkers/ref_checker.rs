//! Checker references resolved through a registry.

use crate::checkers::{CheckContext, Rule};
use crate::error::{ContractViolation, Verdict};
use crate::value::Value;

/// A by-name reference to a checker in a [`CheckerRegistry`].
///
/// The reference resolves at check time through the context's registry
/// handle, which is what makes recursive shapes expressible: a shape can
/// reference itself by name because resolution is deferred until a value
/// actually descends into it. Every resolution problem — no registry in
/// the context, an unregistered name, a reference chain past the depth
/// bound — is a contract violation, not a validation failure: the value
/// under test is not at fault when the schema cannot even be assembled.
///
/// [`CheckerRegistry`]: crate::registry::CheckerRegistry
pub(crate) struct RefRule {
    name: String,
}

impl RefRule {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Rule for RefRule {
    fn check(&self, value: &Value, ctx: &CheckContext) -> Verdict {
        if ctx.depth() >= ctx.max_depth() {
            return Verdict::Violation(ContractViolation::DepthExceeded {
                max_depth: ctx.max_depth(),
                path: ctx.path().clone(),
            });
        }
        let Some(registry) = ctx.registry() else {
            return Verdict::Violation(ContractViolation::MissingRegistry {
                name: self.name.clone(),
                path: ctx.path().clone(),
            });
        };
        let Some(target) = registry.get(&self.name) else {
            return Verdict::Violation(ContractViolation::UnresolvedRef {
                name: self.name.clone(),
                path: ctx.path().clone(),
            });
        };
        target.check(Some(value), &ctx.enter_ref())
    }
}
