//! Enum membership over a fixed set of literal values.

use crate::checkers::{CheckContext, Rule};
use crate::error::{CheckError, Verdict};
use crate::interop::json::{describe, to_json};
use crate::value::{same_value, Value};

/// Accepts values same-value-equal to one of a fixed allowed set.
///
/// Matching walks the set in construction order and stops at the first
/// hit; the failure message serializes the whole set verbatim so the
/// consumer can see every value that would have been accepted.
pub(crate) struct OneOfRule {
    allowed: Vec<Value>,
}

impl OneOfRule {
    pub(crate) fn new(allowed: Vec<Value>) -> Self {
        Self { allowed }
    }
}

impl Rule for OneOfRule {
    fn check(&self, value: &Value, ctx: &CheckContext) -> Verdict {
        if self.allowed.iter().any(|candidate| same_value(value, candidate)) {
            return Verdict::Pass;
        }
        let set = serde_json::Value::Array(self.allowed.iter().map(to_json).collect()).to_string();
        Verdict::Invalid(
            CheckError::new(
                ctx.location(),
                ctx.path().clone(),
                format!(
                    "Invalid {} `{}` of value `{}` supplied to `{}`, expected one of {}.",
                    ctx.location(),
                    ctx.path(),
                    describe(value),
                    ctx.subject(),
                    set,
                ),
            )
            .with_code("invalid_value")
            .with_got(describe(value))
            .with_expected(format!("one of {}", set)),
        )
    }
}
