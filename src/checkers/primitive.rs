//! Primitive kind checkers and the always-pass checker.

use crate::checkers::{CheckContext, Rule};
use crate::error::{CheckError, Verdict};
use crate::kind::{self, Kind};
use crate::value::Value;

/// Matches a value's coarse kind against one expected kind.
pub(crate) struct PrimitiveRule {
    expected: Kind,
}

impl PrimitiveRule {
    pub(crate) fn new(expected: Kind) -> Self {
        Self { expected }
    }
}

impl Rule for PrimitiveRule {
    fn check(&self, value: &Value, ctx: &CheckContext) -> Verdict {
        if kind::coarse(value) == self.expected {
            return Verdict::Pass;
        }
        let actual = kind::precise(value);
        Verdict::Invalid(
            CheckError::new(
                ctx.location(),
                ctx.path().clone(),
                format!(
                    "Invalid {} `{}` of type `{}`, expected `{}`.",
                    ctx.location(),
                    ctx.path(),
                    actual,
                    self.expected,
                ),
            )
            .with_code("invalid_type")
            .with_got(actual)
            .with_expected(self.expected.name()),
        )
    }
}

/// Accepts every present value.
pub(crate) struct AnyRule;

impl Rule for AnyRule {
    fn check(&self, _value: &Value, _ctx: &CheckContext) -> Verdict {
        Verdict::Pass
    }
}
