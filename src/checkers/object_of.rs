//! Homogeneous map checker.

use crate::checkers::{CheckContext, Checker, Rule};
use crate::error::{CheckError, Verdict};
use crate::kind::{self, Kind};
use crate::value::Value;

/// Runs one value checker over every own entry of an object.
///
/// Entries are visited in insertion order — which is what decides the
/// surfaced failure when several entries are bad — and the first non-pass
/// verdict aborts the walk with a `path.key` locator.
pub(crate) struct ObjectOfRule {
    values: Checker,
}

impl ObjectOfRule {
    pub(crate) fn new(values: Checker) -> Self {
        Self { values }
    }
}

impl Rule for ObjectOfRule {
    fn check(&self, value: &Value, ctx: &CheckContext) -> Verdict {
        if kind::coarse(value) != Kind::Object {
            let actual = kind::precise(value);
            return Verdict::Invalid(
                CheckError::new(
                    ctx.location(),
                    ctx.path().clone(),
                    format!(
                        "Invalid {} `{}` of type `{}` supplied to `{}`, expected an object.",
                        ctx.location(),
                        ctx.path(),
                        actual,
                        ctx.subject(),
                    ),
                )
                .with_code("invalid_type")
                .with_got(actual)
                .with_expected("object"),
            );
        }
        // Dates, regexps and instances classify as objects but expose no
        // own entries, so there is nothing to iterate.
        let Some(entries) = value.as_object() else {
            return Verdict::Pass;
        };
        for (key, entry) in entries {
            let verdict = self.values.check(Some(entry), &ctx.enter_field(key));
            if !verdict.is_pass() {
                return verdict;
            }
        }
        Verdict::Pass
    }
}
