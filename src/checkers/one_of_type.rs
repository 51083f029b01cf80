//! Union over an ordered list of member checkers.

use crate::checkers::{CheckContext, Checker, Rule};
use crate::error::{CheckError, Verdict};
use crate::value::Value;

/// Accepts a value the first member checker accepts.
///
/// Members run in construction order and the first pass short-circuits;
/// later members are never consulted. When every member rejects, the union
/// fails with one generic message that deliberately embeds no member
/// message — which member "should" have matched is not knowable here. A
/// member contract violation propagates immediately.
pub(crate) struct OneOfTypeRule {
    members: Vec<Checker>,
}

impl OneOfTypeRule {
    pub(crate) fn new(members: Vec<Checker>) -> Self {
        Self { members }
    }
}

impl Rule for OneOfTypeRule {
    fn check(&self, value: &Value, ctx: &CheckContext) -> Verdict {
        for member in &self.members {
            match member.check(Some(value), ctx) {
                Verdict::Pass => return Verdict::Pass,
                Verdict::Invalid(_) => continue,
                violation @ Verdict::Violation(_) => return violation,
            }
        }
        Verdict::Invalid(
            CheckError::new(
                ctx.location(),
                ctx.path().clone(),
                format!(
                    "Invalid {} `{}` supplied to `{}`.",
                    ctx.location(),
                    ctx.path(),
                    ctx.subject(),
                ),
            )
            .with_code("no_match"),
        )
    }
}
