//! The explicit result of one checker invocation.

use crate::error::{CheckError, CheckFailure, ContractViolation};

/// What a single checker invocation decided.
///
/// Every rule returns a `Verdict` rather than signalling failure through a
/// panic or a sentinel value, so combinators can tell the three outcomes
/// apart structurally: `Pass` lets a union move on and everything else
/// short-circuit, `Invalid` is the recoverable rejection, and `Violation`
/// marks a broken schema and always propagates.
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub enum Verdict {
    /// The value is acceptable.
    Pass,
    /// The value was rejected.
    Invalid(CheckError),
    /// The schema is misconstructed; propagates through every combinator.
    Violation(ContractViolation),
}

impl Verdict {
    /// Returns true for [`Verdict::Pass`].
    pub fn is_pass(&self) -> bool {
        matches!(self, Verdict::Pass)
    }

    /// Returns the rejection, if the value was rejected.
    pub fn as_invalid(&self) -> Option<&CheckError> {
        match self {
            Verdict::Invalid(e) => Some(e),
            _ => None,
        }
    }

    /// Maps the verdict onto the raising convention of the dispatch layer.
    pub fn into_result(self) -> Result<(), CheckFailure> {
        match self {
            Verdict::Pass => Ok(()),
            Verdict::Invalid(e) => Err(CheckFailure::Invalid(e)),
            Verdict::Violation(v) => Err(CheckFailure::Contract(v)),
        }
    }
}

impl From<CheckError> for Verdict {
    fn from(error: CheckError) -> Self {
        Verdict::Invalid(error)
    }
}

impl From<ContractViolation> for Verdict {
    fn from(violation: ContractViolation) -> Self {
        Verdict::Violation(violation)
    }
}
