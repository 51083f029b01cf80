//! The chainable required/optional presence gate.

use std::fmt;
use std::sync::Arc;

use crate::checkers::{CheckContext, Rule};
use crate::error::{CheckError, Verdict};
use crate::value::Value;

/// Whether a checker tolerates a missing or null value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// Missing or null values fail before the rule runs.
    Required,
    /// Missing or null values pass silently.
    Optional,
}

/// A composable validation rule over a single value-in-context.
///
/// A `Checker` pairs a shared [`Rule`] with a [`Presence`] tag. The gate
/// runs first: absent (`None`) and null inputs are handled here — both
/// take the same branch, but required failures tell `undefined` and `null`
/// apart in their wording — and only present, non-null values reach the
/// rule.
///
/// Checkers default to **required**. [`optional`](Self::optional) and
/// [`required`](Self::required) derive a sibling sharing the same rule
/// with the other presence; the original checker is never changed, so one
/// rule can back both variants of a field across many schemas.
///
/// Cloning is cheap (the rule is behind an `Arc`), and a checker holds no
/// per-call state, so the same value can be reused across threads and
/// validation calls indefinitely.
///
/// # Example
///
/// ```rust
/// use gatecheck::{checkers, CheckContext, Value};
///
/// let port = checkers::number();
/// let ctx = CheckContext::new("field", "Config").enter_field("port");
///
/// // Required by default: absence fails...
/// assert!(!port.check(None, &ctx).is_pass());
///
/// // ...but the derived optional sibling lets it through.
/// assert!(port.optional().check(None, &ctx).is_pass());
/// assert!(port.optional().check(Some(&Value::from(80)), &ctx).is_pass());
/// ```
#[derive(Clone)]
pub struct Checker {
    rule: Arc<dyn Rule>,
    presence: Presence,
}

impl Checker {
    /// Wraps a rule in a required checker.
    pub fn from_rule(rule: impl Rule + 'static) -> Self {
        Self {
            rule: Arc::new(rule),
            presence: Presence::Required,
        }
    }

    /// Derives the sibling that tolerates missing and null values.
    pub fn optional(&self) -> Self {
        Self {
            rule: Arc::clone(&self.rule),
            presence: Presence::Optional,
        }
    }

    /// Derives the sibling that rejects missing and null values.
    pub fn required(&self) -> Self {
        Self {
            rule: Arc::clone(&self.rule),
            presence: Presence::Required,
        }
    }

    /// This checker's presence variant.
    pub fn presence(&self) -> Presence {
        self.presence
    }

    /// Checks a value-in-context; `None` means the value is absent.
    pub fn check(&self, value: Option<&Value>, ctx: &CheckContext) -> Verdict {
        let literal = match value {
            Some(Value::Null) => "null",
            None => "undefined",
            Some(present) => return self.rule.check(present, ctx),
        };
        match self.presence {
            Presence::Optional => Verdict::Pass,
            Presence::Required => Verdict::Invalid(
                CheckError::new(
                    ctx.location(),
                    ctx.path().clone(),
                    format!(
                        "The {} `{}` is marked as required in `{}`, but its value is `{}`.",
                        ctx.location(),
                        ctx.path(),
                        ctx.subject(),
                        literal,
                    ),
                )
                .with_code("required")
                .with_got(literal),
            ),
        }
    }
}

impl fmt::Debug for Checker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Checker")
            .field("presence", &self.presence)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysPass;
    impl Rule for AlwaysPass {
        fn check(&self, _value: &Value, _ctx: &CheckContext) -> Verdict {
            Verdict::Pass
        }
    }

    fn ctx() -> CheckContext {
        CheckContext::new("field", "Widget").enter_field("size")
    }

    #[test]
    fn test_required_rejects_absent_with_undefined_wording() {
        let checker = Checker::from_rule(AlwaysPass);
        let verdict = checker.check(None, &ctx());
        let error = verdict.as_invalid().expect("should fail");
        assert_eq!(
            error.message,
            "The field `size` is marked as required in `Widget`, but its value is `undefined`."
        );
        assert_eq!(error.code, "required");
    }

    #[test]
    fn test_required_rejects_null_with_null_wording() {
        let checker = Checker::from_rule(AlwaysPass);
        let verdict = checker.check(Some(&Value::Null), &ctx());
        let error = verdict.as_invalid().expect("should fail");
        assert!(error.message.ends_with("but its value is `null`."));
    }

    #[test]
    fn test_optional_passes_absent_and_null() {
        let checker = Checker::from_rule(AlwaysPass).optional();
        assert!(checker.check(None, &ctx()).is_pass());
        assert!(checker.check(Some(&Value::Null), &ctx()).is_pass());
    }

    #[test]
    fn test_deriving_does_not_mutate_the_original() {
        let required = Checker::from_rule(AlwaysPass);
        let optional = required.optional();

        assert_eq!(required.presence(), Presence::Required);
        assert_eq!(optional.presence(), Presence::Optional);
        assert_eq!(optional.required().presence(), Presence::Required);
        // The original still rejects absence.
        assert!(!required.check(None, &ctx()).is_pass());
    }

    #[test]
    fn test_present_value_reaches_the_rule() {
        let checker = Checker::from_rule(AlwaysPass);
        assert!(checker.check(Some(&Value::from(1)), &ctx()).is_pass());
    }
}
