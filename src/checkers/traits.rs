//! The capability interface for checker logic.

use crate::checkers::CheckContext;
use crate::error::Verdict;
use crate::value::Value;

/// The validation logic behind a checker.
///
/// A rule sees the value only after the presence gate has let it through,
/// so `check` always receives a present, non-null value; null handling
/// lives in [`Checker`](crate::Checker), not in rules. Rules must be pure:
/// the same value and context yield the same verdict, and the value under
/// test is never mutated.
///
/// `Send + Sync` lets rules sit behind `Arc` inside checkers shared across
/// threads.
///
/// Implementing this trait is the extension point for checkers this crate
/// does not ship — host-environment checks, cross-field rules, and so on.
///
/// # Example
///
/// ```rust
/// use gatecheck::{kind, CheckContext, CheckError, Checker, Rule, Value, Verdict};
///
/// /// Accepts only non-empty strings.
/// struct NonEmpty;
///
/// impl Rule for NonEmpty {
///     fn check(&self, value: &Value, ctx: &CheckContext) -> Verdict {
///         match value.as_str() {
///             Some(s) if !s.is_empty() => Verdict::Pass,
///             _ => Verdict::Invalid(CheckError::new(
///                 ctx.location(),
///                 ctx.path().clone(),
///                 format!(
///                     "Invalid {} `{}` of type `{}`, expected a non-empty string.",
///                     ctx.location(),
///                     ctx.path(),
///                     kind::precise(value),
///                 ),
///             )),
///         }
///     }
/// }
///
/// let checker = Checker::from_rule(NonEmpty);
/// let ctx = CheckContext::new("field", "Form").enter_field("name");
/// assert!(checker.check(Some(&Value::from("ada")), &ctx).is_pass());
/// assert!(!checker.check(Some(&Value::from("")), &ctx).is_pass());
/// ```
pub trait Rule: Send + Sync {
    /// Checks one present, non-null value.
    fn check(&self, value: &Value, ctx: &CheckContext) -> Verdict;
}
