//! Homogeneous array checker.

use crate::checkers::{CheckContext, Checker, Rule};
use crate::error::{CheckError, Verdict};
use crate::kind;
use crate::value::Value;

/// Runs one element checker over every element of an array.
///
/// Elements are visited in index order and the first non-pass verdict
/// aborts the walk; the surfaced failure already carries the element's own
/// message and `path[index]` locator. Empty arrays always pass.
pub(crate) struct ArrayOfRule {
    element: Checker,
}

impl ArrayOfRule {
    pub(crate) fn new(element: Checker) -> Self {
        Self { element }
    }
}

impl Rule for ArrayOfRule {
    fn check(&self, value: &Value, ctx: &CheckContext) -> Verdict {
        let Some(items) = value.as_array() else {
            let actual = kind::precise(value);
            return Verdict::Invalid(
                CheckError::new(
                    ctx.location(),
                    ctx.path().clone(),
                    format!(
                        "Invalid {} `{}` of type `{}` supplied to `{}`, expected an array.",
                        ctx.location(),
                        ctx.path(),
                        actual,
                        ctx.subject(),
                    ),
                )
                .with_code("invalid_type")
                .with_got(actual)
                .with_expected("array"),
            );
        };
        for (index, item) in items.iter().enumerate() {
            let verdict = self.element.check(Some(item), &ctx.enter_index(index));
            if !verdict.is_pass() {
                return verdict;
            }
        }
        Verdict::Pass
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkers::number;

    fn ctx() -> CheckContext {
        CheckContext::new("field", "Config").enter_field("retries")
    }

    #[test]
    fn test_all_elements_pass() {
        let rule = ArrayOfRule::new(number());
        let value = Value::Array(vec![Value::from(1), Value::from(2), Value::from(3)]);
        assert!(rule.check(&value, &ctx()).is_pass());
    }

    #[test]
    fn test_empty_array_passes() {
        let rule = ArrayOfRule::new(number());
        assert!(rule.check(&Value::Array(vec![]), &ctx()).is_pass());
    }

    #[test]
    fn test_first_bad_element_aborts_with_indexed_path() {
        let rule = ArrayOfRule::new(number());
        let value = Value::Array(vec![Value::from(1), Value::from("x"), Value::from("y")]);
        let verdict = rule.check(&value, &ctx());
        let error = verdict.as_invalid().expect("should fail");
        assert_eq!(error.path.to_string(), "retries[1]");
        assert_eq!(
            error.message,
            "Invalid field `retries[1]` of type `string`, expected `number`."
        );
    }

    #[test]
    fn test_non_array_names_actual_kind() {
        let rule = ArrayOfRule::new(number());
        let verdict = rule.check(&Value::from("nope"), &ctx());
        let error = verdict.as_invalid().expect("should fail");
        assert_eq!(
            error.message,
            "Invalid field `retries` of type `string` supplied to `Config`, expected an array."
        );
    }

    #[test]
    fn test_null_element_under_required_checker_fails() {
        let rule = ArrayOfRule::new(number());
        let value = Value::Array(vec![Value::Null]);
        let verdict = rule.check(&value, &ctx());
        let error = verdict.as_invalid().expect("should fail");
        assert!(error.message.contains("`retries[0]`"));
        assert!(error.message.ends_with("but its value is `null`."));
    }
}
