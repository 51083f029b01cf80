//! Nominal instance-of checker.

use std::any::TypeId;

use crate::checkers::{CheckContext, Rule};
use crate::error::{CheckError, Verdict};
use crate::kind;
use crate::value::{short_type_name, Value};

/// Accepts instances whose erased type is the expected nominal type.
pub(crate) struct InstanceOfRule {
    expected: TypeId,
    expected_name: &'static str,
}

impl InstanceOfRule {
    pub(crate) fn of<T: 'static>() -> Self {
        Self {
            expected: TypeId::of::<T>(),
            expected_name: short_type_name::<T>(),
        }
    }
}

impl Rule for InstanceOfRule {
    fn check(&self, value: &Value, ctx: &CheckContext) -> Verdict {
        let actual = match value {
            Value::Instance(instance) => {
                if instance.is_type_id(self.expected) {
                    return Verdict::Pass;
                }
                instance.type_name().to_string()
            }
            other => kind::precise(other).to_string(),
        };
        Verdict::Invalid(
            CheckError::new(
                ctx.location(),
                ctx.path().clone(),
                format!(
                    "Invalid {} `{}` of type `{}` supplied to `{}`, expected instance of `{}`.",
                    ctx.location(),
                    ctx.path(),
                    actual,
                    ctx.subject(),
                    self.expected_name,
                ),
            )
            .with_code("invalid_instance")
            .with_got(actual)
            .with_expected(self.expected_name),
        )
    }
}
