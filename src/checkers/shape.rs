//! Structural shape checkers, open and closed.

use indexmap::IndexMap;

use crate::checkers::{CheckContext, Rule};
use crate::error::{CheckError, Verdict};
use crate::interop::json::describe_pretty;
use crate::kind::{self, Kind};
use crate::schema::Schema;
use crate::value::Value;

/// Checks an object against a field schema.
///
/// The open variant (`shape`) checks only the fields the schema declares
/// and silently ignores everything else on the value. The closed variant
/// (`exact`) additionally walks the union of value keys and schema keys
/// and rejects any key the schema does not declare, dumping the entire
/// candidate value and the full valid-key list into the failure — a
/// deliberately verbose diagnostic, since an unknown key usually means the
/// caller is holding the wrong object.
pub(crate) struct ShapeRule {
    schema: Schema,
    exact: bool,
}

impl ShapeRule {
    pub(crate) fn open(schema: Schema) -> Self {
        Self {
            schema,
            exact: false,
        }
    }

    pub(crate) fn exact(schema: Schema) -> Self {
        Self {
            schema,
            exact: true,
        }
    }

    fn unknown_key(&self, key: &str, value: &Value, ctx: &CheckContext) -> Verdict {
        let valid_keys: Vec<serde_json::Value> = self
            .schema
            .names()
            .map(|name| serde_json::Value::String(name.to_string()))
            .collect();
        let valid_keys = serde_json::to_string_pretty(&serde_json::Value::Array(valid_keys))
            .unwrap_or_else(|_| "[]".to_string());
        Verdict::Invalid(
            CheckError::new(
                ctx.location(),
                ctx.path().clone(),
                format!(
                    "Invalid {} `{}` key `{}` supplied to `{}`.\nBad object: {}\nValid keys: {}",
                    ctx.location(),
                    ctx.path(),
                    key,
                    ctx.subject(),
                    describe_pretty(value),
                    valid_keys,
                ),
            )
            .with_code("unknown_key")
            .with_got(key),
        )
    }
}

impl Rule for ShapeRule {
    fn check(&self, value: &Value, ctx: &CheckContext) -> Verdict {
        if kind::coarse(value) != Kind::Object {
            let actual = kind::precise(value);
            return Verdict::Invalid(
                CheckError::new(
                    ctx.location(),
                    ctx.path().clone(),
                    format!(
                        "Invalid {} `{}` of type `{}` supplied to `{}`, expected `object`.",
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
        // Object-classified values without own entries (dates, regexps,
        // instances) check like empty objects.
        let empty = IndexMap::new();
        let entries = value.as_object().unwrap_or(&empty);

        if self.exact {
            // Value keys first, then schema-only keys, so the surfaced
            // failure tracks the candidate's own layout.
            for key in entries.keys() {
                if self.schema.get(key).is_none() {
                    return self.unknown_key(key, value, ctx);
                }
            }
            for (name, checker) in self.schema.iter() {
                let verdict = checker.check(entries.get(name), &ctx.enter_field(name));
                if !verdict.is_pass() {
                    return verdict;
                }
            }
            return Verdict::Pass;
        }

        for (name, checker) in self.schema.iter() {
            let verdict = checker.check(entries.get(name), &ctx.enter_field(name));
            if !verdict.is_pass() {
                return verdict;
            }
        }
        Verdict::Pass
    }
}
