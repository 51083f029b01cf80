//! The validation-failure type.

use std::fmt::{self, Display};

use crate::path::ValuePath;

/// A single validation failure with full context.
///
/// The `message` field is the complete human-readable sentence a consumer
/// sees; `location`, `path` and the structured `got`/`expected`/`code`
/// fields carry the same information in machine-usable form so callers can
/// route or rewrite failures without parsing text.
///
/// # Example
///
/// ```rust
/// use gatecheck::{CheckError, ValuePath};
///
/// let error = CheckError::new(
///     "field",
///     ValuePath::from_field("retries"),
///     "Invalid field `retries` of type `string`, expected `number`.",
/// )
/// .with_code("invalid_type")
/// .with_got("string")
/// .with_expected("number");
///
/// assert_eq!(error.code, "invalid_type");
/// assert!(error.to_string().contains("expected `number`"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CheckError {
    /// The free-text location tag ("field", "parameter", ...).
    pub location: String,
    /// Where in the value the failure occurred.
    pub path: ValuePath,
    /// The fully formatted human-readable message.
    pub message: String,
    /// The actual kind or value, when the failure has one.
    pub got: Option<String>,
    /// What was expected instead, when the failure has one.
    pub expected: Option<String>,
    /// Machine-readable failure code (e.g. `invalid_type`).
    pub code: String,
}

impl CheckError {
    /// Creates a failure with the given location tag, path and message.
    ///
    /// The code defaults to `check_failed`; use [`with_code`](Self::with_code)
    /// for a more specific one.
    pub fn new(location: impl Into<String>, path: ValuePath, message: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            path,
            message: message.into(),
            got: None,
            expected: None,
            code: "check_failed".to_string(),
        }
    }

    /// Sets the failure code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Records the actual kind or value.
    pub fn with_got(mut self, got: impl Into<String>) -> Self {
        self.got = Some(got.into());
        self
    }

    /// Records what was expected.
    pub fn with_expected(mut self, expected: impl Into<String>) -> Self {
        self.expected = Some(expected.into());
        self
    }
}

impl Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The message already embeds location and path per the templates.
        f.write_str(&self.message)
    }
}

impl std::error::Error for CheckError {}

// Checkers are shared across threads, so the failures they produce must
// travel too. Compile-time assertions keep that true if the fields change.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<CheckError>();
    assert_sync::<CheckError>();
};
