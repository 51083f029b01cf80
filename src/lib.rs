//! # Gatecheck
//!
//! Runtime value-shape validation with composable checkers and precise
//! first-failure errors.
//!
//! ## Overview
//!
//! Static types stop at the trust boundary: function parameters,
//! deserialized payloads and configuration arrive at runtime with shapes
//! nothing has verified. Gatecheck validates them against a declarative
//! description built from composable checkers — primitive kinds, enum
//! membership, homogeneous collections, unions and structural shapes —
//! and reports the first mismatch with a precise locator and a
//! human-readable message.
//!
//! First failure wins by design: validation stops at the first bad field
//! and raises it, in a deterministic order (schema declaration order,
//! array index order, map insertion order).
//!
//! ## Core types
//!
//! - [`Value`]: the dynamic value model under check
//! - [`Checker`]: a composable rule with a required/optional presence gate
//! - [`Schema`]: an ordered mapping of field names to checkers
//! - [`CheckError`] / [`CheckFailure`]: what a rejection looks like
//! - [`CheckerRegistry`]: named checkers and recursive references
//!
//! ## Example
//!
//! ```rust
//! use gatecheck::checkers::{number, one_of, shape, string};
//! use gatecheck::{check_value, value_conforms, Schema, Value};
//! use serde_json::json;
//!
//! let config = shape(
//!     Schema::new()
//!         .field("host", string())
//!         .field("port", number())
//!         .field("mode", one_of(json!(["fast", "safe"])).optional()),
//! );
//!
//! let good = Value::from(json!({"host": "localhost", "port": 8080}));
//! assert!(value_conforms(&config, &good));
//!
//! let bad = Value::from(json!({"host": "localhost", "port": "8080"}));
//! let err = check_value(&config, &bad, "field", "Config").unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "Invalid field `value.port` of type `string`, expected `number`."
//! );
//! ```

pub mod checkers;
pub mod diagnostics;
pub mod dispatch;
pub mod error;
pub mod interop;
pub mod kind;
pub mod path;
pub mod registry;
pub mod schema;
pub mod value;

pub use checkers::{CheckContext, Checker, Presence, Rule};
pub use diagnostics::{DiagnosticSink, NullSink, TracingSink};
pub use dispatch::{check_fields, check_value, value_conforms};
pub use error::{CheckError, CheckFailure, ContractViolation, Verdict};
pub use kind::Kind;
pub use path::{PathSegment, ValuePath};
pub use registry::{CheckerRegistry, RegistryError};
pub use schema::Schema;
pub use value::{same_value, Instance, Symbol, Value};

/// Type alias for the result dispatch entry points return.
pub type CheckResult = Result<(), CheckFailure>;
