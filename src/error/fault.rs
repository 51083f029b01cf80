//! Developer-error types: contract violations and the raised dispatch error.

use crate::error::CheckError;
use crate::path::ValuePath;

/// A developer error detected while running a misconstructed schema.
///
/// Unlike a [`CheckError`], a contract violation says nothing about the
/// value under test; it says the schema itself is broken. All current
/// inhabitants come from the checker-reference subsystem — the static
/// `Checker` type makes the other historical cases (a non-callable checker
/// slot, a malformed checker result) unrepresentable.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ContractViolation {
    /// A `ref_` checker named a checker that is not registered.
    #[error("checker reference `{name}` at `{path}` is not registered")]
    UnresolvedRef {
        /// The name the reference tried to resolve.
        name: String,
        /// Where the reference was reached.
        path: ValuePath,
    },

    /// A `ref_` checker ran outside a registry-carrying context.
    #[error(
        "checker reference `{name}` at `{path}` cannot resolve without a registry; \
         run it through `CheckerRegistry`"
    )]
    MissingRegistry {
        /// The name the reference tried to resolve.
        name: String,
        /// Where the reference was reached.
        path: ValuePath,
    },

    /// The reference chain exceeded the registry's depth bound.
    #[error("maximum checker reference depth {max_depth} exceeded at `{path}`")]
    DepthExceeded {
        /// The configured bound.
        max_depth: usize,
        /// Where the bound was hit.
        path: ValuePath,
    },
}

/// The error raised out of the dispatch layer.
///
/// First failure wins: dispatch stops at the first non-pass verdict and
/// raises it, either as the recoverable [`Invalid`](Self::Invalid) arm or
/// the fatal [`Contract`](Self::Contract) arm. There is no built-in
/// aggregation across fields; a caller wanting every failure checks fields
/// one at a time and collects.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CheckFailure {
    /// A value failed validation; the original message propagates verbatim.
    #[error("{0}")]
    Invalid(#[from] CheckError),

    /// The schema itself is broken.
    #[error("{0}")]
    Contract(#[from] ContractViolation),
}

impl CheckFailure {
    /// Returns the validation failure, if that is what this is.
    pub fn as_invalid(&self) -> Option<&CheckError> {
        match self {
            CheckFailure::Invalid(e) => Some(e),
            CheckFailure::Contract(_) => None,
        }
    }

    /// Returns the contract violation, if that is what this is.
    pub fn as_contract(&self) -> Option<&ContractViolation> {
        match self {
            CheckFailure::Contract(v) => Some(v),
            CheckFailure::Invalid(_) => None,
        }
    }
}
