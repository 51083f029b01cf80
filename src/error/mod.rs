//! The error taxonomy: validation failures, contract violations, and the
//! explicit per-invocation verdict.
//!
//! A [`CheckError`] is the expected, recoverable outcome of a correctly
//! constructed checker rejecting a value. A [`ContractViolation`] is a
//! developer error (a misconstructed schema), surfaced on a fatal path and
//! not meant to be caught. [`Verdict`] carries one or the other — or a pass
//! — out of every checker invocation, and [`CheckFailure`] is the error the
//! dispatch layer raises.

mod check_error;
mod fault;
mod verdict;

pub use check_error::CheckError;
pub use fault::{CheckFailure, ContractViolation};
pub use verdict::Verdict;
