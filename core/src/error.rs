// condflow/src/error.rs
use crate::conditional::consequence::ChainKind;
use thiserror::Error;

/// Build-time misuse of a `ConditionalBuilder`.
///
/// Failures of conditions and handlers are never wrapped in this type; they reject
/// the run with the pipeline's own error type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConditionalError {
  /// `then`, `catch` or `finally` was called before any `when` / `else_when` / `otherwise`.
  #[error("condflow: {method}(): no steps defined yet")]
  NoSteps { method: ChainKind },
}

pub type ConditionalResult<T, E = ConditionalError> = std::result::Result<T, E>;
