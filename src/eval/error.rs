//! Evaluation errors.

use thiserror::Error;

/// The single failure kind the engine can observe.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EvaluationError {
    #[error("Nothing to evaluate")]
    EmptyExpression,

    #[error("Cannot evaluate '{expression}': {reason}")]
    Rejected { expression: String, reason: String },

    #[error("'{expression}' does not reduce to a finite number ({value})")]
    NonFinite { expression: String, value: f64 },
}

impl EvaluationError {
    /// Build a rejection for `expression` from any displayable cause.
    pub fn rejected(expression: &str, reason: impl ToString) -> Self {
        Self::Rejected {
            expression: expression.to_string(),
            reason: reason.to_string(),
        }
    }
}
