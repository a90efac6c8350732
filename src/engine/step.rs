//! Result of applying one input.

use crate::core::Rejection;
use crate::eval::EvaluationError;

/// What a single input did to the engine.
#[derive(Clone, Debug, PartialEq)]
pub enum StepResult {
    /// The input was applied.
    Applied,

    /// A precondition failed; the state is unchanged.
    Ignored(Vec<Rejection>),

    /// Evaluate was pressed. On failure the display now shows `Error`.
    Evaluated(Result<String, EvaluationError>),
}

impl StepResult {
    /// Check if the input left the state untouched because it was refused.
    pub fn is_ignored(&self) -> bool {
        matches!(self, Self::Ignored(_))
    }

    /// Result text, if this step was a successful evaluation.
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Evaluated(Ok(text)) => Some(text.as_str()),
            _ => None,
        }
    }
}
