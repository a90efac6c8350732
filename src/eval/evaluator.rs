//! Evaluator seam and the fasteval-backed default.

use super::error::EvaluationError;
use fasteval::{Evaler, Parser, Slab};
use std::collections::BTreeMap;

/// Turns an infix expression using `+ - * /` into a number.
///
/// Implementations must not panic on malformed input; they report it as
/// [`EvaluationError::Rejected`]. Any closure with the right signature is an
/// evaluator, which makes test doubles trivial:
///
/// ```rust
/// use keypad::eval::{EvaluationError, Evaluator};
///
/// let always_seven = |_: &str| -> Result<f64, EvaluationError> { Ok(7.0) };
/// assert_eq!(always_seven.evaluate("1+1"), Ok(7.0));
/// ```
pub trait Evaluator {
    fn evaluate(&self, expression: &str) -> Result<f64, EvaluationError>;
}

impl<F> Evaluator for F
where
    F: Fn(&str) -> Result<f64, EvaluationError>,
{
    fn evaluate(&self, expression: &str) -> Result<f64, EvaluationError> {
        self(expression)
    }
}

/// Evaluator backed by `fasteval` with an empty namespace.
///
/// fasteval's default parser refuses input over 4096 bytes. Keypad
/// expressions have no length cap, so the parser limit is sized to each
/// expression.
#[derive(Clone, Copy, Debug, Default)]
pub struct FastEvaluator;

impl Evaluator for FastEvaluator {
    fn evaluate(&self, expression: &str) -> Result<f64, EvaluationError> {
        let expression = expression.trim();
        if expression.is_empty() {
            return Err(EvaluationError::EmptyExpression);
        }

        // No variables are exposed to the expression.
        let mut namespace = BTreeMap::<String, f64>::new();

        let parser = Parser {
            expr_len_limit: expression.len(),
            ..Parser::new()
        };
        let mut slab = Slab::new();
        parser
            .parse(expression, &mut slab.ps)
            .and_then(|parsed| parsed.from(&slab.ps).eval(&slab, &mut namespace))
            .map_err(|err| EvaluationError::rejected(expression, format!("{err:?}")))
    }
}
