//! Engine that applies keystrokes and evaluates expressions.

use crate::config::EngineConfig;
use crate::core::guard::{self, Check};
use crate::core::{transition, ExpressionState, Operator, Outcome, Snapshot, Tape, TapeEntry};
use crate::engine::step::StepResult;
use crate::eval::{format_result, EvaluationError, Evaluator, FastEvaluator};
use crate::input::Input;
use chrono::Utc;
use stillwater::validation::Validation;

/// Keypad engine: the owner of one expression.
///
/// # Example
///
/// ```rust
/// use keypad::Engine;
///
/// let mut engine = Engine::new();
/// for key in ["4", "x", "5", "Enter"] {
///     engine.press_key(key);
/// }
///
/// assert_eq!(engine.current(), "20");
/// assert_eq!(engine.history(), "20");
/// ```
#[derive(Clone, Debug)]
pub struct Engine<E = FastEvaluator> {
    state: ExpressionState,
    tape: Tape,
    config: EngineConfig,
    evaluator: E,
}

impl Engine<FastEvaluator> {
    /// Create an engine with the default evaluator and configuration.
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create an engine with the default evaluator.
    pub fn with_config(config: EngineConfig) -> Self {
        Self::with_evaluator(FastEvaluator, config)
    }
}

impl Default for Engine<FastEvaluator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Evaluator> Engine<E> {
    /// Create an engine around a custom evaluator.
    pub fn with_evaluator(evaluator: E, config: EngineConfig) -> Self {
        Self {
            state: ExpressionState::new(),
            tape: Tape::with_capacity(config.tape_capacity),
            config,
            evaluator,
        }
    }

    /// Get the expression state (pure)
    pub fn state(&self) -> &ExpressionState {
        &self.state
    }

    /// The history line.
    pub fn history(&self) -> String {
        self.state.history()
    }

    /// The main display.
    pub fn current(&self) -> &str {
        self.state.current()
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    /// Evaluations performed so far.
    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Apply one input.
    ///
    /// Editing inputs either apply or are ignored with their reasons.
    /// `Evaluate` always applies and carries its outcome.
    pub fn apply(&mut self, input: Input) -> StepResult {
        if let Validation::Failure(reasons) = self.check(input) {
            let reasons: Vec<_> = reasons.iter().cloned().collect();
            tracing::debug!(
                input = %input,
                phase = self.state.phase().name(),
                ?reasons,
                "input ignored"
            );
            return StepResult::Ignored(reasons);
        }

        let next = match input {
            Input::Evaluate => return StepResult::Evaluated(self.evaluate()),
            Input::Digit(digit) => transition::append_digit(&self.state, digit),
            Input::Operator(op) => transition::append_operator(&self.state, op),
            Input::Decimal => transition::append_decimal(&self.state),
            Input::Clear => transition::clear(&self.state),
            Input::Backspace => transition::backspace(&self.state),
        };

        tracing::debug!(
            input = %input,
            from = self.state.phase().name(),
            to = next.phase().name(),
            history = %next.history(),
            "input applied"
        );
        self.state = next;
        StepResult::Applied
    }

    /// Translate a key name and apply it.
    ///
    /// Returns `None` for keys with no keypad meaning.
    pub fn press_key(&mut self, key: &str) -> Option<StepResult> {
        match Input::from_key(key) {
            Some(input) => Some(self.apply(input)),
            None => {
                tracing::trace!(key, "key ignored");
                None
            }
        }
    }

    pub fn append_digit(&mut self, digit: char) -> StepResult {
        self.apply(Input::Digit(digit))
    }

    pub fn append_operator(&mut self, op: Operator) -> StepResult {
        self.apply(Input::Operator(op))
    }

    pub fn append_decimal(&mut self) -> StepResult {
        self.apply(Input::Decimal)
    }

    pub fn clear(&mut self) -> StepResult {
        self.apply(Input::Clear)
    }

    pub fn backspace(&mut self) -> StepResult {
        self.apply(Input::Backspace)
    }

    /// Evaluate the expression typed so far.
    ///
    /// A trailing operator is ignored. On success the result replaces the
    /// expression; on failure the display shows `Error` and the history is
    /// emptied. Either way the attempt is recorded on the tape.
    pub fn evaluate(&mut self) -> Result<String, EvaluationError> {
        let expression = self.state.eval_expression();
        let _span = tracing::debug_span!("evaluate", %expression).entered();

        let result = self.reduce(&expression);
        let (next, outcome) = match &result {
            Ok(text) => {
                tracing::debug!(result = %text, "evaluation succeeded");
                (
                    transition::settle(&self.state, text.clone()),
                    Outcome::Value(text.clone()),
                )
            }
            Err(err) => {
                tracing::warn!(error = %err, "evaluation failed");
                (transition::fail(&self.state), Outcome::Failed(err.to_string()))
            }
        };

        self.tape = self.tape.record(TapeEntry {
            expression: self.state.history(),
            outcome,
            timestamp: Utc::now(),
        });
        self.state = next;
        result
    }

    /// Run the evaluator and format a finite result.
    fn reduce(&self, expression: &str) -> Result<String, EvaluationError> {
        if expression.is_empty() {
            return Err(EvaluationError::EmptyExpression);
        }

        let value = self.evaluator.evaluate(expression)?;
        if !value.is_finite() {
            return Err(EvaluationError::NonFinite {
                expression: expression.to_string(),
                value,
            });
        }

        Ok(format_result(value, self.config.precision))
    }

    /// Precondition for an editing input.
    fn check(&self, input: Input) -> Check {
        match input {
            Input::Digit(digit) => guard::check_digit(&self.state, digit, self.config.max_digits),
            Input::Decimal => guard::check_decimal(&self.state),
            _ => Validation::success(()),
        }
    }
}
