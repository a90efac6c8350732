//! Expression state owned by the input engine.
//!
//! The expression is stored as an ordered list of typed tokens. The two
//! display strings, `history` and `current`, are derived from that list on
//! demand and therefore can never disagree with each other.

use super::token::Token;
use serde::{Deserialize, Serialize};

/// Text shown in place of the current token after a failed evaluation.
pub const ERROR_TEXT: &str = "Error";

/// Coarse classification of an [`ExpressionState`], used for logging and
/// for reasoning about what the next keystroke will do.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Phase {
    /// Nothing typed yet.
    Empty,
    /// The last token is a number being composed.
    Operand,
    /// The last token is an operator waiting for its right operand.
    Operator,
    /// The last evaluation failed.
    Error,
}

impl Phase {
    /// Get the phase name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Empty => "Empty",
            Self::Operand => "Operand",
            Self::Operator => "Operator",
            Self::Error => "Error",
        }
    }

    /// Check if this is the error sentinel.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }
}

/// The expression typed so far.
///
/// States are values: every transition in [`crate::core::transition`]
/// returns a new state and leaves its input untouched.
///
/// # Example
///
/// ```rust
/// use keypad::core::{ExpressionState, Operator, Token};
///
/// let state = ExpressionState::from_tokens(vec![
///     Token::Number("12".to_string()),
///     Token::Operator(Operator::Multiply),
/// ]);
///
/// assert_eq!(state.history(), "12x");
/// assert_eq!(state.current(), "");
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct ExpressionState {
    tokens: Vec<Token>,
    error: bool,
}

impl ExpressionState {
    /// Create the initial state: nothing typed, current shows `"0"`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a state from an already assembled token list.
    pub fn from_tokens(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            error: false,
        }
    }

    /// Create the sentinel state reached after a failed evaluation.
    pub fn error() -> Self {
        Self {
            tokens: Vec::new(),
            error: true,
        }
    }

    /// Tokens of the expression, in order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub(crate) fn tokens_mut(&mut self) -> &mut Vec<Token> {
        &mut self.tokens
    }

    /// The last token, if any.
    pub fn last(&self) -> Option<&Token> {
        self.tokens.last()
    }

    /// Check if this is the error sentinel.
    pub fn is_error(&self) -> bool {
        self.error
    }

    /// Check if nothing has been typed.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Classify the state.
    pub fn phase(&self) -> Phase {
        if self.error {
            return Phase::Error;
        }
        match self.tokens.last() {
            None => Phase::Empty,
            Some(Token::Number(_)) => Phase::Operand,
            Some(Token::Operator(_)) => Phase::Operator,
        }
    }

    /// The full expression as shown on the history line.
    pub fn history(&self) -> String {
        self.tokens.iter().map(Token::to_string).collect()
    }

    /// The token currently being typed, as shown on the main display.
    ///
    /// - `"Error"` after a failed evaluation
    /// - `"0"` when nothing has been typed
    /// - `""` right after an operator
    /// - otherwise the text of the trailing number
    pub fn current(&self) -> &str {
        if self.error {
            return ERROR_TEXT;
        }
        match self.tokens.last() {
            None => "0",
            Some(Token::Operator(_)) => "",
            Some(Token::Number(text)) => text.as_str(),
        }
    }

    /// Render the expression in the evaluator's syntax.
    ///
    /// A trailing operator is trimmed, `x` becomes `*`, and a dangling
    /// decimal point on any number is dropped.
    ///
    /// ```rust
    /// use keypad::core::{ExpressionState, Operator, Token};
    ///
    /// let state = ExpressionState::from_tokens(vec![
    ///     Token::Number("4".to_string()),
    ///     Token::Operator(Operator::Multiply),
    ///     Token::Number("5.".to_string()),
    ///     Token::Operator(Operator::Add),
    /// ]);
    ///
    /// assert_eq!(state.eval_expression(), "4*5");
    /// ```
    pub fn eval_expression(&self) -> String {
        let tokens = match self.tokens.split_last() {
            Some((last, rest)) if last.is_operator() => rest,
            _ => &self.tokens[..],
        };
        let mut out = String::new();
        for token in tokens {
            token.write_for_eval(&mut out);
        }
        out
    }

    /// Read-only view for rendering.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            history: self.history(),
            current: self.current().to_string(),
        }
    }
}

/// The two display strings a renderer consumes.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Snapshot {
    pub history: String,
    pub current: String,
}
