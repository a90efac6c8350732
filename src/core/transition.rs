//! Pure keystroke transitions.
//!
//! Each function maps a state to the next state without side effects. None
//! of them can fail: preconditions live in [`super::guard`], and a refused
//! keystroke is simply not applied. Any keystroke made in the error state
//! starts from an empty expression.

use super::state::ExpressionState;
use super::token::{Operator, Token};

/// State to build on: the error sentinel is dropped.
fn base(state: &ExpressionState) -> ExpressionState {
    if state.is_error() {
        ExpressionState::new()
    } else {
        state.clone()
    }
}

/// Append a digit.
///
/// A digit after an operator (or on an empty expression) starts a new
/// number. A bare `"0"` is replaced rather than extended.
///
/// ```rust
/// use keypad::core::transition::append_digit;
/// use keypad::core::ExpressionState;
///
/// let state = append_digit(&ExpressionState::new(), '0');
/// let state = append_digit(&state, '5');
/// assert_eq!(state.current(), "5");
/// assert_eq!(state.history(), "5");
/// ```
pub fn append_digit(state: &ExpressionState, digit: char) -> ExpressionState {
    let mut next = base(state);
    let tokens = next.tokens_mut();
    match tokens.last_mut() {
        Some(Token::Number(text)) if text.as_str() == "0" => {
            *text = digit.to_string();
        }
        Some(Token::Number(text)) => text.push(digit),
        Some(Token::Operator(_)) | None => tokens.push(Token::Number(digit.to_string())),
    }
    next
}

/// Append an operator.
///
/// On an empty expression the left operand is an implicit `0`. A second
/// operator in a row replaces the first, and a dangling decimal point on
/// the preceding number is dropped.
///
/// ```rust
/// use keypad::core::transition::{append_digit, append_operator};
/// use keypad::core::{ExpressionState, Operator};
///
/// let state = append_digit(&ExpressionState::new(), '5');
/// let state = append_operator(&state, Operator::Add);
/// let state = append_operator(&state, Operator::Subtract);
/// assert_eq!(state.history(), "5-");
/// ```
pub fn append_operator(state: &ExpressionState, op: Operator) -> ExpressionState {
    let mut next = base(state);
    let tokens = next.tokens_mut();
    match tokens.last_mut() {
        None => tokens.push(Token::Number("0".to_string())),
        Some(Token::Operator(_)) => {
            tokens.pop();
        }
        Some(Token::Number(text)) => {
            if text.ends_with('.') {
                text.pop();
            }
        }
    }
    tokens.push(Token::Operator(op));
    next
}

/// Append a decimal point.
///
/// On an empty expression this produces `"0."`. Callers are expected to
/// have passed [`super::guard::check_decimal`]; if they have not, a decimal
/// point after an operator or on a number that already has one is ignored.
pub fn append_decimal(state: &ExpressionState) -> ExpressionState {
    let mut next = base(state);
    let tokens = next.tokens_mut();
    match tokens.last_mut() {
        None => tokens.push(Token::Number("0.".to_string())),
        Some(Token::Number(text)) if !text.contains('.') => text.push('.'),
        Some(_) => {}
    }
    next
}

/// Reset to the initial state.
pub fn clear(_state: &ExpressionState) -> ExpressionState {
    ExpressionState::new()
}

/// Remove the last typed character.
///
/// The character comes off the trailing token; a token left empty is
/// removed entirely, so the display and history stay in step.
///
/// ```rust
/// use keypad::core::transition::{append_digit, append_operator, backspace};
/// use keypad::core::{ExpressionState, Operator};
///
/// let state = append_digit(&ExpressionState::new(), '4');
/// let state = append_operator(&state, Operator::Add);
/// let state = append_digit(&state, '2');
///
/// let state = backspace(&state);
/// assert_eq!((state.history().as_str(), state.current()), ("4+", ""));
///
/// let state = backspace(&state);
/// assert_eq!((state.history().as_str(), state.current()), ("4", "4"));
/// ```
pub fn backspace(state: &ExpressionState) -> ExpressionState {
    let mut next = base(state);
    let tokens = next.tokens_mut();
    let exhausted = match tokens.last_mut() {
        None => false,
        Some(Token::Operator(_)) => true,
        Some(Token::Number(text)) => {
            text.pop();
            text.is_empty() || text.as_str() == "-"
        }
    };
    if exhausted {
        tokens.pop();
    }
    next
}

/// Replace the expression with a single evaluated number.
pub fn settle(_state: &ExpressionState, result: String) -> ExpressionState {
    ExpressionState::from_tokens(vec![Token::Number(result)])
}

/// Enter the error sentinel.
pub fn fail(_state: &ExpressionState) -> ExpressionState {
    ExpressionState::error()
}
