//! Preconditions for keystrokes.
//!
//! A keystroke that fails its precondition is not an error: the engine logs
//! the reasons and leaves the state unchanged. Checks are expressed as
//! `Validation` so every reason is reported, not just the first.

use super::state::ExpressionState;
use super::token::{digit_count, Token};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Outcome of a precondition check.
pub type Check = Validation<(), NonEmptyVec<Rejection>>;

/// Reasons a keystroke is turned into a no-op.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Rejection {
    #[error("'{0}' is not a digit")]
    NotADigit(char),

    #[error("Number already has {max} digits")]
    DigitLimit { max: usize },

    #[error("Current number already contains a decimal point")]
    DuplicateDecimal,

    #[error("Decimal point cannot follow an operator")]
    DecimalAfterOperator,
}

/// Check whether `digit` may be appended.
///
/// `max_digits` bounds the length of the trailing number. Replacing a bare
/// zero never counts as growth.
pub fn check_digit(state: &ExpressionState, digit: char, max_digits: Option<usize>) -> Check {
    let mut checks = Vec::new();

    checks.push(if digit.is_ascii_digit() {
        Validation::success(())
    } else {
        Validation::fail(Rejection::NotADigit(digit))
    });

    if let Some(max) = max_digits {
        let grows_past_limit = match trailing_number(state) {
            Some(text) if text != "0" => digit_count(text) >= max,
            _ => false,
        };
        checks.push(if grows_past_limit {
            Validation::fail(Rejection::DigitLimit { max })
        } else {
            Validation::success(())
        });
    }

    Validation::all_vec(checks).map(|_| ())
}

/// Check whether a decimal point may be appended.
///
/// ```rust
/// use keypad::core::guard::{check_decimal, Rejection};
/// use keypad::core::{ExpressionState, Token};
/// use stillwater::validation::Validation;
///
/// let state = ExpressionState::from_tokens(vec![Token::Number("3.1".to_string())]);
///
/// match check_decimal(&state) {
///     Validation::Failure(reasons) => {
///         assert!(reasons.iter().any(|r| *r == Rejection::DuplicateDecimal));
///     }
///     Validation::Success(_) => panic!("second decimal point must be refused"),
/// }
/// ```
pub fn check_decimal(state: &ExpressionState) -> Check {
    let mut checks = Vec::new();

    checks.push(match state.last() {
        Some(Token::Operator(_)) if !state.is_error() => {
            Validation::fail(Rejection::DecimalAfterOperator)
        }
        _ => Validation::success(()),
    });

    checks.push(match trailing_number(state) {
        Some(text) if text.contains('.') => Validation::fail(Rejection::DuplicateDecimal),
        _ => Validation::success(()),
    });

    Validation::all_vec(checks).map(|_| ())
}

/// Text of the trailing number token, ignoring the error sentinel.
fn trailing_number(state: &ExpressionState) -> Option<&str> {
    if state.is_error() {
        return None;
    }
    state.last().and_then(Token::as_number)
}
