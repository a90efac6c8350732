//! Tokens that make up an expression.
//!
//! An expression is an alternating sequence of number tokens and operator
//! tokens. Numbers are kept as text so that partially typed values such as
//! `"3."` survive until the next keystroke.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four arithmetic operators a keypad offers.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// All operators, in keypad order.
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// Symbol shown in the history line.
    ///
    /// Multiplication is displayed as `x`.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => 'x',
            Self::Divide => '/',
        }
    }

    /// Symbol handed to the evaluator.
    pub fn eval_symbol(self) -> char {
        match self {
            Self::Multiply => '*',
            other => other.symbol(),
        }
    }

    /// Parse a display symbol back into an operator.
    ///
    /// ```rust
    /// use keypad::core::Operator;
    ///
    /// assert_eq!(Operator::from_symbol('x'), Some(Operator::Multiply));
    /// assert_eq!(Operator::from_symbol('*'), None);
    /// ```
    pub fn from_symbol(symbol: char) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A single element of an expression.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Token {
    /// Numeral text, possibly with a dangling decimal point.
    Number(String),
    Operator(Operator),
}

impl Token {
    /// Check if this token is an operator.
    pub fn is_operator(&self) -> bool {
        matches!(self, Self::Operator(_))
    }

    /// Numeral text, if this is a number token.
    pub fn as_number(&self) -> Option<&str> {
        match self {
            Self::Number(text) => Some(text),
            Self::Operator(_) => None,
        }
    }

    /// Write the token as it appears in the evaluator's syntax.
    ///
    /// A dangling decimal point is dropped and `x` becomes `*`.
    pub(crate) fn write_for_eval(&self, out: &mut String) {
        match self {
            Self::Number(text) => out.push_str(text.strip_suffix('.').unwrap_or(text)),
            Self::Operator(op) => out.push(op.eval_symbol()),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(text) => f.write_str(text),
            Self::Operator(op) => write!(f, "{op}"),
        }
    }
}

/// Count the digits in a numeral, ignoring sign and decimal point.
pub(crate) fn digit_count(text: &str) -> usize {
    text.chars().filter(char::is_ascii_digit).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operator_symbols_round_trip() {
        for op in Operator::ALL {
            assert_eq!(Operator::from_symbol(op.symbol()), Some(op));
        }
    }

    #[test]
    fn multiply_is_translated_for_evaluation() {
        assert_eq!(Operator::Multiply.symbol(), 'x');
        assert_eq!(Operator::Multiply.eval_symbol(), '*');
        assert_eq!(Operator::Divide.eval_symbol(), '/');
    }

    #[test]
    fn unknown_symbols_are_not_operators() {
        assert_eq!(Operator::from_symbol('*'), None);
        assert_eq!(Operator::from_symbol('.'), None);
        assert_eq!(Operator::from_symbol('7'), None);
    }

    #[test]
    fn eval_form_drops_dangling_decimal() {
        let mut out = String::new();
        Token::Number("3.".to_string()).write_for_eval(&mut out);
        Token::Operator(Operator::Multiply).write_for_eval(&mut out);
        Token::Number("0.5".to_string()).write_for_eval(&mut out);
        assert_eq!(out, "3*0.5");
    }

    #[test]
    fn display_uses_keypad_symbols() {
        assert_eq!(Token::Operator(Operator::Multiply).to_string(), "x");
        assert_eq!(Token::Number("12.5".to_string()).to_string(), "12.5");
    }

    #[test]
    fn digit_count_ignores_sign_and_point() {
        assert_eq!(digit_count("-12.50"), 4);
        assert_eq!(digit_count("0."), 1);
    }

    #[test]
    fn token_serializes_correctly() {
        let token = Token::Operator(Operator::Subtract);
        let json = serde_json::to_string(&token).unwrap();
        let deserialized: Token = serde_json::from_str(&json).unwrap();
        assert_eq!(token, deserialized);
    }
}
