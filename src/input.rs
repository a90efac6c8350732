//! Logical keypad inputs and the keyboard mapping onto them.

use crate::core::Operator;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single logical keystroke.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Input {
    Digit(char),
    Operator(Operator),
    Decimal,
    Clear,
    Backspace,
    Evaluate,
}

impl Input {
    /// Map a key name, as reported by a keyboard event, to an input.
    ///
    /// Single characters map directly; `Enter` and `=` evaluate,
    /// `Backspace` deletes, `Escape` and `Delete` clear. The numpad `*` is
    /// accepted as multiplication. Anything else is ignored.
    ///
    /// ```rust
    /// use keypad::core::Operator;
    /// use keypad::Input;
    ///
    /// assert_eq!(Input::from_key("7"), Some(Input::Digit('7')));
    /// assert_eq!(Input::from_key("x"), Some(Input::Operator(Operator::Multiply)));
    /// assert_eq!(Input::from_key("Enter"), Some(Input::Evaluate));
    /// assert_eq!(Input::from_key("Shift"), None);
    /// ```
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Enter" | "=" => return Some(Self::Evaluate),
            "Backspace" => return Some(Self::Backspace),
            "Escape" | "Delete" => return Some(Self::Clear),
            "." => return Some(Self::Decimal),
            "*" => return Some(Self::Operator(Operator::Multiply)),
            _ => {}
        }

        let mut chars = key.chars();
        let (Some(ch), None) = (chars.next(), chars.next()) else {
            return None;
        };

        if ch.is_ascii_digit() {
            Some(Self::Digit(ch))
        } else {
            Operator::from_symbol(ch).map(Self::Operator)
        }
    }

}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(d) => write!(f, "{d}"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::Decimal => f.write_str("."),
            Self::Clear => f.write_str("AC"),
            Self::Backspace => f.write_str("⌫"),
            Self::Evaluate => f.write_str("="),
        }
    }
}
