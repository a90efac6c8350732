//! Core expression-building types and logic.
//!
//! This module contains the pure functional core of the keypad:
//! - Tokens and the expression state built from them
//! - Guard checks that decide whether a keystroke applies
//! - Transition functions for every editing keystroke
//! - The immutable evaluation tape
//!
//! All logic in this module is pure (no side effects), following
//! the "pure core, imperative shell" philosophy.

pub mod guard;
mod state;
mod tape;
mod token;
pub mod transition;

pub use guard::Rejection;
pub use state::{ExpressionState, Phase, Snapshot, ERROR_TEXT};
pub use tape::{Outcome, Tape, TapeEntry, DEFAULT_TAPE_CAPACITY};
pub use token::{Operator, Token};
