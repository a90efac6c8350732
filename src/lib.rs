//! Keypad: a pure functional keystroke-to-expression engine
//!
//! Keypad turns the keystrokes of a four-function calculator (digits,
//! operators, decimal point, clear, backspace, evaluate) into an arithmetic
//! expression, and evaluates it on demand. It follows the "pure core,
//! imperative shell" philosophy: every keystroke is a pure transition over
//! a token list, and only evaluation touches the outside world.
//!
//! # Core Concepts
//!
//! - **Tokens**: the expression is a typed list of numbers and operators
//! - **Display**: the `history` and `current` strings are derived from it
//! - **Guards**: refused keystrokes are no-ops with recorded reasons
//! - **Evaluation**: delegated to an [`eval::Evaluator`]; failures show `Error`
//! - **Tape**: an immutable record of past evaluations
//!
//! # Example
//!
//! ```rust
//! use keypad::core::Operator;
//! use keypad::{Engine, Input};
//!
//! let mut engine = Engine::new();
//! engine.apply(Input::Digit('1'));
//! engine.apply(Input::Digit('2'));
//! engine.apply(Input::Operator(Operator::Add));
//! engine.apply(Input::Digit('7'));
//! engine.apply(Input::Operator(Operator::Multiply));
//!
//! assert_eq!(engine.history(), "12+7x");
//! assert_eq!(engine.current(), "");
//!
//! engine.apply(Input::Evaluate);
//! assert_eq!(engine.current(), "19");
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod engine;
pub mod eval;
pub mod input;

// Re-export commonly used types
pub use config::EngineConfig;
pub use crate::core::{ExpressionState, Operator, Snapshot, Token};
pub use engine::{Engine, StepResult};
pub use eval::{EvaluationError, Evaluator};
pub use input::Input;
