//! Evaluation of finished expressions.
//!
//! The engine never parses arithmetic itself. It hands the assembled
//! expression to an [`Evaluator`] and formats whatever number comes back.
//!
//! # Example
//!
//! ```rust
//! use keypad::eval::{format_result, Evaluator, FastEvaluator};
//!
//! let value = FastEvaluator.evaluate("4*5").unwrap();
//! assert_eq!(format_result(value, None), "20");
//! ```

mod error;
mod evaluator;
mod format;

pub use error::EvaluationError;
pub use evaluator::{Evaluator, FastEvaluator};
pub use format::format_result;
