//! The imperative shell around the pure core.
//!
//! [`Engine`] owns the expression state, applies keystrokes one at a time in
//! arrival order, runs the evaluator, logs what happened, and keeps the tape.
//!
//! # Key Concepts
//!
//! - **Inputs**: every keystroke is a [`crate::Input`]; nothing is read from
//!   ambient state
//! - **Steps**: each input yields a [`StepResult`] describing its effect
//! - **Evaluation**: failures become the `Error` display, never a panic

mod machine;
mod step;

pub use machine::Engine;
pub use step::StepResult;
