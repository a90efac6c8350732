//! Build errors for the engine builder.

use thiserror::Error;

/// Errors that can occur when building an engine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Digit limit must be at least 1. Omit .max_digits() for no limit")]
    ZeroDigitLimit,

    #[error("Tape capacity must be at least 1")]
    ZeroTapeCapacity,

    #[error("Precision {precision} exceeds the maximum of {max} decimal places")]
    PrecisionOutOfRange { precision: usize, max: usize },
}
