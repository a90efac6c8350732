//! Engine configuration.

use crate::core::DEFAULT_TAPE_CAPACITY;
use serde::{Deserialize, Serialize};

/// Tunable engine behavior.
///
/// Every field has a default, so a partial document deserializes cleanly:
///
/// ```rust
/// use keypad::EngineConfig;
///
/// let config: EngineConfig = serde_json::from_str(r#"{ "max_digits": 12 }"#).unwrap();
/// assert_eq!(config.max_digits, Some(12));
/// assert_eq!(config.tape_capacity, 100);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Longest number, in digits, that may be typed. `None` is unbounded.
    pub max_digits: Option<usize>,

    /// Decimal places kept when formatting results. `None` keeps the
    /// shortest exact representation.
    pub precision: Option<usize>,

    /// How many evaluations the tape remembers.
    pub tape_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_digits: None,
            precision: None,
            tape_capacity: DEFAULT_TAPE_CAPACITY,
        }
    }
}
