//! Builder API for ergonomic engine construction.
//!
//! ```rust
//! use keypad::builder::EngineBuilder;
//!
//! let mut engine = EngineBuilder::new()
//!     .max_digits(12)
//!     .precision(10)
//!     .build()
//!     .unwrap();
//!
//! for key in ["1", "/", "3", "="] {
//!     engine.press_key(key);
//! }
//! assert_eq!(engine.current(), "0.3333333333");
//! ```

pub mod engine;
pub mod error;

pub use engine::{EngineBuilder, MAX_PRECISION};
pub use error::BuildError;
