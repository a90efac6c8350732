//! Builder for constructing engines.

use crate::builder::error::BuildError;
use crate::config::EngineConfig;
use crate::engine::Engine;
use crate::eval::{Evaluator, FastEvaluator};

/// Most decimal places an `f64` result can meaningfully carry.
pub const MAX_PRECISION: usize = 17;

/// Builder for constructing engines with a fluent API.
pub struct EngineBuilder<E = FastEvaluator> {
    evaluator: E,
    config: EngineConfig,
}

impl EngineBuilder<FastEvaluator> {
    /// Create a builder using the default evaluator.
    pub fn new() -> Self {
        Self {
            evaluator: FastEvaluator,
            config: EngineConfig::default(),
        }
    }
}

impl Default for EngineBuilder<FastEvaluator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Evaluator> EngineBuilder<E> {
    /// Swap in a different evaluator.
    pub fn evaluator<F: Evaluator>(self, evaluator: F) -> EngineBuilder<F> {
        EngineBuilder {
            evaluator,
            config: self.config,
        }
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Limit how many digits a number may have.
    pub fn max_digits(mut self, n: usize) -> Self {
        self.config.max_digits = Some(n);
        self
    }

    /// Round results to `places` decimal places.
    pub fn precision(mut self, places: usize) -> Self {
        self.config.precision = Some(places);
        self
    }

    /// Set how many evaluations the tape keeps.
    pub fn tape_capacity(mut self, n: usize) -> Self {
        self.config.tape_capacity = n;
        self
    }

    /// Build the engine.
    /// Returns an error if the configuration is unusable.
    pub fn build(self) -> Result<Engine<E>, BuildError> {
        if self.config.max_digits == Some(0) {
            return Err(BuildError::ZeroDigitLimit);
        }

        if self.config.tape_capacity == 0 {
            return Err(BuildError::ZeroTapeCapacity);
        }

        if let Some(precision) = self.config.precision.filter(|&p| p > MAX_PRECISION) {
            return Err(BuildError::PrecisionOutOfRange {
                precision,
                max: MAX_PRECISION,
            });
        }

        Ok(Engine::with_evaluator(self.evaluator, self.config))
    }
}
