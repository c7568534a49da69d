//! Benchmark configuration.

use crate::error::{config_error, lane_error, Result};
use crate::simd::LANE_COUNT;

/// Default element count: 10 000 lanes of 4 floats.
pub const DEFAULT_VECTOR_LENGTH: usize = 4 * 10_000;

pub const DEFAULT_ITERATIONS: u32 = 100;

/// How the two input vectors are filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputPattern {
    /// `v1[i] = i`, `v2[i] = len - 1 - i`.
    #[default]
    Ramp,
    /// Uniform values in `[0, 1)` from a seeded generator.
    Random { seed: u64 },
}

/// Everything a run needs to know, passed explicitly into the harness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    /// Elements per input vector. Must be a positive multiple of the lane width.
    pub vector_length: usize,
    /// Number of timed iterations, at least 1.
    pub iterations: u32,
    /// Dump the input and output vectors.
    pub verbose_vectors: bool,
    /// Print scalar time, vector time and delta for every iteration.
    pub verbose_iterations: bool,
    pub pattern: InputPattern,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            vector_length: DEFAULT_VECTOR_LENGTH,
            iterations: DEFAULT_ITERATIONS,
            verbose_vectors: false,
            verbose_iterations: false,
            pattern: InputPattern::Ramp,
        }
    }
}

impl BenchConfig {
    pub fn new(vector_length: usize, iterations: u32) -> Self {
        Self {
            vector_length,
            iterations,
            ..Self::default()
        }
    }

    pub fn with_pattern(mut self, pattern: InputPattern) -> Self {
        self.pattern = pattern;
        self
    }

    pub fn with_verbose_vectors(mut self, verbose: bool) -> Self {
        self.verbose_vectors = verbose;
        self
    }

    pub fn with_verbose_iterations(mut self, verbose: bool) -> Self {
        self.verbose_iterations = verbose;
        self
    }

    /// Checks every precondition of a run. Called before any kernel executes.
    ///
    /// The iteration count is capped at `i32::MAX` so the mean delta can be computed with
    /// `chrono::TimeDelta` division.
    pub fn validate(&self) -> Result<()> {
        if self.vector_length == 0 {
            return Err(config_error("vector_length must be greater than 0"));
        }
        if self.vector_length % LANE_COUNT != 0 {
            return Err(lane_error(self.vector_length, LANE_COUNT));
        }
        if self.iterations == 0 {
            return Err(config_error("iterations must be at least 1"));
        }
        if i32::try_from(self.iterations).is_err() {
            return Err(config_error(format!(
                "iterations must be at most {} (got {})",
                i32::MAX,
                self.iterations
            )));
        }
        Ok(())
    }
}
