//! Error types for simdmul operations.
//!
//! Every precondition the harness relies on is checked once, up front, and surfaces here
//! instead of as a panic inside a kernel.

use thiserror::Error;

/// Errors that can occur while configuring or running a benchmark.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BenchError {
    /// The vector length cannot be split into whole SIMD lanes.
    #[error("Invalid vector length: {length} is not a multiple of the lane width {lane_width}")]
    LengthNotMultipleOfLane {
        /// The offending element count.
        length: usize,
        /// Elements per lane.
        lane_width: usize,
    },
    /// Two buffers that must have the same length do not.
    #[error("Length mismatch: {message} (left: {left}, right: {right})")]
    LengthMismatch {
        left: usize,
        right: usize,
        /// Human-readable error message.
        message: String,
    },
    /// A configuration value is out of range.
    #[error("Invalid configuration: {message}")]
    ConfigError {
        /// Human-readable error message.
        message: String,
    },
    /// A measured duration could not be represented as a signed delta.
    #[error("Timing error: {message}")]
    TimingError {
        /// Human-readable error message.
        message: String,
    },
    /// The scalar and vectorized kernels disagree on an element.
    #[error("Kernel mismatch at index {index}: scalar={scalar}, vectorized={vectorized}")]
    KernelMismatch {
        index: usize,
        scalar: f32,
        vectorized: f32,
    },
}

/// Result type alias for simdmul operations.
pub type Result<T> = std::result::Result<T, BenchError>;

/// Creates a lane divisibility error.
pub fn lane_error(length: usize, lane_width: usize) -> BenchError {
    BenchError::LengthNotMultipleOfLane { length, lane_width }
}

/// Creates a length mismatch error.
pub fn mismatch_error(left: usize, right: usize, message: impl Into<String>) -> BenchError {
    BenchError::LengthMismatch {
        left,
        right,
        message: message.into(),
    }
}

/// Creates a configuration error.
pub fn config_error(message: impl Into<String>) -> BenchError {
    BenchError::ConfigError {
        message: message.into(),
    }
}

/// Creates a timing error.
pub fn timing_error(message: impl Into<String>) -> BenchError {
    BenchError::TimingError {
        message: message.into(),
    }
}
