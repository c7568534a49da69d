//! Scalar vs. 4-lane SIMD `f32` multiplication micro-benchmark.
//!
//! A [`Harness`] owns two input vectors and runs a scalar and a vectorized kernel against
//! them, concurrently, once per iteration. Each kernel is timed on its own and the
//! per-iteration difference (`scalar - vector`) is folded into [`RunStatistics`].
//!
//! ```no_run
//! use simdmul::{BenchConfig, Harness};
//!
//! let mut harness = Harness::new(BenchConfig::new(4 * 10_000, 100))?;
//! let report = harness.run()?;
//! harness.verify()?;
//! println!("{}", simdmul::report::format_summary(&report));
//! # Ok::<(), simdmul::BenchError>(())
//! ```

pub mod config;
pub mod error;
pub mod harness;
pub mod inputs;
pub mod kernel;
pub mod report;
pub mod simd;

pub use config::{BenchConfig, InputPattern};
pub use error::{BenchError, Result};
pub use harness::{BenchReport, Harness, IterationTiming, RunStatistics};
pub use inputs::InputVectors;
pub use kernel::{Kernel, TimingSample};
pub use simd::traits::SimdMul;
