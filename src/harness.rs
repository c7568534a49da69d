//! The benchmark harness: paired scalar / vectorized runs and their aggregated deltas.
//!
//! Every iteration runs both kernels as the two halves of a [`rayon::join`] against the
//! same inputs, each writing its own output buffer. The join is the only synchronization
//! point; iterations never overlap.

use std::time::{Duration, Instant};

use chrono::{DateTime, Local, TimeDelta};
use tracing::{debug, info, warn};

use crate::config::BenchConfig;
use crate::error::{mismatch_error, timing_error, BenchError, Result};
use crate::inputs::InputVectors;
use crate::kernel::{Kernel, TimingSample};
use crate::simd::BACKEND;

/// Both kernel timings of one iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IterationTiming {
    /// Zero-based iteration number.
    pub index: usize,
    pub scalar: TimingSample,
    pub vector: TimingSample,
}

impl IterationTiming {
    /// `scalar - vector`. Positive means the vectorized kernel was faster.
    pub fn delta(&self) -> Result<TimeDelta> {
        Ok(signed(self.scalar.elapsed)? - signed(self.vector.elapsed)?)
    }
}

fn signed(duration: Duration) -> Result<TimeDelta> {
    TimeDelta::from_std(duration)
        .map_err(|e| timing_error(format!("{duration:?} does not fit a signed delta: {e}")))
}

/// Per-iteration deltas collected over one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStatistics {
    deltas: Vec<TimeDelta>,
}

impl RunStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            deltas: Vec::with_capacity(capacity),
        }
    }

    /// Appends the delta of `timing` and returns it.
    pub fn record(&mut self, timing: &IterationTiming) -> Result<TimeDelta> {
        let delta = timing.delta()?;
        self.deltas.push(delta);
        Ok(delta)
    }

    pub fn push(&mut self, delta: TimeDelta) {
        self.deltas.push(delta);
    }

    pub fn len(&self) -> usize {
        self.deltas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deltas.is_empty()
    }

    pub fn deltas(&self) -> &[TimeDelta] {
        &self.deltas
    }

    /// Sum of every recorded delta.
    pub fn total_saved(&self) -> TimeDelta {
        self.deltas.iter().sum()
    }

    /// `total_saved / len`, or `None` when nothing was recorded.
    pub fn average_saved(&self) -> Option<TimeDelta> {
        let count = i32::try_from(self.deltas.len()).ok().filter(|&n| n > 0)?;
        Some(self.total_saved() / count)
    }
}

/// Outcome of a full run.
#[derive(Debug, Clone)]
pub struct BenchReport {
    pub started_at: DateTime<Local>,
    pub backend: &'static str,
    pub vector_length: usize,
    pub iterations: u32,
    /// Wall-clock time of the whole iteration loop, `end - start`.
    pub wall_time: Duration,
    pub statistics: RunStatistics,
}

impl BenchReport {
    pub fn total_saved(&self) -> TimeDelta {
        self.statistics.total_saved()
    }

    pub fn average_saved(&self) -> Option<TimeDelta> {
        self.statistics.average_saved()
    }
}

/// Owns the inputs and one output buffer per kernel.
#[derive(Debug)]
pub struct Harness {
    config: BenchConfig,
    inputs: InputVectors,
    scalar_out: Vec<f32>,
    vector_out: Vec<f32>,
}

impl Harness {
    /// Validates `config` and generates the inputs it describes.
    ///
    /// Nothing is timed if this fails.
    pub fn new(config: BenchConfig) -> Result<Self> {
        config.validate()?;
        let inputs = InputVectors::generate(config.pattern, config.vector_length)?;
        Self::with_inputs(config, inputs)
    }

    /// Like [`Harness::new`] with caller-provided inputs; `config.pattern` is ignored.
    pub fn with_inputs(config: BenchConfig, inputs: InputVectors) -> Result<Self> {
        config.validate()?;
        if inputs.len() != config.vector_length {
            return Err(mismatch_error(
                config.vector_length,
                inputs.len(),
                "inputs must hold vector_length elements",
            ));
        }

        let len = inputs.len();
        Ok(Self {
            config,
            inputs,
            scalar_out: vec![0.0; len],
            vector_out: vec![0.0; len],
        })
    }

    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    pub fn inputs(&self) -> &InputVectors {
        &self.inputs
    }

    pub fn scalar_output(&self) -> &[f32] {
        &self.scalar_out
    }

    pub fn vector_output(&self) -> &[f32] {
        &self.vector_out
    }

    /// Runs both kernels concurrently once and waits for both.
    pub fn run_iteration(&mut self, index: usize) -> IterationTiming {
        let Self {
            inputs,
            scalar_out,
            vector_out,
            ..
        } = self;
        let (v1, v2) = (inputs.v1(), inputs.v2());

        let (scalar, vector) = rayon::join(
            || Kernel::Scalar.timed(v1, v2, scalar_out),
            || Kernel::Vectorized.timed(v1, v2, vector_out),
        );

        IterationTiming {
            index,
            scalar,
            vector,
        }
    }

    pub fn run(&mut self) -> Result<BenchReport> {
        self.run_with(|_, _| {})
    }

    /// Runs every configured iteration, calling `observer` after each one with its timing
    /// and delta.
    pub fn run_with<F>(&mut self, mut observer: F) -> Result<BenchReport>
    where
        F: FnMut(&IterationTiming, TimeDelta),
    {
        let iterations = self.config.iterations;
        info!(
            backend = BACKEND,
            vector_length = self.config.vector_length,
            iterations,
            "starting benchmark run"
        );

        let started_at = Local::now();
        let mut statistics = RunStatistics::with_capacity(iterations as usize);

        let start = Instant::now();
        for index in 0..iterations as usize {
            let timing = self.run_iteration(index);
            let delta = statistics.record(&timing)?;
            debug!(
                iteration = index,
                scalar = ?timing.scalar.elapsed,
                vector = ?timing.vector.elapsed,
                delta = %delta,
                "iteration complete"
            );
            observer(&timing, delta);
        }
        let wall_time = start.elapsed();

        let report = BenchReport {
            started_at,
            backend: BACKEND,
            vector_length: self.config.vector_length,
            iterations,
            wall_time,
            statistics,
        };

        if let Some(average) = report.average_saved() {
            if average < TimeDelta::zero() {
                warn!(average = %average, "vectorized kernel was slower than scalar on average");
            }
        }
        info!(
            wall_time = ?report.wall_time,
            total_saved = %report.total_saved(),
            "benchmark run finished"
        );

        Ok(report)
    }

    /// Checks that both output buffers are bit-identical (NaN matches any NaN).
    pub fn verify(&self) -> Result<()> {
        let mismatch = self
            .scalar_out
            .iter()
            .zip(&self.vector_out)
            .enumerate()
            .find(|(_, (s, v))| s.to_bits() != v.to_bits() && !(s.is_nan() && v.is_nan()));

        match mismatch {
            Some((index, (&scalar, &vectorized))) => Err(BenchError::KernelMismatch {
                index,
                scalar,
                vectorized,
            }),
            None => Ok(()),
        }
    }
}
