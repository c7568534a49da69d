//! The two kernel variants under comparison and their timing.

use std::fmt;
use std::hint::black_box;
use std::time::{Duration, Instant};

use crate::simd::mul::{scalar_mul_into, simd_mul_into};

/// One way of computing `out[i] = v1[i] * v2[i]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kernel {
    /// Sequential loop, one element per step.
    Scalar,
    /// Four elements per step through the build-time SIMD backend.
    Vectorized,
}

impl Kernel {
    pub fn name(self) -> &'static str {
        match self {
            Kernel::Scalar => "scalar",
            Kernel::Vectorized => "simd",
        }
    }

    #[inline]
    pub fn run(self, v1: &[f32], v2: &[f32], out: &mut [f32]) {
        match self {
            Kernel::Scalar => scalar_mul_into(v1, v2, out),
            Kernel::Vectorized => simd_mul_into(v1, v2, out),
        }
    }

    /// Runs the kernel once, timed from just before the first element to just after the last.
    pub fn timed(self, v1: &[f32], v2: &[f32], out: &mut [f32]) -> TimingSample {
        let start = Instant::now();
        self.run(black_box(v1), black_box(v2), out);
        let elapsed = start.elapsed();
        black_box(out);

        TimingSample {
            kernel: self,
            elapsed,
        }
    }
}

impl fmt::Display for Kernel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Duration of one kernel invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingSample {
    pub kernel: Kernel,
    pub elapsed: Duration,
}
