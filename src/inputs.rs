//! Input vector generation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::InputPattern;
use crate::error::{lane_error, mismatch_error, Result};
use crate::simd::LANE_COUNT;

/// The two immutable operands of a run.
///
/// Construction guarantees equal lengths that are a multiple of the lane width, so the
/// vectorized kernel never sees a remainder.
#[derive(Debug, Clone, PartialEq)]
pub struct InputVectors {
    v1: Vec<f32>,
    v2: Vec<f32>,
}

/// Fails unless `len` splits into whole lanes.
pub fn check_lane_multiple(len: usize) -> Result<()> {
    if len % LANE_COUNT != 0 {
        return Err(lane_error(len, LANE_COUNT));
    }
    Ok(())
}

impl InputVectors {
    /// Wraps caller-provided operands.
    pub fn from_vecs(v1: Vec<f32>, v2: Vec<f32>) -> Result<Self> {
        if v1.len() != v2.len() {
            return Err(mismatch_error(
                v1.len(),
                v2.len(),
                "input vectors must have the same length",
            ));
        }
        check_lane_multiple(v1.len())?;
        Ok(Self { v1, v2 })
    }

    /// Ascending and descending ramps: `v1[i] = i`, `v2[i] = len - 1 - i`.
    pub fn ramp(len: usize) -> Result<Self> {
        check_lane_multiple(len)?;
        let v1 = (0..len).map(|i| i as f32).collect();
        let v2 = (0..len).map(|i| (len - 1 - i) as f32).collect();
        Ok(Self { v1, v2 })
    }

    /// Uniform values in `[0, 1)`. The same seed always yields the same vectors.
    pub fn random(len: usize, seed: u64) -> Result<Self> {
        check_lane_multiple(len)?;
        let mut rng = StdRng::seed_from_u64(seed);
        let v1 = (0..len).map(|_| rng.random::<f32>()).collect();
        let v2 = (0..len).map(|_| rng.random::<f32>()).collect();
        Ok(Self { v1, v2 })
    }

    pub fn generate(pattern: InputPattern, len: usize) -> Result<Self> {
        match pattern {
            InputPattern::Ramp => Self::ramp(len),
            InputPattern::Random { seed } => Self::random(len, seed),
        }
    }

    pub fn len(&self) -> usize {
        self.v1.len()
    }

    pub fn is_empty(&self) -> bool {
        self.v1.is_empty()
    }

    pub fn v1(&self) -> &[f32] {
        &self.v1
    }

    pub fn v2(&self) -> &[f32] {
        &self.v2
    }
}
