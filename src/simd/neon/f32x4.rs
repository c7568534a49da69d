#[cfg(target_arch = "aarch64")]
use std::arch::aarch64::*;

use std::ops::{Mul, MulAssign};

use crate::simd::traits::SimdVec;

pub const NEON_ALIGNMENT: usize = 16;

pub const LANE_COUNT: usize = 4;

/// A SIMD vector of 4 32-bit floating point values
#[derive(Copy, Clone, Debug)]
pub struct F32x4 {
    elements: float32x4_t,
}

impl SimdVec<f32> for F32x4 {
    const LANES: usize = LANE_COUNT;

    #[inline(always)]
    fn new(slice: &[f32]) -> Self {
        assert!(
            slice.len() >= LANE_COUNT,
            "Size must be >= {LANE_COUNT} (got {})",
            slice.len()
        );

        unsafe { Self::load(slice.as_ptr(), LANE_COUNT) }
    }

    #[inline(always)]
    unsafe fn load(ptr: *const f32, size: usize) -> Self {
        assert!(!ptr.is_null(), "Pointer must not be null");
        assert!(size == LANE_COUNT, "Size must be == {LANE_COUNT}");

        Self {
            elements: unsafe { vld1q_f32(ptr) },
        }
    }

    #[inline(always)]
    unsafe fn store_at(&self, ptr: *mut f32) {
        assert!(!ptr.is_null(), "Pointer must not be null");

        unsafe { vst1q_f32(ptr, self.elements) }
    }

    #[inline(always)]
    fn to_vec(self) -> Vec<f32> {
        let mut vec = vec![0.0f32; LANE_COUNT];
        // SAFETY: `vec` holds exactly LANE_COUNT elements.
        unsafe { self.store_at(vec.as_mut_ptr()) };
        vec
    }
}

impl Mul for F32x4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        F32x4 {
            elements: unsafe { vmulq_f32(self.elements, rhs.elements) },
        }
    }
}

impl MulAssign for F32x4 {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}
