use std::ops::{Mul, MulAssign};

use crate::simd::traits::SimdVec;

pub const LANE_COUNT: usize = 4;

/// Four `f32` values processed together without explicit intrinsics.
///
/// The fixed-size array lets LLVM lower [`Mul`] to a single packed multiply on targets that
/// have one.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct F32x4 {
    elements: [f32; LANE_COUNT],
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

        let mut elements = [0.0f32; LANE_COUNT];
        elements.copy_from_slice(&slice[..LANE_COUNT]);
        Self { elements }
    }

    #[inline(always)]
    unsafe fn load(ptr: *const f32, size: usize) -> Self {
        assert!(!ptr.is_null(), "Pointer must not be null");
        assert!(size == LANE_COUNT, "Size must be == {LANE_COUNT}");

        let mut elements = [0.0f32; LANE_COUNT];
        unsafe { std::ptr::copy_nonoverlapping(ptr, elements.as_mut_ptr(), LANE_COUNT) };
        Self { elements }
    }

    #[inline(always)]
    unsafe fn store_at(&self, ptr: *mut f32) {
        assert!(!ptr.is_null(), "Pointer must not be null");

        unsafe { std::ptr::copy_nonoverlapping(self.elements.as_ptr(), ptr, LANE_COUNT) };
    }

    #[inline(always)]
    fn to_vec(self) -> Vec<f32> {
        self.elements.to_vec()
    }
}

impl Mul for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self::Output {
        let mut elements = self.elements;
        for (lane, other) in elements.iter_mut().zip(rhs.elements) {
            *lane *= other;
        }
        Self { elements }
    }
}

impl MulAssign for F32x4 {
    #[inline(always)]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}
