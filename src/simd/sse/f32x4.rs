#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use std::ops::{Mul, MulAssign};

use crate::simd::traits::SimdVec;

pub const SSE_ALIGNMENT: usize = 16;

pub const LANE_COUNT: usize = 4;

/// A SIMD vector of 4 32-bit floating point values
#[derive(Copy, Clone, Debug)]
pub struct F32x4 {
    elements: __m128,
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

        // Unaligned load: input buffers are plain `Vec<f32>`.
        Self {
            elements: unsafe { _mm_loadu_ps(ptr) },
        }
    }

    #[inline(always)]
    unsafe fn store_at(&self, ptr: *mut f32) {
        assert!(!ptr.is_null(), "Pointer must not be null");

        unsafe { _mm_storeu_ps(ptr, self.elements) }
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
            elements: unsafe { _mm_mul_ps(self.elements, rhs.elements) },
        }
    }
}

impl MulAssign for F32x4 {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[repr(align(16))]
    struct AlignedSseData<const N: usize>([f32; N]);

    fn assert_f32_slice_eq_bitwise(a: &[f32], b: &[f32]) {
        assert_eq!(a.len(), b.len(), "Slice lengths differ");
        for i in 0..a.len() {
            assert_eq!(
                a[i].to_bits(),
                b[i].to_bits(),
                "Elements at index {} differ: left={}, right={}",
                i,
                a[i],
                b[i]
            );
        }
    }

    #[test]
    fn test_new_and_to_vec() {
        let data = [1.0f32, 2.0, 3.0, 4.0];
        let v = F32x4::new(&data);
        assert_f32_slice_eq_bitwise(&v.to_vec(), &data);
    }

    #[test]
    fn test_new_reads_only_first_lane() {
        let data = [1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0];
        let v = F32x4::new(&data);
        assert_f32_slice_eq_bitwise(&v.to_vec(), &data[..LANE_COUNT]);
    }

    #[test]
    #[should_panic(expected = "Size must be >= 4")]
    fn test_new_short_slice_panics() {
        let data = [1.0f32, 2.0, 3.0];
        let _ = F32x4::new(&data);
    }

    #[test]
    fn test_load_aligned_and_unaligned() {
        let aligned = AlignedSseData([0.5f32, 1.5, 2.5, 3.5, 4.5]);
        let from_aligned = unsafe { F32x4::load(aligned.0.as_ptr(), LANE_COUNT) };
        assert_f32_slice_eq_bitwise(&from_aligned.to_vec(), &aligned.0[..4]);

        // Offset by one element: no longer 16-byte aligned.
        let from_unaligned = unsafe { F32x4::load(aligned.0.as_ptr().add(1), LANE_COUNT) };
        assert_f32_slice_eq_bitwise(&from_unaligned.to_vec(), &aligned.0[1..5]);
    }

    #[test]
    fn test_mul() {
        let a = F32x4::new(&[0.0, 1.0, 2.0, 3.0]);
        let b = F32x4::new(&[7.0, 6.0, 5.0, 4.0]);
        assert_f32_slice_eq_bitwise(&(a * b).to_vec(), &[0.0, 6.0, 10.0, 12.0]);
    }

    #[test]
    fn test_mul_assign() {
        let mut a = F32x4::new(&[1.0, -2.0, 0.5, 8.0]);
        a *= F32x4::new(&[2.0, 2.0, 2.0, 0.25]);
        assert_f32_slice_eq_bitwise(&a.to_vec(), &[2.0, -4.0, 1.0, 2.0]);
    }

    #[test]
    fn test_mul_propagates_nan_and_inf() {
        let a = F32x4::new(&[f32::NAN, f32::INFINITY, f32::MAX, 0.0]);
        let b = F32x4::new(&[1.0, 2.0, 2.0, f32::INFINITY]);
        let out = (a * b).to_vec();
        assert!(out[0].is_nan());
        assert_eq!(out[1], f32::INFINITY);
        assert_eq!(out[2], f32::INFINITY);
        assert!(out[3].is_nan());
    }

    #[test]
    fn test_store_at_offset() {
        let mut out = [9.0f32; 6];
        let v = F32x4::new(&[1.0, 2.0, 3.0, 4.0]);
        unsafe { v.store_at(out.as_mut_ptr().add(1)) };
        assert_f32_slice_eq_bitwise(&out, &[9.0, 1.0, 2.0, 3.0, 4.0, 9.0]);
    }

    #[test]
    fn test_alignment_constant() {
        assert_eq!(SSE_ALIGNMENT, std::mem::size_of::<__m128>());
    }
}
