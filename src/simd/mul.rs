//! Elementwise `f32` multiplication kernels.
//!
//! All kernels write into a caller-provided buffer so the harness can reuse its outputs
//! across iterations. The `SimdMul` impl on `&[f32]` wraps them for one-shot use.

use rayon::prelude::*;

use crate::simd::{
    traits::{SimdMul, SimdVec},
    F32x4, LANE_COUNT,
};

/// Elements handed to each rayon task by [`par_simd_mul_into`].
///
/// Must stay a multiple of [`LANE_COUNT`] so every block splits into whole lanes.
pub const PARALLEL_BLOCK: usize = 4 * 1024;

#[inline(always)]
fn check_lengths(a: &[f32], b: &[f32], c: &[f32]) {
    assert_eq!(a.len(), b.len(), "Vectors must be the same length");
    assert_eq!(
        a.len(),
        c.len(),
        "Output buffer must have the same length as the inputs"
    );
}

#[inline(always)]
fn check_lanes(len: usize, lanes: usize) {
    assert!(
        len % lanes == 0,
        "Size must be a multiple of {lanes} (got {len})"
    );
}

/// `c[i] = a[i] * b[i]`, one element at a time.
///
/// # Panics
///
/// Panics if the three slices differ in length.
#[inline(always)]
pub fn scalar_mul_into(a: &[f32], b: &[f32], c: &mut [f32]) {
    check_lengths(a, b, c);

    for ((out, x), y) in c.iter_mut().zip(a).zip(b) {
        *out = x * y;
    }
}

/// Multiplies `a` and `b` lane by lane with the lane type `L`.
///
/// Each step loads `L::LANES` floats from both inputs, multiplies them as one packed
/// operation and stores the packed result at the same offset of `c`.
///
/// # Panics
///
/// Panics if the slices differ in length or if the length is not a multiple of `L::LANES`.
/// Remainders are never processed.
#[inline(always)]
pub fn lane_mul_into<L: SimdVec<f32>>(a: &[f32], b: &[f32], c: &mut [f32]) {
    check_lengths(a, b, c);
    check_lanes(a.len(), L::LANES);

    for ((c_chunk, a_chunk), b_chunk) in c
        .chunks_exact_mut(L::LANES)
        .zip(a.chunks_exact(L::LANES))
        .zip(b.chunks_exact(L::LANES))
    {
        let product = L::new(a_chunk) * L::new(b_chunk);

        // SAFETY: `c_chunk` holds exactly `L::LANES` elements.
        unsafe { product.store_at(c_chunk.as_mut_ptr()) };
    }
}

/// Vectorized kernel using the backend selected at build time.
///
/// # Panics
///
/// See [`lane_mul_into`].
#[inline(always)]
pub fn simd_mul_into(a: &[f32], b: &[f32], c: &mut [f32]) {
    lane_mul_into::<F32x4>(a, b, c);
}

/// Vectorized kernel split into [`PARALLEL_BLOCK`]-sized blocks across the rayon pool.
///
/// # Panics
///
/// See [`lane_mul_into`].
pub fn par_simd_mul_into(a: &[f32], b: &[f32], c: &mut [f32]) {
    check_lengths(a, b, c);
    check_lanes(a.len(), LANE_COUNT);

    c.par_chunks_mut(PARALLEL_BLOCK)
        .zip(a.par_chunks(PARALLEL_BLOCK))
        .zip(b.par_chunks(PARALLEL_BLOCK))
        .for_each(|((c_chunk, a_chunk), b_chunk)| {
            simd_mul_into(a_chunk, b_chunk, c_chunk);
        });
}

impl<'b> SimdMul<&'b [f32]> for &[f32] {
    type Output = Vec<f32>;

    #[inline(always)]
    fn simd_mul(self, rhs: &'b [f32]) -> Self::Output {
        let mut c = vec![0.0f32; self.len()];
        simd_mul_into(self, rhs, &mut c);
        c
    }

    #[inline(always)]
    fn par_simd_mul(self, rhs: &'b [f32]) -> Self::Output {
        let mut c = vec![0.0f32; self.len()];
        par_simd_mul_into(self, rhs, &mut c);
        c
    }

    #[inline(always)]
    fn scalar_mul(self, rhs: &'b [f32]) -> Self::Output {
        let mut c = vec![0.0f32; self.len()];
        scalar_mul_into(self, rhs, &mut c);
        c
    }
}
