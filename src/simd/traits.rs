use std::ops::Mul;

/// A fixed-width vector of packed `T` lanes.
///
/// Every backend (`sse`, `neon`, `portable`) provides one implementation for `f32` so the
/// kernels in [`crate::simd::mul`] can be written once.
pub trait SimdVec<T>: Copy + Mul<Output = Self> {
    /// Number of `T` elements held by one vector.
    const LANES: usize;

    /// Loads the first [`Self::LANES`] elements of `slice`.
    ///
    /// # Panics
    ///
    /// Panics if `slice` holds fewer than [`Self::LANES`] elements.
    fn new(slice: &[T]) -> Self;

    /// Loads a full vector from `ptr`.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for `size` reads and `size` must equal [`Self::LANES`].
    /// No alignment is required.
    unsafe fn load(ptr: *const T, size: usize) -> Self;

    /// Stores every lane starting at `ptr`.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for [`Self::LANES`] writes. No alignment is required.
    unsafe fn store_at(&self, ptr: *mut T);

    fn to_vec(self) -> Vec<T>;
}

/// Elementwise multiplication, in scalar, SIMD and parallel SIMD flavours.
pub trait SimdMul<Rhs = Self> {
    type Output;

    fn simd_mul(self, rhs: Rhs) -> Self::Output;
    fn par_simd_mul(self, rhs: Rhs) -> Self::Output;
    fn scalar_mul(self, rhs: Rhs) -> Self::Output;
}
