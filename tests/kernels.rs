//! Equivalence tests between the scalar and vectorized multiplication kernels.
//!
//! Both kernels perform exactly one IEEE-754 single-precision multiply per element, so
//! their outputs must match bit for bit.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use simdmul::simd::mul::{par_simd_mul_into, scalar_mul_into, simd_mul_into};
use simdmul::{Kernel, SimdMul};

fn assert_bitwise_eq(scalar: &[f32], simd: &[f32]) {
    assert_eq!(scalar.len(), simd.len(), "Result vectors have different lengths");
    for (i, (s, v)) in scalar.iter().zip(simd).enumerate() {
        assert!(
            s.to_bits() == v.to_bits() || (s.is_nan() && v.is_nan()),
            "index {i}: scalar={s} ({:08x}), simd={v} ({:08x})",
            s.to_bits(),
            v.to_bits()
        );
    }
}

/// Finite values spread over many binades, sign included.
fn random_finite(rng: &mut StdRng, len: usize) -> Vec<f32> {
    (0..len)
        .map(|_| {
            let mantissa: f32 = rng.random_range(-1.0..1.0);
            let exponent: i32 = rng.random_range(-60..60);
            mantissa * 2f32.powi(exponent)
        })
        .collect()
}

#[test]
fn test_ramp_scenario_length_8() {
    let v1 = [0.0f32, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
    let v2 = [7.0f32, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0, 0.0];
    let expected = vec![0.0f32, 6.0, 10.0, 12.0, 12.0, 10.0, 6.0, 0.0];

    assert_eq!(v1.as_slice().scalar_mul(v2.as_slice()), expected);
    assert_eq!(v1.as_slice().simd_mul(v2.as_slice()), expected);
}

#[test]
fn test_constant_scenario_length_4() {
    let v1 = [1.0f32; 4];
    let v2 = [2.0f32; 4];

    for kernel in [Kernel::Scalar, Kernel::Vectorized] {
        let mut out = [0.0f32; 4];
        let sample = kernel.timed(&v1, &v2, &mut out);
        assert_eq!(out, [2.0; 4], "{kernel}");
        assert_eq!(sample.kernel, kernel);
        assert!(sample.elapsed >= std::time::Duration::ZERO);
    }
}

#[test]
fn test_random_finite_inputs_match_bitwise() {
    let mut rng = StdRng::seed_from_u64(42);

    for &len in &[4usize, 8, 12, 64, 1_000, 4_096, 40_000] {
        let a = random_finite(&mut rng, len);
        let b = random_finite(&mut rng, len);

        let mut scalar = vec![0.0f32; len];
        let mut simd = vec![0.0f32; len];
        let mut parallel = vec![0.0f32; len];
        scalar_mul_into(&a, &b, &mut scalar);
        simd_mul_into(&a, &b, &mut simd);
        par_simd_mul_into(&a, &b, &mut parallel);

        assert_bitwise_eq(&scalar, &simd);
        assert_bitwise_eq(&scalar, &parallel);
    }
}

#[test]
fn test_subnormal_and_signed_zero_inputs() {
    let tiny = f32::from_bits(1);
    let a = [tiny, -0.0, 0.0, f32::MIN_POSITIVE, 1e-30, -1e-30, 3.0, -0.0];
    let b = [0.5, 5.0, -5.0, 0.5, 1e-30, 1e-30, -0.0, -0.0];

    let scalar = a.as_slice().scalar_mul(b.as_slice());
    let simd = a.as_slice().simd_mul(b.as_slice());
    assert_bitwise_eq(&scalar, &simd);
}

#[test]
fn test_non_finite_values_propagate_silently() {
    let a = [f32::NAN, f32::INFINITY, f32::MAX, 0.0];
    let b = [1.0, -2.0, 2.0, f32::NEG_INFINITY];

    let scalar = a.as_slice().scalar_mul(b.as_slice());
    let simd = a.as_slice().simd_mul(b.as_slice());

    assert_bitwise_eq(&scalar, &simd);
    assert!(simd[0].is_nan());
    assert_eq!(simd[1], f32::NEG_INFINITY);
    assert_eq!(simd[2], f32::INFINITY);
    assert!(simd[3].is_nan());
}

#[test]
fn test_zero_length_is_noop() {
    let empty: [f32; 0] = [];
    assert!(empty.as_slice().scalar_mul(empty.as_slice()).is_empty());
    assert!(empty.as_slice().simd_mul(empty.as_slice()).is_empty());
    assert!(empty.as_slice().par_simd_mul(empty.as_slice()).is_empty());
}

#[test]
#[should_panic(expected = "Size must be a multiple of 4")]
fn test_vectorized_kernel_rejects_tail() {
    let a = [1.0f32; 7];
    let _ = a.as_slice().simd_mul(a.as_slice());
}

#[test]
fn test_scalar_kernel_accepts_any_length() {
    let a = [2.0f32; 7];
    assert_eq!(a.as_slice().scalar_mul(a.as_slice()), vec![4.0; 7]);
}
