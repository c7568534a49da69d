//! ARM NEON implementation of the 128-bit lane.
//!
//! NEON (Advanced SIMD) is mandatory on AArch64, which is the only architecture `build.rs`
//! selects this module for. Apple Silicon, AWS Graviton and modern mobile cores all carry it.

pub mod f32x4;
