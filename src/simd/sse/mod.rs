//! SSE implementation of the 128-bit lane.
//!
//! SSE is part of the x86_64 baseline, and `build.rs` only selects this module when the
//! target enables the `sse` feature, so the intrinsics below are always available.

pub mod f32x4;
