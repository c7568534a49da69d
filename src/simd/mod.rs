//! 128-bit lane backends and the multiplication kernels built on them.
//!
//! `build.rs` selects exactly one backend and sets the matching cfg:
//!
//! - `sse`: `__m128` registers on x86 / x86_64
//! - `neon`: `float32x4_t` registers on aarch64
//! - `fallback`: the [`portable`] `[f32; 4]` lane, left to the auto-vectorizer
//!
//! The selected lane is re-exported as [`F32x4`]. The portable lane is always compiled so
//! it can be checked against the native one.

pub mod mul;
pub mod portable;
pub mod traits;

#[cfg(sse)]
pub mod sse;

#[cfg(neon)]
pub mod neon;

#[cfg(sse)]
pub use sse::f32x4::{F32x4, LANE_COUNT};

#[cfg(neon)]
pub use neon::f32x4::{F32x4, LANE_COUNT};

#[cfg(fallback)]
pub use portable::f32x4::{F32x4, LANE_COUNT};

/// Name of the backend selected at build time.
#[cfg(sse)]
pub const BACKEND: &str = "sse";

#[cfg(neon)]
pub const BACKEND: &str = "neon";

#[cfg(fallback)]
pub const BACKEND: &str = "portable";
