//! Architecture-independent lane used when no native 128-bit backend is available.

pub mod f32x4;
