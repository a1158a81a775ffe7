//! Concrete kernel implementations for ports.

pub mod reference_kernel;
#[cfg(all(feature = "simd", target_arch = "x86_64"))]
pub mod simd_kernel;
