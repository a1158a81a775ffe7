//! Kernel selection.
//!
//! The accelerated kernel is probed once, at first use; the choice is cached
//! for the process lifetime and never revisited. A failed probe is not an
//! error: computation silently falls back to the reference kernel with no
//! caller-visible difference except speed.

use std::sync::OnceLock;

use crate::adapters::reference_kernel::ReferenceKernel;
#[cfg(all(feature = "simd", target_arch = "x86_64"))]
use crate::adapters::simd_kernel::Avx2Kernel;
use crate::ports::kernel_port::KernelPort;

static REFERENCE: ReferenceKernel = ReferenceKernel;
#[cfg(all(feature = "simd", target_arch = "x86_64"))]
static AVX2: Avx2Kernel = Avx2Kernel;

static ACTIVE: OnceLock<&'static dyn KernelPort> = OnceLock::new();

/// The kernel every computation dispatches to.
pub fn active_kernel() -> &'static dyn KernelPort {
    *ACTIVE.get_or_init(select_kernel)
}

/// Identifier of the active backend, `"reference"` or `"avx2"`.
pub fn backend_name() -> &'static str {
    active_kernel().name()
}

fn select_kernel() -> &'static dyn KernelPort {
    #[cfg(all(feature = "simd", target_arch = "x86_64"))]
    if Avx2Kernel::is_available() {
        log::debug!("selected avx2 compounding kernel");
        return &AVX2;
    }

    log::debug!("selected reference compounding kernel");
    &REFERENCE
}

/// Check availability of kernels at runtime.
pub mod availability {
    /// Whether the AVX2 kernel can run on this machine.
    pub fn avx2() -> bool {
        #[cfg(all(feature = "simd", target_arch = "x86_64"))]
        {
            crate::adapters::simd_kernel::Avx2Kernel::is_available()
        }
        #[cfg(not(all(feature = "simd", target_arch = "x86_64")))]
        {
            false
        }
    }
}
