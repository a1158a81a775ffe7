//! Portable reference compounding kernel.

use crate::ports::kernel_port::KernelPort;

/// Sequential multiply-accumulate over the series.
///
/// Always available on every target, and the correctness oracle for every
/// accelerated kernel: "correct" means this exact sequential product in
/// plain f64, no compensated summation, no extended precision.
pub struct ReferenceKernel;

impl KernelPort for ReferenceKernel {
    fn name(&self) -> &'static str {
        "reference"
    }

    fn compound(&self, returns: &[f64]) -> f64 {
        let mut growth = 1.0;
        for &r in returns {
            growth *= 1.0 + r;
        }
        growth - 1.0
    }
}
