//! Compounding kernel port trait.

/// Port for compounding a validated return series into a growth figure.
///
/// Implementations assume the dispatcher upheld its side of the contract:
/// the series is non-empty, finite, and every element is strictly greater
/// than -1.0. Any two implementations must agree within floating-point
/// rounding tolerance (relative 1e-14, absolute 1e-15) for the same input;
/// the reference kernel defines the ground truth.
pub trait KernelPort: Sync {
    /// Backend identifier, e.g. `"reference"` or `"avx2"`.
    fn name(&self) -> &'static str;

    /// Compound `returns` into `∏(1 + r) − 1`.
    fn compound(&self, returns: &[f64]) -> f64;
}
