//! Return-based metrics: time-weighted return.

use crate::backend;
use crate::domain::error::FinmetrixError;
use crate::domain::validation;
use crate::domain::value::RawValue;
use crate::ports::kernel_port::KernelPort;

/// Compute the time-weighted return of a series of period returns.
///
/// The input is fully materialized before validation, so one-shot iterators
/// are fine. Validation failures propagate untouched; no kernel ever sees
/// unvalidated input.
///
/// # Examples
///
/// ```
/// let r = finmetrix::twr([0.05, 0.03]).unwrap();
/// assert!((r - 0.0815).abs() < 1e-10);
/// ```
pub fn twr<I>(returns: I) -> Result<f64, FinmetrixError>
where
    I: IntoIterator<Item = f64>,
{
    let returns: Vec<f64> = returns.into_iter().collect();
    validation::validate_returns(&returns)?;
    Ok(backend::active_kernel().compound(&returns))
}

/// Compute the time-weighted return of loosely typed input values.
///
/// Same contract as [`twr`], with a kind check at the boundary: anything
/// that is not a float or integer fails with
/// [`FinmetrixError::NonNumeric`] naming the offending index and kind.
pub fn twr_raw<I>(values: I) -> Result<f64, FinmetrixError>
where
    I: IntoIterator<Item = RawValue>,
{
    let values: Vec<RawValue> = values.into_iter().collect();
    let returns = validation::coerce_returns(&values)?;
    Ok(backend::active_kernel().compound(&returns))
}
