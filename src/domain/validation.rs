//! Return-series validation.
//!
//! One pass, low-to-high index, first offending element wins. Per-element
//! check order: kind (raw path only) → NaN → infinite → exact total loss →
//! below -1.0.

use crate::domain::error::FinmetrixError;
use crate::domain::value::RawValue;

/// Validate a materialized return series for compounding.
///
/// Accepts any non-empty series of finite values strictly greater than -1.0.
/// The input is only read; nothing is mutated or retained.
pub fn validate_returns(returns: &[f64]) -> Result<(), FinmetrixError> {
    if returns.is_empty() {
        return Err(FinmetrixError::EmptyInput);
    }

    for (index, &r) in returns.iter().enumerate() {
        check_return(index, r)?;
    }

    Ok(())
}

/// Coerce loosely typed values into a validated return series.
///
/// Kind and range checks run together per element so that the first
/// offending element in iteration order is reported, whatever kind of
/// offence it commits.
pub fn coerce_returns(values: &[RawValue]) -> Result<Vec<f64>, FinmetrixError> {
    if values.is_empty() {
        return Err(FinmetrixError::EmptyInput);
    }

    let mut returns = Vec::with_capacity(values.len());
    for (index, value) in values.iter().enumerate() {
        let r = value.as_f64().ok_or(FinmetrixError::NonNumeric {
            index,
            kind: value.kind(),
        })?;
        check_return(index, r)?;
        returns.push(r);
    }

    Ok(returns)
}

fn check_return(index: usize, r: f64) -> Result<(), FinmetrixError> {
    if r.is_nan() {
        return Err(FinmetrixError::NanValue { index });
    }
    if r.is_infinite() {
        return Err(FinmetrixError::InfiniteValue { index });
    }
    // Exact total loss is singled out: compounding through a zero factor
    // destroys all information, which is not the same failure as a
    // below-range value.
    if r == -1.0 {
        return Err(FinmetrixError::TotalLoss { index });
    }
    if r < -1.0 {
        return Err(FinmetrixError::BelowRange { index, value: r });
    }
    Ok(())
}
