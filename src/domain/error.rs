//! Domain error types.

/// Top-level error type for finmetrix.
///
/// Every variant is a caller-input error: none are transient, none are
/// retried, all surface directly. Backend unavailability is deliberately
/// absent — a missing accelerated kernel falls back to the reference kernel
/// and is never an error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FinmetrixError {
    #[error("cannot compute with no returns")]
    EmptyInput,

    #[error("return at index {index} must be numeric, got {kind}")]
    NonNumeric { index: usize, kind: &'static str },

    #[error("return at index {index} is NaN")]
    NanValue { index: usize },

    #[error("return at index {index} is infinite")]
    InfiniteValue { index: usize },

    #[error("total loss (-1.0 return) at index {index}; subsequent returns undefined")]
    TotalLoss { index: usize },

    #[error(
        "return at index {index} is {value:.6}, less than -1.0 \
         (implies leverage or debt, outside TWR scope)"
    )]
    BelowRange { index: usize, value: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn below_range_reports_six_decimal_digits() {
        let err = FinmetrixError::BelowRange {
            index: 3,
            value: -1.0001,
        };
        let msg = err.to_string();
        assert!(msg.contains("-1.000100"), "got: {msg}");
        assert!(msg.contains("less than -1.0"));
        assert!(msg.contains("index 3"));
    }

    #[test]
    fn total_loss_message_distinct_from_below_range() {
        let total = FinmetrixError::TotalLoss { index: 0 }.to_string();
        let below = FinmetrixError::BelowRange {
            index: 0,
            value: -1.5,
        }
        .to_string();
        assert!(total.contains("total loss"));
        assert!(!total.contains("less than"));
        assert!(below.contains("less than -1.0"));
    }

    #[test]
    fn non_numeric_names_the_kind() {
        let err = FinmetrixError::NonNumeric {
            index: 1,
            kind: "text",
        };
        assert_eq!(
            err.to_string(),
            "return at index 1 must be numeric, got text"
        );
    }
}
