use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::PlannerError;
use crate::PlannerResult;

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates expressed as fractions (0.05 = 5%). Never as percentages.
pub type Rate = Decimal;

/// Year fractions or counts
pub type Years = Decimal;

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}

/// Boundary check: reject negative amounts before any formula runs.
pub(crate) fn require_non_negative(field: &str, value: Decimal) -> PlannerResult<()> {
    if value < Decimal::ZERO {
        return Err(PlannerError::invalid(field, "must be non-negative"));
    }
    Ok(())
}

/// Boundary check: fractions such as tax rates must lie in [0, 1].
pub(crate) fn require_unit_fraction(field: &str, value: Decimal) -> PlannerResult<()> {
    if value < Decimal::ZERO || value > Decimal::ONE {
        return Err(PlannerError::invalid(field, "must be between 0 and 1"));
    }
    Ok(())
}

/// Compute (1 + r)^n via iterative multiplication (avoids Decimal::powd drift).
pub(crate) fn compound(rate: Rate, n: u32) -> Decimal {
    let mut result = Decimal::ONE;
    let factor = Decimal::ONE + rate;
    for _ in 0..n {
        result *= factor;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_compound_basic() {
        // 1.1^3 = 1.331
        assert_eq!(compound(dec!(0.10), 3), dec!(1.331));
    }

    #[test]
    fn test_compound_zero_periods() {
        assert_eq!(compound(dec!(0.10), 0), Decimal::ONE);
    }

    #[test]
    fn test_require_non_negative() {
        assert!(require_non_negative("rent", dec!(0)).is_ok());
        assert!(require_non_negative("rent", dec!(-1)).is_err());
    }

    #[test]
    fn test_require_unit_fraction() {
        assert!(require_unit_fraction("tax_rate", dec!(0.20)).is_ok());
        assert!(require_unit_fraction("tax_rate", dec!(1.01)).is_err());
        assert!(require_unit_fraction("tax_rate", dec!(-0.01)).is_err());
    }
}
