//! Nominal vs. inflation-adjusted portfolio growth.
//!
//! Runs the same monthly contribution-and-growth recurrence twice: once at
//! the nominal growth rate and once at the real (growth minus inflation)
//! rate, producing two parallel series for side-by-side charting.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::PlannerError;
use crate::types::{require_non_negative, with_metadata, ComputationOutput, Money, Rate};
use crate::PlannerResult;

const MONTHS_PER_YEAR: u32 = 12;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Input parameters for the inflation comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InflationInput {
    /// Amount contributed each month; also seeds both series.
    pub monthly_base_amount: Money,
    /// Assumed annual inflation rate as a fraction.
    pub inflation_rate: Rate,
    /// Nominal annual growth rate as a fraction.
    pub growth_rate: Rate,
    pub years: u32,
}

/// Output of `project_inflation_comparison`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InflationProjection {
    /// Nominal track, one entry per month. Entry 0 is the seed amount.
    pub expected_series: Vec<Money>,
    /// Purchasing-power-adjusted track, same length as `expected_series`.
    pub real_series: Vec<Money>,
    /// Nominal minus real value at the end of the horizon.
    pub final_gap: Money,
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

/// Extend one track of the comparison: each month adds the base contribution
/// on top of the prior balance grown at `annual_rate / 12`.
fn grow_series(base: Money, annual_rate: Rate, months: u32) -> Vec<Money> {
    let factor = Decimal::ONE + annual_rate / dec!(12);
    let mut series = Vec::with_capacity(months as usize);
    series.push(base);
    for k in 1..months {
        let prev = series[k as usize - 1];
        series.push(base + prev * factor);
    }
    series
}

/// Project a monthly contribution stream at the nominal growth rate and at
/// the inflation-adjusted rate over the same horizon.
pub fn project_inflation_comparison(
    input: &InflationInput,
) -> PlannerResult<ComputationOutput<InflationProjection>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    require_non_negative("monthly_base_amount", input.monthly_base_amount)?;
    if input.years == 0 {
        return Err(PlannerError::invalid("years", "must be at least 1"));
    }

    let real_rate = input.growth_rate - input.inflation_rate;
    // A monthly factor at or below zero would flip balances negative.
    if Decimal::ONE + real_rate / dec!(12) <= Decimal::ZERO {
        return Err(PlannerError::invalid(
            "inflation_rate",
            "inflation-adjusted monthly factor must stay positive",
        ));
    }
    if real_rate < Decimal::ZERO {
        warnings.push("Inflation outpaces growth; real track shrinks in value".to_string());
    }

    let months = input.years * MONTHS_PER_YEAR;
    let expected_series = grow_series(input.monthly_base_amount, input.growth_rate, months);
    let real_series = grow_series(input.monthly_base_amount, real_rate, months);

    let final_gap = match (expected_series.last(), real_series.last()) {
        (Some(e), Some(r)) => e - r,
        _ => Decimal::ZERO,
    };

    let output = InflationProjection {
        expected_series,
        real_series,
        final_gap,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Dual-track monthly projection at nominal and inflation-adjusted rates",
        &serde_json::json!({
            "growth_rate": input.growth_rate.to_string(),
            "inflation_rate": input.inflation_rate.to_string(),
            "years": input.years,
        }),
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
