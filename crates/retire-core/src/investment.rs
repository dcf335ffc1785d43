//! Compound interest on a lump-sum investment.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::PlannerError;
use crate::types::{compound, require_non_negative, with_metadata, ComputationOutput, Money, Rate, Years};
use crate::PlannerResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Input parameters for the compound-interest calculator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestmentInput {
    pub principal: Money,
    /// Annual interest rate as a fraction (0.05 = 5%).
    pub annual_rate: Rate,
    /// Compounding periods per year; must be at least 1.
    pub compounds_per_year: u32,
    /// Holding period in years; fractional years are allowed.
    pub years: Years,
}

/// Output of `compute_investment_return`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestmentOutput {
    pub final_value: Money,
    pub interest_earned: Money,
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

/// Evaluate the discrete compound-interest formula
/// `P * (1 + r/n)^(n*t)` for a single lump sum.
pub fn compute_investment_return(
    input: &InvestmentInput,
) -> PlannerResult<ComputationOutput<InvestmentOutput>> {
    let start = Instant::now();

    require_non_negative("principal", input.principal)?;
    require_non_negative("annual_rate", input.annual_rate)?;
    require_non_negative("years", input.years)?;
    if input.compounds_per_year == 0 {
        return Err(PlannerError::invalid(
            "compounds_per_year",
            "must be at least 1",
        ));
    }

    let n = Decimal::from(input.compounds_per_year);
    let periodic_rate = input.annual_rate / n;
    let periods = n * input.years;

    // Whole period counts use iterative multiplication for exactness;
    // fractional holding periods fall back to Decimal::powd.
    let growth = match periods.fract().is_zero().then(|| periods.to_u32()).flatten() {
        Some(whole) => compound(periodic_rate, whole),
        None => (Decimal::ONE + periodic_rate).powd(periods),
    };

    let final_value = input.principal * growth;
    let output = InvestmentOutput {
        final_value,
        interest_earned: final_value - input.principal,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Discrete compound interest: P * (1 + r/n)^(n*t)",
        &serde_json::json!({
            "annual_rate": input.annual_rate.to_string(),
            "compounds_per_year": input.compounds_per_year,
            "years": input.years.to_string(),
        }),
        Vec::new(),
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
