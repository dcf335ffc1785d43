//! Fixed-payment loan amortization.
//!
//! Computes the level monthly payment from the annuity formula and expands it
//! into a full period-by-period schedule of interest and principal portions.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::PlannerError;
use crate::types::{compound, require_non_negative, with_metadata, ComputationOutput, Money, Rate};
use crate::PlannerResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Input parameters for the loan amortizer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanInput {
    pub principal: Money,
    /// Annual interest rate as a fraction; the schedule accrues at
    /// `annual_rate / 12` per month.
    pub annual_rate: Rate,
    pub term_months: u32,
}

/// One period of the amortization schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationRow {
    pub month: u32,
    pub beginning_balance: Money,
    pub payment: Money,
    pub interest: Money,
    pub principal: Money,
    pub end_balance: Money,
}

/// Output of `build_amortization_schedule`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanSchedule {
    pub monthly_payment: Money,
    pub total_paid: Money,
    pub total_interest: Money,
    pub schedule: Vec<AmortizationRow>,
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

/// Level payment for a fully amortizing loan:
/// `r * P / (1 - (1+r)^-n)`, with the zero-rate limit `P / n`.
fn level_payment(principal: Money, monthly_rate: Rate, term_months: u32) -> PlannerResult<Money> {
    if monthly_rate.is_zero() {
        if term_months == 0 {
            return Err(PlannerError::DegenerateFormula(
                "payment undefined when rate and term are both zero".into(),
            ));
        }
        if principal.is_zero() {
            return Err(PlannerError::DegenerateFormula(
                "payment undefined when principal and rate are both zero".into(),
            ));
        }
        return Ok(principal / Decimal::from(term_months));
    }

    let growth = compound(monthly_rate, term_months);
    let denominator = Decimal::ONE - Decimal::ONE / growth;
    if denominator.is_zero() {
        return Err(PlannerError::DivisionByZero {
            context: "annuity factor".into(),
        });
    }
    Ok(monthly_rate * principal / denominator)
}

/// Compute the fixed monthly payment and the full amortization schedule.
///
/// The terminal balance carries whatever rounding drift the fixed payment
/// accumulates; it converges to zero but is not forced there.
pub fn build_amortization_schedule(
    input: &LoanInput,
) -> PlannerResult<ComputationOutput<LoanSchedule>> {
    let start = Instant::now();

    require_non_negative("principal", input.principal)?;
    require_non_negative("annual_rate", input.annual_rate)?;
    if input.term_months == 0 {
        return Err(PlannerError::invalid("term_months", "must be at least 1"));
    }

    let monthly_rate = input.annual_rate / dec!(12);
    let payment = level_payment(input.principal, monthly_rate, input.term_months)?;

    let mut schedule = Vec::with_capacity(input.term_months as usize);
    let mut balance = input.principal;
    let mut total_interest = Decimal::ZERO;

    for month in 1..=input.term_months {
        let interest = balance * monthly_rate;
        let principal_portion = payment - interest;
        let end_balance = balance - principal_portion;

        schedule.push(AmortizationRow {
            month,
            beginning_balance: balance,
            payment,
            interest,
            principal: principal_portion,
            end_balance,
        });

        total_interest += interest;
        balance = end_balance;
    }

    let output = LoanSchedule {
        monthly_payment: payment,
        total_paid: payment * Decimal::from(input.term_months),
        total_interest,
        schedule,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Level-payment annuity amortization",
        &serde_json::json!({
            "annual_rate": input.annual_rate.to_string(),
            "monthly_rate": monthly_rate.to_string(),
            "term_months": input.term_months,
        }),
        Vec::new(),
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
