//! Savings goal projection with monthly compounding.
//!
//! Projects a starting balance forward with a fixed monthly contribution and
//! monthly-compounded annual return, then classifies progress toward the goal
//! into one of five feedback bands.

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

/// Input parameters for the savings goal projector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavingsGoalInput {
    pub current_savings: Money,
    pub savings_goal: Money,
    pub monthly_contribution: Money,
    /// Expected annual return as a fraction (0.08 = 8%), compounded monthly.
    pub annual_return: Rate,
    pub years_to_retirement: u32,
}

/// Progress band toward the savings goal. Lower bound inclusive; a progress
/// of exactly zero is its own band, distinct from the open interval above it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProgressBand {
    NotStarted,
    EarlyLow,
    Progressing,
    OnTrack,
    GoalReached,
}

impl ProgressBand {
    /// Classify a progress fraction (already capped at 1.0) into its band.
    pub fn classify(progress: Decimal) -> Self {
        if progress == Decimal::ZERO {
            ProgressBand::NotStarted
        } else if progress < dec!(0.3) {
            ProgressBand::EarlyLow
        } else if progress < dec!(0.5) {
            ProgressBand::Progressing
        } else if progress < Decimal::ONE {
            ProgressBand::OnTrack
        } else {
            ProgressBand::GoalReached
        }
    }

    /// Feedback text for the band. Plain text only; the presentation layer
    /// decides how (and whether) to show it.
    pub fn message(&self) -> &'static str {
        match self {
            ProgressBand::NotStarted => "You haven't started yet. Time to begin saving!",
            ProgressBand::EarlyLow => "Consider increasing your savings rate!",
            ProgressBand::Progressing => "You're making progress! Keep going!",
            ProgressBand::OnTrack => "You're on track! Keep pushing toward your goal!",
            ProgressBand::GoalReached => {
                "Congratulations! You've reached your retirement savings goal!"
            }
        }
    }
}

/// Output of `project_savings`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavingsProjection {
    pub future_savings: Money,
    /// Balance at each month, index 0 holding the starting balance.
    /// Length is total_months + 1.
    pub savings_over_time: Vec<Money>,
    /// Ratio of projected savings to the goal, capped at 1.0.
    pub progress: Rate,
    pub band: ProgressBand,
    pub feedback: String,
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

/// Project savings month by month toward retirement and classify progress.
///
/// A zero savings goal is treated as already achieved (any positive balance
/// exceeds it); a warning records the convention.
pub fn project_savings(
    input: &SavingsGoalInput,
) -> PlannerResult<ComputationOutput<SavingsProjection>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    require_non_negative("current_savings", input.current_savings)?;
    require_non_negative("savings_goal", input.savings_goal)?;
    require_non_negative("monthly_contribution", input.monthly_contribution)?;
    require_non_negative("annual_return", input.annual_return)?;
    if input.years_to_retirement == 0 {
        return Err(PlannerError::invalid(
            "years_to_retirement",
            "must be at least 1",
        ));
    }

    let total_months = input.years_to_retirement * MONTHS_PER_YEAR;
    let monthly_factor = Decimal::ONE + input.annual_return / dec!(12);

    let mut savings_over_time = Vec::with_capacity(total_months as usize + 1);
    let mut balance = input.current_savings;
    savings_over_time.push(balance);

    for _ in 0..total_months {
        balance = balance * monthly_factor + input.monthly_contribution;
        savings_over_time.push(balance);
    }

    let future_savings = balance;

    let progress = if input.savings_goal.is_zero() {
        warnings.push("Savings goal is zero; treated as already achieved".to_string());
        Decimal::ONE
    } else {
        (future_savings / input.savings_goal).min(Decimal::ONE)
    };

    let band = ProgressBand::classify(progress);

    let output = SavingsProjection {
        future_savings,
        savings_over_time,
        progress,
        band,
        feedback: band.message().to_string(),
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Monthly-compounded savings projection with goal progress bands",
        &serde_json::json!({
            "annual_return": input.annual_return.to_string(),
            "years_to_retirement": input.years_to_retirement,
            "total_months": total_months,
        }),
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn default_input() -> SavingsGoalInput {
        SavingsGoalInput {
            current_savings: dec!(10_000),
            savings_goal: dec!(500_000),
            monthly_contribution: dec!(500),
            annual_return: dec!(0.08),
            years_to_retirement: 30,
        }
    }

    // ---------------------------------------------------------------
    // Sequence shape: seed plus one entry per month
    // ---------------------------------------------------------------
    #[test]
    fn test_sequence_length_and_seed() {
        let input = default_input();
        let result = project_savings(&input).unwrap();
        let proj = &result.result;

        assert_eq!(proj.savings_over_time.len(), 361);
        assert_eq!(proj.savings_over_time[0], dec!(10_000));
        assert_eq!(*proj.savings_over_time.last().unwrap(), proj.future_savings);
    }

    // ---------------------------------------------------------------
    // Zero return: closed form current + c * months, exactly
    // ---------------------------------------------------------------
    #[test]
    fn test_zero_return_matches_closed_form() {
        let mut input = default_input();
        input.annual_return = Decimal::ZERO;

        let result = project_savings(&input).unwrap();
        let expected = dec!(10_000) + dec!(500) * dec!(360);
        assert_eq!(result.result.future_savings, expected);
    }

    #[test]
    fn test_growth_beats_flat_contribution() {
        let input = default_input();
        let result = project_savings(&input).unwrap();

        let flat = input.current_savings + input.monthly_contribution * dec!(360);
        assert!(result.result.future_savings > flat);
    }

    // ---------------------------------------------------------------
    // Progress band boundaries, lower bound inclusive
    // ---------------------------------------------------------------
    #[test]
    fn test_band_boundaries() {
        assert_eq!(ProgressBand::classify(dec!(0)), ProgressBand::NotStarted);
        assert_eq!(ProgressBand::classify(dec!(0.00001)), ProgressBand::EarlyLow);
        assert_eq!(ProgressBand::classify(dec!(0.29999)), ProgressBand::EarlyLow);
        assert_eq!(ProgressBand::classify(dec!(0.3)), ProgressBand::Progressing);
        assert_eq!(ProgressBand::classify(dec!(0.49999)), ProgressBand::Progressing);
        assert_eq!(ProgressBand::classify(dec!(0.5)), ProgressBand::OnTrack);
        assert_eq!(ProgressBand::classify(dec!(0.99999)), ProgressBand::OnTrack);
        assert_eq!(ProgressBand::classify(dec!(1.0)), ProgressBand::GoalReached);
        assert_eq!(ProgressBand::classify(dec!(1.5)), ProgressBand::GoalReached);
    }

    #[test]
    fn test_progress_capped_at_one() {
        let mut input = default_input();
        input.savings_goal = dec!(1_000);

        let result = project_savings(&input).unwrap();
        assert_eq!(result.result.progress, Decimal::ONE);
        assert_eq!(result.result.band, ProgressBand::GoalReached);
    }

    // ---------------------------------------------------------------
    // Zero goal: treated as achieved, with a warning
    // ---------------------------------------------------------------
    #[test]
    fn test_zero_goal_convention() {
        let mut input = default_input();
        input.savings_goal = Decimal::ZERO;

        let result = project_savings(&input).unwrap();
        assert_eq!(result.result.progress, Decimal::ONE);
        assert_eq!(result.result.band, ProgressBand::GoalReached);
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_zero_balance_zero_contribution_not_started() {
        let input = SavingsGoalInput {
            current_savings: Decimal::ZERO,
            savings_goal: dec!(500_000),
            monthly_contribution: Decimal::ZERO,
            annual_return: dec!(0.08),
            years_to_retirement: 30,
        };

        let result = project_savings(&input).unwrap();
        assert_eq!(result.result.progress, Decimal::ZERO);
        assert_eq!(result.result.band, ProgressBand::NotStarted);
    }

    // ---------------------------------------------------------------
    // Idempotence: identical input yields identical sequence
    // ---------------------------------------------------------------
    #[test]
    fn test_idempotent() {
        let input = default_input();
        let a = project_savings(&input).unwrap();
        let b = project_savings(&input).unwrap();
        assert_eq!(a.result.savings_over_time, b.result.savings_over_time);
        assert_eq!(a.result.progress, b.result.progress);
    }

    // ---------------------------------------------------------------
    // Validation errors
    // ---------------------------------------------------------------
    #[test]
    fn test_validation_zero_years() {
        let mut input = default_input();
        input.years_to_retirement = 0;
        assert!(project_savings(&input).is_err());
    }

    #[test]
    fn test_validation_negative_contribution() {
        let mut input = default_input();
        input.monthly_contribution = dec!(-50);
        assert!(project_savings(&input).is_err());
    }
}
