//! Monthly income and expense budgeting.
//!
//! Converts an annual salary into after-tax monthly income, totals the fixed
//! monthly expenses, and reports the monthly surplus available for saving.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::types::{require_non_negative, require_unit_fraction, with_metadata, ComputationOutput, Money, Rate};
use crate::PlannerResult;

const MONTHS_PER_YEAR: Decimal = dec!(12);

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Input parameters for the income/expense calculator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomeExpenseInput {
    pub annual_salary: Money,
    /// Effective tax rate as a fraction (0.20 = 20%).
    pub tax_rate: Rate,
    pub rent: Money,
    pub food: Money,
    pub transport: Money,
}

/// Labelled share of the monthly expense total, for chart collaborators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseShare {
    pub label: String,
    pub amount: Money,
}

/// Output of `compute_income_expense`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomeExpenseOutput {
    pub monthly_income: Money,
    pub total_expenses: Money,
    /// Surplus clamped at zero: never reported as negative.
    pub monthly_savings: Money,
    pub expense_breakdown: Vec<ExpenseShare>,
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

/// Compute after-tax monthly income, expense total, and clamped monthly
/// surplus from a flat set of budget parameters.
pub fn compute_income_expense(
    input: &IncomeExpenseInput,
) -> PlannerResult<ComputationOutput<IncomeExpenseOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    require_non_negative("annual_salary", input.annual_salary)?;
    require_unit_fraction("tax_rate", input.tax_rate)?;
    require_non_negative("rent", input.rent)?;
    require_non_negative("food", input.food)?;
    require_non_negative("transport", input.transport)?;

    let monthly_income = input.annual_salary * (Decimal::ONE - input.tax_rate) / MONTHS_PER_YEAR;
    let total_expenses = input.rent + input.food + input.transport;

    let surplus = monthly_income - total_expenses;
    let monthly_savings = surplus.max(Decimal::ZERO);
    if surplus < Decimal::ZERO {
        warnings.push(format!(
            "Expenses exceed income by {} per month; savings clamped to 0",
            -surplus
        ));
    }

    let expense_breakdown = vec![
        ExpenseShare {
            label: "Rent".to_string(),
            amount: input.rent,
        },
        ExpenseShare {
            label: "Food".to_string(),
            amount: input.food,
        },
        ExpenseShare {
            label: "Transport".to_string(),
            amount: input.transport,
        },
    ];

    let output = IncomeExpenseOutput {
        monthly_income,
        total_expenses,
        monthly_savings,
        expense_breakdown,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "After-tax monthly income and clamped expense surplus",
        &serde_json::json!({
            "annual_salary": input.annual_salary.to_string(),
            "tax_rate": input.tax_rate.to_string(),
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

    fn default_input() -> IncomeExpenseInput {
        IncomeExpenseInput {
            annual_salary: dec!(50_000),
            tax_rate: dec!(0.20),
            rent: dec!(1_000),
            food: dec!(500),
            transport: dec!(200),
        }
    }

    // ---------------------------------------------------------------
    // Known answer: 50k at 20% tax -> 3333.33/month (2dp)
    // ---------------------------------------------------------------
    #[test]
    fn test_monthly_income_known_answer() {
        let result = compute_income_expense(&default_input()).unwrap();
        let out = &result.result;

        let rounded = out.monthly_income.round_dp(2);
        assert_eq!(rounded, dec!(3333.33));
        assert_eq!(out.total_expenses, dec!(1_700));
    }

    #[test]
    fn test_monthly_savings_is_surplus() {
        let result = compute_income_expense(&default_input()).unwrap();
        let out = &result.result;

        assert_eq!(out.monthly_savings, out.monthly_income - out.total_expenses);
        assert!(result.warnings.is_empty());
    }

    // ---------------------------------------------------------------
    // Negative surplus clamps to zero and warns
    // ---------------------------------------------------------------
    #[test]
    fn test_negative_surplus_clamped() {
        let mut input = default_input();
        input.rent = dec!(5_000);

        let result = compute_income_expense(&input).unwrap();
        assert_eq!(result.result.monthly_savings, Decimal::ZERO);
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_breakdown_matches_total() {
        let result = compute_income_expense(&default_input()).unwrap();
        let out = &result.result;

        let sum: Decimal = out.expense_breakdown.iter().map(|s| s.amount).sum();
        assert_eq!(sum, out.total_expenses);
        assert_eq!(out.expense_breakdown.len(), 3);
    }

    // ---------------------------------------------------------------
    // Idempotence: identical input -> identical output
    // ---------------------------------------------------------------
    #[test]
    fn test_idempotent() {
        let input = default_input();
        let a = compute_income_expense(&input).unwrap();
        let b = compute_income_expense(&input).unwrap();
        assert_eq!(a.result.monthly_savings, b.result.monthly_savings);
        assert_eq!(a.result.monthly_income, b.result.monthly_income);
    }

    // ---------------------------------------------------------------
    // Validation errors
    // ---------------------------------------------------------------
    #[test]
    fn test_validation_negative_salary() {
        let mut input = default_input();
        input.annual_salary = dec!(-1);
        assert!(compute_income_expense(&input).is_err());
    }

    #[test]
    fn test_validation_tax_rate_above_one() {
        let mut input = default_input();
        input.tax_rate = dec!(1.5);
        assert!(compute_income_expense(&input).is_err());
    }

    #[test]
    fn test_zero_everything_is_valid() {
        let input = IncomeExpenseInput {
            annual_salary: Decimal::ZERO,
            tax_rate: Decimal::ZERO,
            rent: Decimal::ZERO,
            food: Decimal::ZERO,
            transport: Decimal::ZERO,
        };
        let result = compute_income_expense(&input).unwrap();
        assert_eq!(result.result.monthly_savings, Decimal::ZERO);
    }
}
