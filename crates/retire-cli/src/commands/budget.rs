use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use retire_core::budget::{self, IncomeExpenseInput};

use crate::input;

/// Arguments for the monthly budget calculator
#[derive(Args)]
pub struct BudgetArgs {
    /// Path to a JSON input file (takes precedence over the flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Annual salary before tax
    #[arg(long, default_value = "50000")]
    pub annual_salary: Decimal,

    /// Effective tax rate as a fraction (0.20 = 20%)
    #[arg(long, default_value = "0.20")]
    pub tax_rate: Decimal,

    /// Monthly rent
    #[arg(long, default_value = "1000")]
    pub rent: Decimal,

    /// Monthly food budget
    #[arg(long, default_value = "500")]
    pub food: Decimal,

    /// Monthly transport costs
    #[arg(long, default_value = "200")]
    pub transport: Decimal,
}

pub fn run_budget(args: BudgetArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let budget_input: IncomeExpenseInput = if let Some(ref path) = args.input {
        input::read_json(path)?
    } else if let Some(data) = input::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        IncomeExpenseInput {
            annual_salary: args.annual_salary,
            tax_rate: args.tax_rate,
            rent: args.rent,
            food: args.food,
            transport: args.transport,
        }
    };
    let result = budget::compute_income_expense(&budget_input)?;
    Ok(serde_json::to_value(result)?)
}
