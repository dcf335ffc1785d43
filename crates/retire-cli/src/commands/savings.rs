use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use retire_core::savings::{self, SavingsGoalInput};

use crate::input;

/// Arguments for the savings goal projector
#[derive(Args)]
pub struct SavingsArgs {
    /// Path to a JSON input file (takes precedence over the flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Current savings balance
    #[arg(long, default_value = "10000")]
    pub current_savings: Decimal,

    /// Savings goal at retirement
    #[arg(long, default_value = "500000")]
    pub savings_goal: Decimal,

    /// Contribution added each month
    #[arg(long, default_value = "500")]
    pub monthly_contribution: Decimal,

    /// Expected annual return as a fraction (0.08 = 8%)
    #[arg(long, default_value = "0.08")]
    pub annual_return: Decimal,

    /// Years until retirement
    #[arg(long, default_value = "30")]
    pub years_to_retirement: u32,
}

pub fn run_savings(args: SavingsArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let goal_input: SavingsGoalInput = if let Some(ref path) = args.input {
        input::read_json(path)?
    } else if let Some(data) = input::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        SavingsGoalInput {
            current_savings: args.current_savings,
            savings_goal: args.savings_goal,
            monthly_contribution: args.monthly_contribution,
            annual_return: args.annual_return,
            years_to_retirement: args.years_to_retirement,
        }
    };
    let result = savings::project_savings(&goal_input)?;
    Ok(serde_json::to_value(result)?)
}
