use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use retire_core::loan::{self, LoanInput};

use crate::input;

/// Arguments for the loan amortizer
#[derive(Args)]
pub struct LoanArgs {
    /// Path to a JSON input file (takes precedence over the flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Loan principal
    #[arg(long, default_value = "50000")]
    pub principal: Decimal,

    /// Annual interest rate as a fraction (0.05 = 5%)
    #[arg(long, default_value = "0.05")]
    pub annual_rate: Decimal,

    /// Loan term in months
    #[arg(long, default_value = "60")]
    pub term_months: u32,
}

pub fn run_loan(args: LoanArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let loan_input: LoanInput = if let Some(ref path) = args.input {
        input::read_json(path)?
    } else if let Some(data) = input::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        LoanInput {
            principal: args.principal,
            annual_rate: args.annual_rate,
            term_months: args.term_months,
        }
    };
    let result = loan::build_amortization_schedule(&loan_input)?;
    Ok(serde_json::to_value(result)?)
}
