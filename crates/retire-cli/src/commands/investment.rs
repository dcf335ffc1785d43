use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use retire_core::investment::{self, InvestmentInput};

use crate::input;

/// Arguments for the compound-interest calculator
#[derive(Args)]
pub struct InvestmentArgs {
    /// Path to a JSON input file (takes precedence over the flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Initial investment
    #[arg(long, default_value = "1000")]
    pub principal: Decimal,

    /// Annual interest rate as a fraction (0.05 = 5%)
    #[arg(long, default_value = "0.05")]
    pub annual_rate: Decimal,

    /// Times interest is compounded per year
    #[arg(long, default_value = "12")]
    pub compounds_per_year: u32,

    /// Holding period in years (fractional allowed)
    #[arg(long, default_value = "10")]
    pub years: Decimal,
}

pub fn run_investment(args: InvestmentArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let invest_input: InvestmentInput = if let Some(ref path) = args.input {
        input::read_json(path)?
    } else if let Some(data) = input::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        InvestmentInput {
            principal: args.principal,
            annual_rate: args.annual_rate,
            compounds_per_year: args.compounds_per_year,
            years: args.years,
        }
    };
    let result = investment::compute_investment_return(&invest_input)?;
    Ok(serde_json::to_value(result)?)
}
