use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use retire_core::inflation::{self, InflationInput};

use crate::input;

/// Arguments for the inflation comparison
#[derive(Args)]
pub struct InflationArgs {
    /// Path to a JSON input file (takes precedence over the flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Monthly contribution, also the seed of both tracks
    #[arg(long, default_value = "500")]
    pub monthly_base_amount: Decimal,

    /// Assumed annual inflation rate as a fraction (0.03 = 3%)
    #[arg(long, default_value = "0.03")]
    pub inflation_rate: Decimal,

    /// Nominal annual growth rate as a fraction (0.08 = 8%)
    #[arg(long, default_value = "0.08")]
    pub growth_rate: Decimal,

    /// Projection horizon in years
    #[arg(long, default_value = "30")]
    pub years: u32,
}

pub fn run_inflation(args: InflationArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let inflation_input: InflationInput = if let Some(ref path) = args.input {
        input::read_json(path)?
    } else if let Some(data) = input::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        InflationInput {
            monthly_base_amount: args.monthly_base_amount,
            inflation_rate: args.inflation_rate,
            growth_rate: args.growth_rate,
            years: args.years,
        }
    };
    let result = inflation::project_inflation_comparison(&inflation_input)?;
    Ok(serde_json::to_value(result)?)
}
