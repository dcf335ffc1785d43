mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::budget::BudgetArgs;
use commands::inflation::InflationArgs;
use commands::investment::InvestmentArgs;
use commands::loan::LoanArgs;
use commands::savings::SavingsArgs;

/// Retirement planning calculations
#[derive(Parser)]
#[command(
    name = "retire",
    version,
    about = "Retirement planning calculations",
    long_about = "A CLI for retirement savings planning with decimal precision. \
                  Covers monthly budgeting, savings goal projections, compound \
                  interest, inflation-adjusted growth comparisons, and loan \
                  amortization schedules."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Monthly take-home income, expense total, and savings surplus
    Budget(BudgetArgs),
    /// Project savings growth toward a retirement goal
    Savings(SavingsArgs),
    /// Compound interest on a lump-sum investment
    Investment(InvestmentArgs),
    /// Compare nominal vs. inflation-adjusted growth
    Inflation(InflationArgs),
    /// Build a fixed-payment loan amortization schedule
    Loan(LoanArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Budget(args) => commands::budget::run_budget(args),
        Commands::Savings(args) => commands::savings::run_savings(args),
        Commands::Investment(args) => commands::investment::run_investment(args),
        Commands::Inflation(args) => commands::inflation::run_inflation(args),
        Commands::Loan(args) => commands::loan::run_loan(args),
        Commands::Version => {
            println!("retire {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
