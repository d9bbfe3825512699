//! HashYield CLI - Command-line interface for the HashYield calculators
//!
//! Quotes investment plans, mining contracts and affiliate commissions, and
//! checks withdrawal requests, using the same rules as the dashboard.

#![forbid(unsafe_code)]

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use hashyield_cli::{
    commands::{
        self, mining::CustomMiningRequest, plan_quote::PlanQuoteRequest, returns::ReturnsRequest,
        CommandOutput,
    },
    config::HashYieldCliConfig,
};
use hashyield_sdk::{load_catalog, WithdrawalRequest, YieldDesk};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "hashyield-cli",
    version,
    about = "Return, mining and commission calculators for the HashYield platform",
    author = "HashYield Team"
)]
struct Cli {
    /// Output format
    #[arg(long, value_enum)]
    output: Option<OutputFormat>,

    /// Catalog JSON file with plans, packages and currencies
    #[arg(long)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Debug, clap::ValueEnum)]
enum OutputFormat {
    Human,
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute returns for an arbitrary principal, rate and term
    Returns {
        /// Amount invested
        #[arg(long)]
        principal: f64,

        /// Rate in percent per period
        #[arg(long)]
        rate: f64,

        /// Number of periods
        #[arg(long)]
        term: u32,

        /// Compound the rate on the running balance
        #[arg(long)]
        compound: bool,
    },

    /// List investment plans
    Plans,

    /// Quote a deposit into an investment plan
    PlanQuote {
        /// Plan identifier
        #[arg(long)]
        plan: String,

        /// Deposit amount
        #[arg(long)]
        amount: f64,

        /// Deposit date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        start: Option<String>,
    },

    /// List mining packages
    Packages,

    /// Quote buying units of a mining package
    Mining {
        /// Package identifier
        #[arg(long)]
        package: String,

        /// Number of units to buy
        #[arg(long, default_value = "1")]
        units: u32,

        /// Currency to mine (e.g. BTC)
        #[arg(long)]
        currency: String,
    },

    /// Compute earnings for a custom mining contract
    MiningCustom {
        /// Hash power in GH/s
        #[arg(long)]
        power: f64,

        /// Earnings per GH/s per day
        #[arg(long)]
        profitability: f64,

        /// Maintenance fee in percent of power per day
        #[arg(long, default_value = "0.05")]
        fee: f64,

        /// Contract length in days
        #[arg(long)]
        days: u32,

        /// Contract price
        #[arg(long)]
        price: f64,
    },

    /// Compute the commission a referrer earns from a deposit
    Commission {
        /// Deposit amount
        #[arg(long)]
        amount: f64,

        /// Referral depth (1 = direct referral)
        #[arg(long)]
        level: u8,
    },

    /// Check a withdrawal address format
    ValidateAddress {
        /// Destination address
        #[arg(long)]
        address: String,

        /// Currency symbol (BTC, ETH, USDT, TRX)
        #[arg(long)]
        currency: String,
    },

    /// Check a withdrawal request against balance and limits
    Withdraw {
        /// Amount to withdraw
        #[arg(long)]
        amount: f64,

        /// Currency symbol
        #[arg(long)]
        currency: String,

        /// Destination address
        #[arg(long)]
        address: String,

        /// Available balance
        #[arg(long)]
        balance: f64,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = HashYieldCliConfig::new();

    let default_output_format = parse_output_format(&config.default_output_format)?;
    let output_format = cli.output.as_ref().unwrap_or(&default_output_format);

    // Execute command
    let result = build_desk(&cli, &config).and_then(|desk| execute_command(&cli, &desk, &config));

    // Handle output formatting
    match result {
        Ok(output) => match output_format {
            OutputFormat::Human => println!("{}", output.human),
            OutputFormat::Json => {
                let json_output = serde_json::json!({
                    "success": true,
                    "data": output.data
                });
                println!("{}", serde_json::to_string_pretty(&json_output)?);
            }
        },
        Err(e) => {
            match output_format {
                OutputFormat::Human => eprintln!("Error: {e}"),
                OutputFormat::Json => {
                    let json_output = serde_json::json!({
                        "success": false,
                        "error": e.to_string()
                    });
                    println!("{}", serde_json::to_string_pretty(&json_output)?);
                }
            }
            std::process::exit(1);
        }
    }

    Ok(())
}

/// Parse output format from string
fn parse_output_format(format_str: &str) -> Result<OutputFormat> {
    match format_str.to_lowercase().as_str() {
        "human" => Ok(OutputFormat::Human),
        "json" => Ok(OutputFormat::Json),
        _ => Err(anyhow!("Invalid output format: {}", format_str)),
    }
}

/// Load the catalog and apply configured commission rates
fn build_desk(cli: &Cli, config: &HashYieldCliConfig) -> Result<YieldDesk> {
    let catalog_path = cli.catalog.as_deref().or(config.catalog_path.as_deref());
    let catalog = load_catalog(catalog_path)?;

    let mut desk = YieldDesk::new(catalog);
    desk.set_commission_rates(config.tier_rates)
        .map_err(|e| anyhow!("Invalid commission rates in environment: {e}"))?;
    Ok(desk)
}

fn execute_command(
    cli: &Cli,
    desk: &YieldDesk,
    config: &HashYieldCliConfig,
) -> Result<CommandOutput> {
    match &cli.command {
        Commands::Returns {
            principal,
            rate,
            term,
            compound,
        } => {
            let request = ReturnsRequest {
                principal: *principal,
                rate_percent: *rate,
                term_periods: *term,
                compounding: *compound,
            };
            commands::execute_returns(desk, &request, config)
        }

        Commands::Plans => commands::execute_list_plans(desk, config),

        Commands::PlanQuote {
            plan,
            amount,
            start,
        } => {
            let request = PlanQuoteRequest {
                plan_id: plan,
                amount: *amount,
                start: start.as_deref(),
            };
            commands::execute_plan_quote(desk, &request, config)
        }

        Commands::Packages => commands::execute_list_packages(desk, config),

        Commands::Mining {
            package,
            units,
            currency,
        } => commands::execute_mining(desk, package, *units, currency, config),

        Commands::MiningCustom {
            power,
            profitability,
            fee,
            days,
            price,
        } => {
            let request = CustomMiningRequest {
                power: *power,
                profitability_per_unit_per_day: *profitability,
                maintenance_fee_percent_per_day: *fee,
                days: *days,
                price: *price,
            };
            commands::execute_custom_mining(desk, &request, config)
        }

        Commands::Commission { amount, level } => {
            commands::execute_commission(desk, *amount, *level, config)
        }

        Commands::ValidateAddress { address, currency } => {
            commands::execute_validate_address(address, currency)
        }

        Commands::Withdraw {
            amount,
            currency,
            address,
            balance,
        } => {
            let request = WithdrawalRequest {
                amount: *amount,
                currency_symbol: currency.clone(),
                destination_address: address.clone(),
            };
            commands::execute_withdraw(desk, &request, *balance, config)
        }
    }
}
