//! Mining profitability commands

use super::CommandOutput;
use crate::{
    config::HashYieldCliConfig,
    utils::formatting::{format_mining_earnings_human, format_mining_quote_human},
};
use anyhow::{anyhow, Result};
use hashyield_sdk::{Cryptocurrency, YieldDesk};
use tracing::{info, warn};

/// Execute the package mining quote command
///
/// # Errors
/// Returns error if the package or currency is unknown or not enough units remain
pub fn execute_package(
    desk: &YieldDesk,
    package_id: &str,
    units: u32,
    currency: &str,
    config: &HashYieldCliConfig,
) -> Result<CommandOutput> {
    info!("Quoting {units} unit(s) of package {package_id} mining {currency}");

    let quote = desk.quote_mining(package_id, units, currency)?;
    CommandOutput::new(format_mining_quote_human(&quote, config), &quote)
}

/// Arguments for a mining contract outside the catalog
pub struct CustomMiningRequest {
    pub power: f64,
    pub profitability_per_unit_per_day: f64,
    pub maintenance_fee_percent_per_day: f64,
    pub days: u32,
    pub price: f64,
}

/// Execute the custom mining contract command
///
/// # Errors
/// Returns error if power, profitability, price or fee are invalid
pub fn execute_custom(
    desk: &YieldDesk,
    request: &CustomMiningRequest,
    config: &HashYieldCliConfig,
) -> Result<CommandOutput> {
    info!(
        "Computing custom mining contract: {} GH/s for {} days",
        request.power, request.days
    );

    let crypto = Cryptocurrency::new("CUSTOM", request.profitability_per_unit_per_day);
    let earnings = desk
        .custom_mining(
            request.power,
            &crypto,
            request.maintenance_fee_percent_per_day,
            request.days,
            request.price,
        )
        .map_err(|e| anyhow!("Cannot compute mining earnings: {e}"))?;

    if !earnings.is_profitable() {
        warn!("Custom contract never breaks even");
    }

    CommandOutput::new(format_mining_earnings_human(&earnings, config), &earnings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_quote_output() {
        let output = execute_package(
            &YieldDesk::default(),
            "pro",
            1,
            "BTC",
            &HashYieldCliConfig::new(),
        )
        .unwrap();
        assert_eq!(output.data["units"], 1);
        assert_eq!(output.data["earnings"]["breakeven"]["kind"], "days");
        assert!(output.human.contains("Package: pro x1 mining BTC"));
    }

    #[test]
    fn test_custom_unprofitable_output() {
        let request = CustomMiningRequest {
            power: 100.0,
            profitability_per_unit_per_day: 0.0001,
            maintenance_fee_percent_per_day: 0.05,
            days: 30,
            price: 500.0,
        };
        let output =
            execute_custom(&YieldDesk::default(), &request, &HashYieldCliConfig::new()).unwrap();
        assert_eq!(output.data["breakeven"]["kind"], "never");
        assert!(output.human.contains("Warning"));
    }

    #[test]
    fn test_custom_invalid_power() {
        let request = CustomMiningRequest {
            power: 0.0,
            profitability_per_unit_per_day: 1.0,
            maintenance_fee_percent_per_day: 0.05,
            days: 30,
            price: 500.0,
        };
        assert!(execute_custom(&YieldDesk::default(), &request, &HashYieldCliConfig::new()).is_err());
    }

    #[test]
    fn test_custom_non_finite_profitability() {
        for profitability in [f64::NAN, f64::INFINITY] {
            let request = CustomMiningRequest {
                power: 100.0,
                profitability_per_unit_per_day: profitability,
                maintenance_fee_percent_per_day: 0.05,
                days: 30,
                price: 500.0,
            };
            let err = execute_custom(&YieldDesk::default(), &request, &HashYieldCliConfig::new())
                .unwrap_err();
            assert!(err.to_string().contains("Profitability"));
        }
    }
}
