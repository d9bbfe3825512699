//! Ad-hoc return calculation command

use super::CommandOutput;
use crate::{config::HashYieldCliConfig, utils::formatting::format_returns_human};
use anyhow::{anyhow, Result};
use hashyield_sdk::YieldDesk;
use tracing::info;

/// Arguments for an ad-hoc return calculation
pub struct ReturnsRequest {
    pub principal: f64,
    pub rate_percent: f64,
    pub term_periods: u32,
    pub compounding: bool,
}

/// Execute the returns command
///
/// # Errors
/// Returns error if principal or rate are not positive numbers
pub fn execute(
    desk: &YieldDesk,
    request: &ReturnsRequest,
    config: &HashYieldCliConfig,
) -> Result<CommandOutput> {
    info!(
        "Computing returns: principal {}, rate {}%, {} periods, compounding {}",
        request.principal, request.rate_percent, request.term_periods, request.compounding
    );

    let returns = desk
        .returns(
            request.principal,
            request.rate_percent,
            request.term_periods,
            request.compounding,
        )
        .map_err(|e| anyhow!("Cannot compute returns: {e}"))?;

    CommandOutput::new(format_returns_human(&returns, config), &returns)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_returns_output() {
        let request = ReturnsRequest {
            principal: 1_000.0,
            rate_percent: 2.0,
            term_periods: 10,
            compounding: false,
        };
        let output = execute(&YieldDesk::default(), &request, &HashYieldCliConfig::new()).unwrap();

        assert!((output.data["total_return"].as_f64().unwrap() - 200.0).abs() < 1e-9);
        assert!((output.data["periodic_return"].as_f64().unwrap() - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_compound_periodic_is_null() {
        let request = ReturnsRequest {
            principal: 1_000.0,
            rate_percent: 2.0,
            term_periods: 10,
            compounding: true,
        };
        let output = execute(&YieldDesk::default(), &request, &HashYieldCliConfig::new()).unwrap();
        assert!(output.data["periodic_return"].is_null());
    }

    #[test]
    fn test_negative_principal_rejected() {
        let request = ReturnsRequest {
            principal: -1.0,
            rate_percent: 2.0,
            term_periods: 10,
            compounding: false,
        };
        let err = execute(&YieldDesk::default(), &request, &HashYieldCliConfig::new()).unwrap_err();
        assert!(err.to_string().contains("Cannot compute returns"));
    }
}
