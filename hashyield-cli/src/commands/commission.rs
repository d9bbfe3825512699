//! Affiliate commission command

use super::CommandOutput;
use crate::{config::HashYieldCliConfig, utils::formatting::format_commission_human};
use anyhow::{anyhow, Result};
use hashyield_sdk::YieldDesk;
use serde_json::json;
use tracing::info;

/// Execute the commission command
///
/// # Errors
/// Returns error if the deposit amount is not a positive number
pub fn execute(
    desk: &YieldDesk,
    amount: f64,
    level: u8,
    config: &HashYieldCliConfig,
) -> Result<CommandOutput> {
    info!("Resolving commission for deposit {amount} at level {level}");

    let commission = desk
        .commission(amount, level)
        .map_err(|e| anyhow!("Cannot resolve commission: {e}"))?;
    let tiers = desk.commission_table().tiers();

    CommandOutput::new(
        format_commission_human(amount, level, commission, &tiers, config),
        &json!({
            "amount": amount,
            "level": level,
            "rate_percent": desk.commission_table().rate(level),
            "commission": commission,
            "tiers": tiers,
        }),
    )
}
