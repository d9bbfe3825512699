//! Withdrawal request check command

use super::CommandOutput;
use crate::{config::HashYieldCliConfig, utils::formatting::format_withdrawal_human};
use anyhow::Result;
use hashyield_sdk::{WithdrawalPolicy, WithdrawalRequest, YieldDesk};
use serde_json::json;
use tracing::info;

/// Execute the withdrawal check command
///
/// A rejected request is reported in the output, not as an error.
///
/// # Errors
/// Returns error if the configured minimum is invalid or the output cannot be serialized
pub fn execute(
    desk: &YieldDesk,
    request: &WithdrawalRequest,
    available_balance: f64,
    config: &HashYieldCliConfig,
) -> Result<CommandOutput> {
    info!(
        "Checking withdrawal of {} {} against balance {available_balance}",
        request.amount, request.currency_symbol
    );

    let policy = WithdrawalPolicy::new(config.min_withdrawal)?;
    let decision = desk.check_withdrawal(request, available_balance, &policy);

    CommandOutput::new(
        format_withdrawal_human(&decision),
        &json!({
            "request": request,
            "available_balance": available_balance,
            "decision": decision,
        }),
    )
}
