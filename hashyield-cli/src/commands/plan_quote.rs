//! Plan quote command implementation

use super::CommandOutput;
use crate::{config::HashYieldCliConfig, utils::formatting::format_plan_quote_human};
use anyhow::{anyhow, Result};
use chrono::{NaiveDate, Utc};
use hashyield_sdk::YieldDesk;
use serde_json::json;
use tracing::info;

/// Arguments for quoting a plan deposit
pub struct PlanQuoteRequest<'a> {
    pub plan_id: &'a str,
    pub amount: f64,
    /// Deposit date in `YYYY-MM-DD`; today when absent
    pub start: Option<&'a str>,
}

/// Execute the plan quote command
///
/// # Errors
/// Returns error if the plan is unknown, the amount is out of range or the date is malformed
pub fn execute(
    desk: &YieldDesk,
    request: &PlanQuoteRequest<'_>,
    config: &HashYieldCliConfig,
) -> Result<CommandOutput> {
    info!("Quoting {} into plan {}", request.amount, request.plan_id);

    let start = match request.start {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|e| anyhow!("Invalid start date '{s}': {e}"))?,
        None => Utc::now().date_naive(),
    };

    let plan = desk.catalog().plan(request.plan_id)?;
    let quote = desk.quote_plan(request.plan_id, request.amount)?;
    let schedule = desk.plan_schedule(request.plan_id, request.amount, start)?;
    let maturity = plan.maturity_date(start)?;

    info!(
        "Plan {} matures on {maturity} with {} payouts",
        request.plan_id,
        schedule.len()
    );

    let human = format_plan_quote_human(plan, &quote, &schedule, config);
    CommandOutput::new(
        human,
        &json!({
            "quote": quote,
            "start": start,
            "maturity": maturity,
            "schedule": schedule,
        }),
    )
}
