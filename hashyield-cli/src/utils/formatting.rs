//! Output formatting utilities for the HashYield CLI

use crate::config::HashYieldCliConfig;
use hashyield_sdk::{
    Breakeven, CommissionTier, MiningEarnings, MiningPackage, MiningQuote, Payout, Plan,
    PlanQuote, Returns, WithdrawalDecision,
};
use std::fmt::Write;

/// Format plans for human-readable output
#[must_use]
pub fn format_plans_human(plans: &[Plan], config: &HashYieldCliConfig) -> String {
    if plans.is_empty() {
        return "No investment plans available".to_string();
    }

    let mut output = String::from("Investment plans\n\n");

    // Use write! to avoid extra allocations
    writeln!(
        &mut output,
        "{:<10} {:<10} {:>12} {:>12} {:>8} {:<10} {:<10} {:<12} {:<8}",
        "ID", "Name", "Min", "Max", "Rate", "Term", "Returns", "Payout", "Reinvest"
    )
    .unwrap();
    output.push_str(&"-".repeat(100));
    output.push('\n');

    for plan in plans {
        writeln!(
            &mut output,
            "{:<10} {:<10} {:>12} {:>12} {:>8} {:<10} {:<10} {:<12} {:<8}",
            plan.id,
            plan.name,
            config.format_amount(plan.min_amount),
            config.format_amount(plan.max_amount),
            config.format_percent(plan.rate_percent),
            plan.term_formatted(),
            if plan.is_compounding() { "Compound" } else { "Fixed" },
            plan.payout_interval.label(),
            if plan.reinvest_allowed { "Yes" } else { "No" },
        )
        .unwrap();
    }

    write!(&mut output, "\nTotal plans: {}", plans.len()).unwrap();
    output
}

/// Format mining packages for human-readable output
#[must_use]
pub fn format_packages_human(packages: &[MiningPackage], config: &HashYieldCliConfig) -> String {
    if packages.is_empty() {
        return "No mining packages available".to_string();
    }

    let mut output = String::from("Mining packages\n\n");
    writeln!(
        &mut output,
        "{:<12} {:<12} {:>12} {:>12} {:>10} {:>12} {:>10}",
        "ID", "Name", "Power (GH/s)", "Price", "Days", "Fee/day", "Available"
    )
    .unwrap();
    output.push_str(&"-".repeat(88));
    output.push('\n');

    for package in packages {
        writeln!(
            &mut output,
            "{:<12} {:<12} {:>12} {:>12} {:>10} {:>12} {:>10}",
            package.id,
            package.name,
            package.power,
            config.format_amount(package.price),
            package.duration_days,
            format!("{}%", package.maintenance_fee_percent_per_day),
            package.available_units,
        )
        .unwrap();
    }

    write!(&mut output, "\nTotal packages: {}", packages.len()).unwrap();
    output
}

/// Format a return calculation for human-readable output
#[must_use]
pub fn format_returns_human(returns: &Returns, config: &HashYieldCliConfig) -> String {
    let periodic = returns
        .periodic_return
        .map_or_else(|| "Compounding".to_string(), |p| config.format_amount(p));

    format!(
        "Periodic return: {periodic}\nTotal return:    {}\nFinal amount:    {}",
        config.format_amount(returns.total_return),
        config.format_amount(returns.final_amount),
    )
}

/// Format a plan quote and its payout schedule for human-readable output
#[must_use]
pub fn format_plan_quote_human(
    plan: &Plan,
    quote: &PlanQuote,
    schedule: &[Payout],
    config: &HashYieldCliConfig,
) -> String {
    let mut output = format!(
        "Plan: {} ({})\nDeposit: {}\nRate: {} per day, {}\nTerm: {}\n",
        plan.name,
        plan.id,
        config.format_amount(quote.amount),
        config.format_percent(plan.rate_percent),
        if plan.is_compounding() { "compounding" } else { "fixed" },
        plan.term_formatted(),
    );
    output.push_str(&format_returns_human(&quote.returns, config));
    writeln!(&mut output, "\nROI: {}", config.format_percent(quote.roi_percent)).unwrap();

    writeln!(
        &mut output,
        "\nPayout schedule ({}, {} payouts)",
        plan.payout_interval.label(),
        schedule.len()
    )
    .unwrap();
    for payout in schedule {
        writeln!(
            &mut output,
            "  {}  {:>14}",
            payout.date,
            config.format_amount(payout.amount)
        )
        .unwrap();
    }

    output.trim_end().to_string()
}

/// Format mining earnings for human-readable output
#[must_use]
pub fn format_mining_earnings_human(earnings: &MiningEarnings, config: &HashYieldCliConfig) -> String {
    let breakeven = match earnings.breakeven {
        Breakeven::Days(days) => format!("{days:.2} days"),
        Breakeven::Never => "Never (contract is not profitable)".to_string(),
    };

    let mut output = format!(
        "Daily gross:       {}\nDaily maintenance: {}\nDaily net:         {}\nTotal net:         {}\nROI:               {}\nBreakeven:         {breakeven}",
        config.format_amount(earnings.daily_gross),
        config.format_amount(earnings.daily_maintenance_fee),
        config.format_amount(earnings.daily_net),
        config.format_amount(earnings.total_net),
        config.format_percent(earnings.roi_percent),
    );

    if !earnings.is_profitable() {
        output.push_str("\nWarning: maintenance fees exceed mining income");
    }
    output
}

/// Format a mining package quote for human-readable output
#[must_use]
pub fn format_mining_quote_human(quote: &MiningQuote, config: &HashYieldCliConfig) -> String {
    format!(
        "Package: {} x{} mining {}\nTotal power: {} GH/s\nTotal price: {}\nDuration:    {} days\n{}",
        quote.package_id,
        quote.units,
        quote.currency,
        quote.total_power,
        config.format_amount(quote.total_price),
        quote.duration_days,
        format_mining_earnings_human(&quote.earnings, config),
    )
}

/// Format a commission calculation for human-readable output
#[must_use]
pub fn format_commission_human(
    amount: f64,
    level: u8,
    commission: f64,
    tiers: &[CommissionTier],
    config: &HashYieldCliConfig,
) -> String {
    let mut output = String::from("Commission tiers\n");
    for tier in tiers {
        let marker = if tier.level == level { "*" } else { " " };
        writeln!(
            &mut output,
            " {marker} Level {}: {}",
            tier.level,
            config.format_percent(tier.rate_percent)
        )
        .unwrap();
    }
    if !tiers.iter().any(|t| t.level == level) {
        writeln!(&mut output, "Level {level} is beyond the commission depth").unwrap();
    }
    write!(
        &mut output,
        "\nDeposit {} at level {level} earns {}",
        config.format_amount(amount),
        config.format_amount(commission)
    )
    .unwrap();
    output
}

/// Format a withdrawal decision for human-readable output
#[must_use]
pub fn format_withdrawal_human(decision: &WithdrawalDecision) -> String {
    match decision {
        WithdrawalDecision::Accepted => "Withdrawal request accepted".to_string(),
        WithdrawalDecision::Rejected(reason) => format!("Withdrawal request rejected: {reason}"),
    }
}
