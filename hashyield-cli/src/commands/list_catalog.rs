//! List plans and mining packages from the catalog

use super::CommandOutput;
use crate::{
    config::HashYieldCliConfig,
    utils::formatting::{format_packages_human, format_plans_human},
};
use anyhow::Result;
use hashyield_sdk::YieldDesk;
use tracing::info;

/// Execute the plans listing command
///
/// # Errors
/// Returns error if the plans cannot be serialized
pub fn execute_plans(desk: &YieldDesk, config: &HashYieldCliConfig) -> Result<CommandOutput> {
    let plans = &desk.catalog().plans;
    info!("Listing {} investment plans", plans.len());
    CommandOutput::new(format_plans_human(plans, config), plans)
}

/// Execute the mining packages listing command
///
/// # Errors
/// Returns error if the packages cannot be serialized
pub fn execute_packages(desk: &YieldDesk, config: &HashYieldCliConfig) -> Result<CommandOutput> {
    let packages = &desk.catalog().packages;
    info!("Listing {} mining packages", packages.len());
    CommandOutput::new(format_packages_human(packages, config), packages)
}
