//! Command implementations for the HashYield CLI
//!
//! Each command lives in its own file and returns both a human rendering and a
//! JSON value; `main` picks one according to the output format.

pub mod commission;
pub mod list_catalog;
pub mod mining;
pub mod plan_quote;
pub mod returns;
pub mod validate_address;
pub mod withdraw;

use anyhow::{anyhow, Result};
use serde::Serialize;

// Re-export command execution functions for easy access
pub use commission::execute as execute_commission;
pub use list_catalog::{execute_packages as execute_list_packages, execute_plans as execute_list_plans};
pub use mining::{execute_custom as execute_custom_mining, execute_package as execute_mining};
pub use plan_quote::execute as execute_plan_quote;
pub use returns::execute as execute_returns;
pub use validate_address::execute as execute_validate_address;
pub use withdraw::execute as execute_withdraw;

/// Result of a command in both output shapes
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub human: String,
    pub data: serde_json::Value,
}

impl CommandOutput {
    /// Pair a human rendering with the JSON form of `data`
    ///
    /// # Errors
    /// Returns an error if `data` cannot be serialized
    pub fn new<T: Serialize>(human: String, data: &T) -> Result<Self> {
        let data = serde_json::to_value(data)
            .map_err(|e| anyhow!("Failed to serialize command output: {e}"))?;
        Ok(Self { human, data })
    }
}
