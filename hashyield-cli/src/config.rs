//! Configuration management for the HashYield CLI
//!
//! Values come from environment variables with sensible defaults; command-line
//! flags override them.

use std::{env, path::PathBuf};

/// Most decimal places human output will render
pub const MAX_DISPLAY_DECIMALS: usize = 12;

const DEFAULT_MIN_WITHDRAWAL: f64 = 10.0;

/// Centralized configuration for the HashYield CLI
#[derive(Debug, Clone)]
pub struct HashYieldCliConfig {
    /// Default output format for CLI commands
    pub default_output_format: String,

    /// Catalog file overriding the built-in plans and packages
    pub catalog_path: Option<PathBuf>,

    /// Commission rates in percent for levels 1, 2 and 3
    pub tier_rates: [f64; 3],

    /// Smallest amount a withdrawal may request
    pub min_withdrawal: f64,

    /// Decimal places for amounts in human output, at most `MAX_DISPLAY_DECIMALS`
    pub display_decimals: usize,
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

/// Non-negative finite amount from the environment, else the default
fn env_amount(key: &str, default: f64) -> f64 {
    Some(env_parse(key, default))
        .filter(|v| v.is_finite() && *v >= 0.0)
        .unwrap_or(default)
}

impl HashYieldCliConfig {
    /// Create a new configuration instance with values from environment variables
    /// or sensible defaults if not set
    #[must_use]
    pub fn new() -> Self {
        Self {
            default_output_format: env::var("HASHYIELD_DEFAULT_OUTPUT_FORMAT")
                .unwrap_or_else(|_| "human".to_string()),

            catalog_path: env::var_os("HASHYIELD_CATALOG_PATH").map(PathBuf::from),

            tier_rates: [
                env_parse("HASHYIELD_TIER1_RATE", 5.0),
                env_parse("HASHYIELD_TIER2_RATE", 3.0),
                env_parse("HASHYIELD_TIER3_RATE", 1.0),
            ],

            min_withdrawal: env_amount("HASHYIELD_MIN_WITHDRAWAL", DEFAULT_MIN_WITHDRAWAL),

            display_decimals: env_parse::<usize>("HASHYIELD_DISPLAY_DECIMALS", 2)
                .min(MAX_DISPLAY_DECIMALS),
        }
    }

    /// Format an amount with the configured number of decimals
    #[must_use]
    pub fn format_amount(&self, amount: f64) -> String {
        format!("{amount:.prec$}", prec = self.precision())
    }

    /// Format a percentage with the configured number of decimals
    #[must_use]
    pub fn format_percent(&self, percent: f64) -> String {
        format!("{percent:.prec$}%", prec = self.precision())
    }

    fn precision(&self) -> usize {
        self.display_decimals.min(MAX_DISPLAY_DECIMALS)
    }
}

impl Default for HashYieldCliConfig {
    fn default() -> Self {
        Self::new()
    }
}
