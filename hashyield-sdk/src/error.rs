//! Error types for the HashYield SDK
//!
//! Every calculator in this crate is infallible on validated input. Errors come
//! from the validation layer, from catalog lookups, and from the few decisions
//! that need the caller to branch:
//!
//! - `InvalidInput` - negative, zero or non-finite principal, rate, term, power, price or profitability
//! - `AmountOutOfRange` - a deposit outside the plan's `min..=max` bounds
//! - `UnprofitableContract` - mining net income is not positive, so breakeven is undefined
//! - `UnsupportedCurrency` - no address pattern or profitability entry for the symbol
//!
//! # Example
//!
//! ```rust
//! use hashyield_sdk::{error::HashYieldError, mining::compute_mining_earnings, Cryptocurrency};
//!
//! let crypto = Cryptocurrency::new("BTC", 0.001);
//! let earnings = compute_mining_earnings(10.0, &crypto, 5.0, 30, 100.0);
//!
//! match earnings.breakeven_days() {
//!     Ok(days) => println!("Breakeven after {days:.1} days"),
//!     Err(HashYieldError::UnprofitableContract { daily_net }) => {
//!         println!("Contract loses {daily_net:.4} per day");
//!     }
//!     Err(other) => println!("Other error: {other}"),
//! }
//! ```

use thiserror::Error;

/// Result type for HashYield SDK operations
pub type Result<T> = std::result::Result<T, HashYieldError>;

/// Error types that can occur when using the HashYield SDK
#[derive(Error, Debug)]
pub enum HashYieldError {
    /// A numeric input failed validation
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Deposit amount outside the plan bounds
    #[error("Amount {amount} is outside the plan range {min}..={max}")]
    AmountOutOfRange { amount: f64, min: f64, max: f64 },

    /// Mining contract never pays back its price
    #[error("Unprofitable contract: daily net earnings are {daily_net}, breakeven is undefined")]
    UnprofitableContract { daily_net: f64 },

    /// No pattern or profitability entry for the currency symbol
    #[error("Unsupported currency: {0}")]
    UnsupportedCurrency(String),

    /// Mining package does not have enough units left
    #[error("Insufficient units: requested {requested}, available {available}")]
    InsufficientUnits { requested: u32, available: u32 },

    /// Withdrawal amount exceeds the available balance
    #[error("Insufficient balance: required {required}, available {available}")]
    InsufficientBalance { required: f64, available: f64 },

    /// Investment plan id not present in the catalog
    #[error("Plan not found: {0}")]
    PlanNotFound(String),

    /// Mining package id not present in the catalog
    #[error("Mining package not found: {0}")]
    PackageNotFound(String),

    /// Error from serde JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error reading a catalog or settings file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error with message
    #[error("HashYield SDK error: {0}")]
    Generic(String),
}

impl From<String> for HashYieldError {
    fn from(msg: String) -> Self {
        Self::Generic(msg)
    }
}

impl From<&str> for HashYieldError {
    fn from(msg: &str) -> Self {
        Self::Generic(msg.to_string())
    }
}

impl From<anyhow::Error> for HashYieldError {
    fn from(error: anyhow::Error) -> Self {
        Self::Generic(error.to_string())
    }
}

impl HashYieldError {
    /// Whether the error stems from user-supplied values rather than the environment
    ///
    /// Callers use this to decide between showing a validation message next to
    /// the offending field and reporting a general failure.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput(_)
                | Self::AmountOutOfRange { .. }
                | Self::UnprofitableContract { .. }
                | Self::UnsupportedCurrency(_)
                | Self::InsufficientUnits { .. }
                | Self::InsufficientBalance { .. }
        )
    }
}
