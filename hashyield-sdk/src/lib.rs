//! HashYield SDK - calculators behind the HashYield investment dashboard
//!
//! This crate holds the computational core of the dashboard:
//!
//! - Return calculation for fixed and compounding investment plans
//! - Affiliate commission tiers and referral earnings
//! - Mining profitability, ROI and breakeven
//! - Withdrawal address format checks
//!
//! The calculators are pure functions over validated input. [`YieldDesk`] wraps
//! them with catalog lookups and validation.
//!
//! # Example Usage
//!
//! ```
//! use hashyield_sdk::{Catalog, YieldDesk};
//!
//! # fn main() -> hashyield_sdk::Result<()> {
//! let desk = YieldDesk::new(Catalog::builtin());
//!
//! let quote = desk.quote_plan("starter", 500.0)?;
//! println!("Final amount: {:.2}", quote.returns.final_amount);
//!
//! let mining = desk.quote_mining("pro", 1, "BTC")?;
//! println!("Breakeven: {:.2} days", mining.earnings.breakeven_days()?);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod address;
pub mod catalog;
pub mod commission;
pub mod desk;
pub mod error;
pub mod mining;
pub mod returns;
pub mod settings;
pub mod types;
pub mod validation;
pub mod withdrawal;

// Re-export commonly used items
pub use address::{address_format, is_valid_address, AddressFormat};
pub use catalog::{load_catalog, Catalog};
pub use commission::{resolve_commission, CommissionTable, Referral, ReferralSummary};
pub use desk::YieldDesk;
pub use error::{HashYieldError, Result};
pub use mining::{compute_mining_earnings, Breakeven, MiningEarnings, MiningQuote};
pub use returns::{compute_returns, payout_schedule, Payout, PlanQuote, Returns};
pub use settings::{MemorySettingsStore, Preferences, SettingsStore};
pub use types::*;
pub use withdrawal::{check_withdrawal, RejectionReason, WithdrawalDecision, WithdrawalPolicy};
