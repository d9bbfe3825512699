//! Domain types shared by the calculators, the catalog and the CLI

use serde::{Deserialize, Serialize};

/// How a plan turns its rate into returns
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReturnType {
    /// Rate applies to the original principal every period
    Fixed,
    /// Rate applies to the running balance every period
    Compound,
}

/// How often a plan pays out accrued returns
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayoutInterval {
    Daily,
    Weekly,
    Monthly,
    EndOfTerm,
}

impl PayoutInterval {
    /// Length of one payout interval in days for a plan of `term_days`
    #[must_use]
    pub const fn days(self, term_days: u32) -> u32 {
        match self {
            Self::Daily => 1,
            Self::Weekly => 7,
            Self::Monthly => 30,
            Self::EndOfTerm => term_days,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::EndOfTerm => "end of term",
        }
    }
}

/// Investment plan offered on the platform
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    /// Catalog identifier (e.g. "gold")
    pub id: String,
    /// Display name
    pub name: String,
    /// Smallest accepted deposit
    pub min_amount: f64,
    /// Largest accepted deposit
    pub max_amount: f64,
    /// Percent per period; fixed or compounding depending on `return_type`
    pub rate_percent: f64,
    /// Number of daily periods the deposit is locked for
    pub term_days: u32,
    pub return_type: ReturnType,
    pub payout_interval: PayoutInterval,
    /// Whether payouts may be rolled back into the plan
    #[serde(default)]
    pub reinvest_allowed: bool,
}

impl Plan {
    /// Whether returns compound over the term
    #[must_use]
    pub fn is_compounding(&self) -> bool {
        self.return_type == ReturnType::Compound
    }

    /// Term in human readable format
    #[must_use]
    pub fn term_formatted(&self) -> String {
        match self.term_days {
            1 => "1 day".to_string(),
            7 => "1 week".to_string(),
            30 => "1 month".to_string(),
            365 => "1 year".to_string(),
            days => format!("{days} days"),
        }
    }
}

/// Mining power package sold on the marketplace
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MiningPackage {
    pub id: String,
    pub name: String,
    /// Hash rate per unit, in GH/s
    pub power: f64,
    /// Price per unit
    pub price: f64,
    /// Contract length in days
    pub duration_days: u32,
    /// Maintenance fee, percent of power per day
    pub maintenance_fee_percent_per_day: f64,
    /// Units still for sale
    pub available_units: u32,
}

/// Mineable currency with its payout rate
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cryptocurrency {
    /// Ticker symbol (e.g. "BTC")
    pub symbol: String,
    /// Earnings in display currency per hash-rate unit per day
    pub profitability_per_unit_per_day: f64,
}

impl Cryptocurrency {
    #[must_use]
    pub fn new(symbol: &str, profitability_per_unit_per_day: f64) -> Self {
        Self {
            symbol: symbol.to_string(),
            profitability_per_unit_per_day,
        }
    }

    /// Build the per-unit profitability from a coin yield and a spot price
    ///
    /// The dashboard quotes mining yields in coins per GH/s per day; multiplying by
    /// the spot price gives the display-currency figure the calculators work with.
    #[must_use]
    #[allow(clippy::arithmetic_side_effects)]
    pub fn from_coin_yield(symbol: &str, coins_per_unit_per_day: f64, spot_price: f64) -> Self {
        Self::new(symbol, coins_per_unit_per_day * spot_price)
    }
}

/// Affiliate commission tier
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CommissionTier {
    /// Depth in the referral chain, 1 to 3
    pub level: u8,
    pub rate_percent: f64,
}

/// Withdrawal submitted from the dashboard; never persisted
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WithdrawalRequest {
    pub amount: f64,
    pub currency_symbol: String,
    pub destination_address: String,
}
