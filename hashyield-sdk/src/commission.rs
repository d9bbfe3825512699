//! Affiliate commission tiers and referral earnings

#![allow(clippy::arithmetic_side_effects)] // Floating-point business arithmetic

use crate::{
    error::{HashYieldError, Result},
    types::CommissionTier,
    validation::validate_commission_rate,
};
use serde::{Deserialize, Serialize};

/// Deepest referral level that earns a commission
pub const MAX_TIER_LEVEL: u8 = 3;

/// Default commission rates in percent for levels 1, 2 and 3
pub const DEFAULT_TIER_RATES: [f64; 3] = [5.0, 3.0, 1.0];

/// Network-wide commission rates, one per tier level
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCommissionTable")]
pub struct CommissionTable {
    rates: [f64; 3],
}

#[derive(Deserialize)]
struct RawCommissionTable {
    rates: [f64; 3],
}

impl TryFrom<RawCommissionTable> for CommissionTable {
    type Error = HashYieldError;

    fn try_from(raw: RawCommissionTable) -> Result<Self> {
        Self::new(raw.rates)
    }
}

impl Default for CommissionTable {
    fn default() -> Self {
        Self {
            rates: DEFAULT_TIER_RATES,
        }
    }
}

impl CommissionTable {
    /// Build a table from admin-supplied rates for levels 1, 2 and 3
    ///
    /// # Errors
    /// Returns an error if any rate is outside 0-100 percent
    pub fn new(rates: [f64; 3]) -> Result<Self> {
        for rate in rates {
            validate_commission_rate(rate)?;
        }
        Ok(Self { rates })
    }

    /// Rate in percent for a tier level; levels outside 1-3 earn nothing
    #[must_use]
    pub fn rate(&self, level: u8) -> f64 {
        match level {
            1..=MAX_TIER_LEVEL => self.rates[usize::from(level - 1)],
            _ => 0.0,
        }
    }

    #[must_use]
    pub fn tiers(&self) -> [CommissionTier; 3] {
        [1, 2, 3].map(|level| CommissionTier {
            level,
            rate_percent: self.rate(level),
        })
    }

    /// Commission owed to the referrer for a deposit made at `level` depth
    #[must_use]
    pub fn resolve(&self, deposit_amount: f64, level: u8) -> f64 {
        deposit_amount * self.rate(level) / 100.0
    }

    /// Aggregate the earnings a referrer collects from their referral tree
    #[must_use]
    pub fn summarize(&self, referrals: &[Referral]) -> ReferralSummary {
        let mut tier_totals = [0.0; 3];
        let entries: Vec<ReferralEarnings> = referrals
            .iter()
            .map(|referral| {
                let deposited: f64 = referral.deposits.iter().sum();
                let earned: f64 = referral
                    .deposits
                    .iter()
                    .map(|deposit| self.resolve(*deposit, referral.level))
                    .sum();
                if (1..=MAX_TIER_LEVEL).contains(&referral.level) {
                    tier_totals[usize::from(referral.level - 1)] += earned;
                }
                ReferralEarnings {
                    user: referral.user.clone(),
                    level: referral.level,
                    deposited,
                    earned,
                }
            })
            .collect();

        ReferralSummary {
            total: tier_totals.iter().sum(),
            tier_totals,
            referrals: entries,
        }
    }
}

/// Commission for a deposit at the given tier using the default 5/3/1 table
#[must_use]
pub fn resolve_commission(deposit_amount: f64, tier_level: u8) -> f64 {
    CommissionTable::default().resolve(deposit_amount, tier_level)
}

/// A referred user and the deposits they made
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Referral {
    pub user: String,
    /// Depth below the referrer (1 = direct referral)
    pub level: u8,
    #[serde(default)]
    pub deposits: Vec<f64>,
}

/// Earnings attributed to one referred user
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReferralEarnings {
    pub user: String,
    pub level: u8,
    pub deposited: f64,
    pub earned: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReferralSummary {
    pub referrals: Vec<ReferralEarnings>,
    /// Earnings per level, index 0 = level 1
    pub tier_totals: [f64; 3],
    pub total: f64,
}
