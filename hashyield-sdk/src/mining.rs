//! Mining profitability model
//!
//! Converts allocated hash power into daily and total net earnings after the
//! maintenance fee, plus ROI and breakeven for the contract price.

#![allow(clippy::arithmetic_side_effects)] // Floating-point business arithmetic

use crate::{
    error::{HashYieldError, Result},
    types::{Cryptocurrency, MiningPackage},
};
use serde::{Deserialize, Serialize};

/// When a contract pays back its price
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "days", rename_all = "snake_case")]
pub enum Breakeven {
    /// Days of net earnings needed to recover the price
    Days(f64),
    /// Net earnings are not positive; the price is never recovered
    Never,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MiningEarnings {
    pub daily_gross: f64,
    pub daily_maintenance_fee: f64,
    pub daily_net: f64,
    pub total_net: f64,
    /// Total net as a percentage of the price
    pub roi_percent: f64,
    pub breakeven: Breakeven,
}

impl MiningEarnings {
    #[must_use]
    pub fn is_profitable(&self) -> bool {
        self.daily_net > 0.0
    }

    /// Breakeven period in days
    ///
    /// # Errors
    /// Returns `UnprofitableContract` when daily net earnings are not positive
    pub fn breakeven_days(&self) -> Result<f64> {
        match self.breakeven {
            Breakeven::Days(days) => Ok(days),
            Breakeven::Never => Err(HashYieldError::UnprofitableContract {
                daily_net: self.daily_net,
            }),
        }
    }
}

/// Compute earnings for `power` units of hash rate mining `crypto` for `days`
///
/// `price` is what the caller paid for the contract. Input is assumed validated;
/// a non-positive daily net yields [`Breakeven::Never`] instead of a division.
#[must_use]
pub fn compute_mining_earnings(
    power: f64,
    crypto: &Cryptocurrency,
    maintenance_fee_percent_per_day: f64,
    days: u32,
    price: f64,
) -> MiningEarnings {
    let daily_gross = power * crypto.profitability_per_unit_per_day;
    let daily_maintenance_fee = power * maintenance_fee_percent_per_day / 100.0;
    let daily_net = daily_gross - daily_maintenance_fee;
    let total_net = daily_net * f64::from(days);

    let breakeven = if daily_net > 0.0 {
        Breakeven::Days(price / daily_net)
    } else {
        Breakeven::Never
    };

    MiningEarnings {
        daily_gross,
        daily_maintenance_fee,
        daily_net,
        total_net,
        roi_percent: total_net / price * 100.0,
        breakeven,
    }
}

/// Quote for buying units of a mining package
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MiningQuote {
    pub package_id: String,
    pub currency: String,
    pub units: u32,
    pub total_power: f64,
    pub total_price: f64,
    pub duration_days: u32,
    pub earnings: MiningEarnings,
}

impl MiningPackage {
    /// Quote buying `units` of this package to mine `crypto`
    ///
    /// # Errors
    /// Returns an error if `units` is zero or exceeds the units still available
    pub fn quote(&self, units: u32, crypto: &Cryptocurrency) -> Result<MiningQuote> {
        if units == 0 {
            return Err(HashYieldError::InvalidInput(
                "Must purchase at least 1 unit".to_string(),
            ));
        }
        if units > self.available_units {
            return Err(HashYieldError::InsufficientUnits {
                requested: units,
                available: self.available_units,
            });
        }

        let total_power = self.power * f64::from(units);
        let total_price = self.price * f64::from(units);
        let earnings = compute_mining_earnings(
            total_power,
            crypto,
            self.maintenance_fee_percent_per_day,
            self.duration_days,
            total_price,
        );

        Ok(MiningQuote {
            package_id: self.id.clone(),
            currency: crypto.symbol.clone(),
            units,
            total_power,
            total_price,
            duration_days: self.duration_days,
            earnings,
        })
    }
}
