//! Investment return calculator and plan quotes

#![allow(clippy::arithmetic_side_effects)] // Floating-point business arithmetic
#![allow(clippy::cast_lossless)]

use crate::{
    error::{HashYieldError, Result},
    types::Plan,
    validation::validate_principal,
};
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Yield of a principal over a term
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Returns {
    /// Return per period; `None` when compounding, since it changes every period
    pub periodic_return: Option<f64>,
    /// Sum of all profits over the term
    pub total_return: f64,
    /// Principal plus total return
    pub final_amount: f64,
}

/// Compute periodic and total yield for a principal
///
/// Fixed mode pays `principal * rate / 100` every period. Compound mode applies
/// the rate once per period to the running balance. A zero term yields nothing.
///
/// Input is assumed validated; see [`crate::validation`].
#[must_use]
pub fn compute_returns(
    principal: f64,
    rate_percent: f64,
    term_periods: u32,
    compounding: bool,
) -> Returns {
    if compounding {
        let mut running = principal;
        let mut total_return = 0.0;
        for _ in 0..term_periods {
            let profit = running * rate_percent / 100.0;
            running += profit;
            total_return += profit;
        }
        Returns {
            periodic_return: None,
            total_return,
            final_amount: principal + total_return,
        }
    } else {
        let periodic = principal * rate_percent / 100.0;
        let total_return = periodic * f64::from(term_periods);
        Returns {
            periodic_return: Some(periodic),
            total_return,
            final_amount: principal + total_return,
        }
    }
}

/// Quote for a deposit into a specific plan
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlanQuote {
    pub plan_id: String,
    pub amount: f64,
    pub returns: Returns,
    /// Total return as a percentage of the deposit
    pub roi_percent: f64,
}

/// Single scheduled payout
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Payout {
    pub date: NaiveDate,
    pub amount: f64,
}

impl Plan {
    /// Quote a deposit into this plan
    ///
    /// # Errors
    /// Returns an error if the amount is invalid or outside the plan bounds
    pub fn quote(&self, amount: f64) -> Result<PlanQuote> {
        validate_principal(amount)?;
        if amount < self.min_amount || amount > self.max_amount {
            return Err(HashYieldError::AmountOutOfRange {
                amount,
                min: self.min_amount,
                max: self.max_amount,
            });
        }

        let returns = compute_returns(
            amount,
            self.rate_percent,
            self.term_days,
            self.is_compounding(),
        );

        Ok(PlanQuote {
            plan_id: self.id.clone(),
            amount,
            returns,
            roi_percent: returns.total_return / amount * 100.0,
        })
    }

    /// Date on which a deposit made on `start` matures
    ///
    /// # Errors
    /// Returns an error if the maturity date is out of the calendar range
    pub fn maturity_date(&self, start: NaiveDate) -> Result<NaiveDate> {
        add_days(start, self.term_days)
    }
}

fn add_days(date: NaiveDate, days: u32) -> Result<NaiveDate> {
    date.checked_add_days(Days::new(u64::from(days)))
        .ok_or_else(|| HashYieldError::InvalidInput(format!("Date {date} + {days} days overflows")))
}

/// Build the payout schedule for a deposit into `plan` made on `start`
///
/// Fixed plans pay one installment at the end of each full payout interval and a
/// final installment at maturity for any leftover days. Compound plans pay the
/// whole return at maturity. Installments always sum to the quoted total return.
///
/// # Errors
/// Returns an error if the amount is invalid for the plan or a date overflows
pub fn payout_schedule(plan: &Plan, amount: f64, start: NaiveDate) -> Result<Vec<Payout>> {
    let quote = plan.quote(amount)?;
    let maturity = plan.maturity_date(start)?;

    let Some(per_period) = quote.returns.periodic_return else {
        return Ok(vec![Payout {
            date: maturity,
            amount: quote.returns.total_return,
        }]);
    };

    let interval = plan.payout_interval.days(plan.term_days).max(1);
    let full_intervals = plan.term_days / interval;
    let leftover_days = plan.term_days % interval;

    let mut schedule = Vec::with_capacity(full_intervals as usize + 1);
    for n in 1..=full_intervals {
        schedule.push(Payout {
            date: add_days(start, n * interval)?,
            amount: per_period * f64::from(interval),
        });
    }
    if leftover_days > 0 {
        schedule.push(Payout {
            date: maturity,
            amount: per_period * f64::from(leftover_days),
        });
    }

    Ok(schedule)
}
