//! Yield desk: catalog-aware front for the calculators
//!
//! The desk owns the catalog and the single network-wide commission table, runs
//! input validation and hands validated values to the pure calculators.

use crate::{
    catalog::Catalog,
    commission::{CommissionTable, Referral, ReferralSummary},
    error::Result,
    mining::{compute_mining_earnings, MiningEarnings, MiningQuote},
    returns::{compute_returns, payout_schedule, Payout, PlanQuote, Returns},
    types::{Cryptocurrency, WithdrawalRequest},
    validation::{
        validate_fee_percent, validate_power, validate_price, validate_principal,
        validate_profitability, validate_rate,
    },
    withdrawal::{check_withdrawal, WithdrawalDecision, WithdrawalPolicy},
};
use chrono::NaiveDate;
use tracing::{debug, info, warn};

/// Catalog-aware calculator front
#[derive(Clone, Debug, Default)]
pub struct YieldDesk {
    catalog: Catalog,
    commission: CommissionTable,
}

impl YieldDesk {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            commission: CommissionTable::default(),
        }
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn commission_table(&self) -> &CommissionTable {
        &self.commission
    }

    /// Replace the network-wide commission rates for levels 1, 2 and 3
    ///
    /// # Errors
    /// Returns an error if any rate is outside 0-100 percent
    pub fn set_commission_rates(&mut self, rates: [f64; 3]) -> Result<()> {
        self.commission = CommissionTable::new(rates)?;
        info!(
            "Commission rates updated: L1 {}%, L2 {}%, L3 {}%",
            rates[0], rates[1], rates[2]
        );
        Ok(())
    }

    // ========================================
    // Investment plans
    // ========================================

    /// Returns for an arbitrary principal, rate and term
    ///
    /// # Errors
    /// Returns an error if principal or rate are not positive finite numbers
    pub fn returns(
        &self,
        principal: f64,
        rate_percent: f64,
        term_periods: u32,
        compounding: bool,
    ) -> Result<Returns> {
        validate_principal(principal)?;
        validate_rate(rate_percent)?;
        Ok(compute_returns(
            principal,
            rate_percent,
            term_periods,
            compounding,
        ))
    }

    /// Quote a deposit into a catalog plan
    ///
    /// # Errors
    /// Returns an error if the plan is unknown or the amount is out of range
    pub fn quote_plan(&self, plan_id: &str, amount: f64) -> Result<PlanQuote> {
        let plan = self.catalog.plan(plan_id)?;
        let quote = plan.quote(amount)?;
        debug!(
            "Quoted {amount} into plan {plan_id}: total return {:.4}",
            quote.returns.total_return
        );
        Ok(quote)
    }

    /// Payout schedule for a deposit into a catalog plan starting on `start`
    ///
    /// # Errors
    /// Returns an error if the plan is unknown, the amount is out of range or a date overflows
    pub fn plan_schedule(
        &self,
        plan_id: &str,
        amount: f64,
        start: NaiveDate,
    ) -> Result<Vec<Payout>> {
        let plan = self.catalog.plan(plan_id)?;
        payout_schedule(plan, amount, start)
    }

    // ========================================
    // Mining
    // ========================================

    /// Quote buying units of a catalog package to mine a catalog currency
    ///
    /// # Errors
    /// Returns an error if the package or currency is unknown or units are unavailable
    pub fn quote_mining(
        &self,
        package_id: &str,
        units: u32,
        currency_symbol: &str,
    ) -> Result<MiningQuote> {
        let package = self.catalog.package(package_id)?;
        let crypto = self.catalog.currency(currency_symbol)?;
        let quote = package.quote(units, crypto)?;
        if !quote.earnings.is_profitable() {
            warn!(
                "Package {package_id} mining {currency_symbol} is not profitable: daily net {:.4}",
                quote.earnings.daily_net
            );
        }
        Ok(quote)
    }

    /// Earnings for a custom mining contract outside the catalog
    ///
    /// # Errors
    /// Returns an error if power, profitability, price or fee are invalid
    pub fn custom_mining(
        &self,
        power: f64,
        crypto: &Cryptocurrency,
        maintenance_fee_percent_per_day: f64,
        days: u32,
        price: f64,
    ) -> Result<MiningEarnings> {
        validate_power(power)?;
        validate_profitability(crypto.profitability_per_unit_per_day)?;
        validate_price(price)?;
        validate_fee_percent(maintenance_fee_percent_per_day)?;
        Ok(compute_mining_earnings(
            power,
            crypto,
            maintenance_fee_percent_per_day,
            days,
            price,
        ))
    }

    // ========================================
    // Affiliate program
    // ========================================

    /// Commission a referrer earns from a deposit at `level` depth
    ///
    /// # Errors
    /// Returns an error if the deposit is not a positive finite number
    pub fn commission(&self, deposit_amount: f64, level: u8) -> Result<f64> {
        validate_principal(deposit_amount)?;
        Ok(self.commission.resolve(deposit_amount, level))
    }

    #[must_use]
    pub fn referral_summary(&self, referrals: &[Referral]) -> ReferralSummary {
        self.commission.summarize(referrals)
    }

    // ========================================
    // Withdrawals
    // ========================================

    #[must_use]
    pub fn check_withdrawal(
        &self,
        request: &WithdrawalRequest,
        available_balance: f64,
        policy: &WithdrawalPolicy,
    ) -> WithdrawalDecision {
        let decision = check_withdrawal(request, available_balance, policy);
        match &decision {
            WithdrawalDecision::Accepted => info!(
                "Withdrawal of {} {} accepted",
                request.amount, request.currency_symbol
            ),
            WithdrawalDecision::Rejected(reason) => {
                info!("Withdrawal rejected: {reason}");
            }
        }
        decision
    }
}
