//! Validation utilities for calculator inputs
//!
//! The calculators assume validated input; these checks are what callers run
//! before invoking them.

use crate::{
    error::{HashYieldError, Result},
    types::{MiningPackage, Plan},
};

fn require_positive(value: f64, what: &str) -> Result<()> {
    if !value.is_finite() {
        return Err(HashYieldError::InvalidInput(format!(
            "{what} must be a finite number, got: {value}"
        )));
    }
    if value <= 0.0 {
        return Err(HashYieldError::InvalidInput(format!(
            "{what} must be greater than 0, got: {value}"
        )));
    }
    Ok(())
}

/// Validate a deposit or investment principal
///
/// # Errors
/// Returns an error if the principal is non-finite or not positive
pub fn validate_principal(principal: f64) -> Result<()> {
    require_positive(principal, "Principal")
}

/// Validate a plan rate in percent per period
///
/// # Errors
/// Returns an error if the rate is non-finite or not positive
pub fn validate_rate(rate_percent: f64) -> Result<()> {
    require_positive(rate_percent, "Rate")
}

/// Validate a plan term in periods
///
/// # Errors
/// Returns an error if the term is zero
pub fn validate_term(term_periods: u32) -> Result<()> {
    if term_periods == 0 {
        return Err(HashYieldError::InvalidInput(
            "Term must be at least 1 period".to_string(),
        ));
    }
    Ok(())
}

/// Validate allocated hash power
///
/// # Errors
/// Returns an error if the power is non-finite or not positive
pub fn validate_power(power: f64) -> Result<()> {
    require_positive(power, "Hash power")
}

/// Validate a contract or package price
///
/// # Errors
/// Returns an error if the price is non-finite or not positive
pub fn validate_price(price: f64) -> Result<()> {
    require_positive(price, "Price")
}

/// Validate a maintenance fee in percent per day
///
/// # Errors
/// Returns an error if the fee is non-finite or negative
pub fn validate_fee_percent(fee_percent: f64) -> Result<()> {
    if !fee_percent.is_finite() || fee_percent < 0.0 {
        return Err(HashYieldError::InvalidInput(format!(
            "Maintenance fee must be a non-negative number, got: {fee_percent}"
        )));
    }
    Ok(())
}

/// Validate a currency's earnings per unit of power per day
///
/// # Errors
/// Returns an error if the profitability is non-finite or negative
pub fn validate_profitability(profitability_per_unit_per_day: f64) -> Result<()> {
    if !profitability_per_unit_per_day.is_finite() || profitability_per_unit_per_day < 0.0 {
        return Err(HashYieldError::InvalidInput(format!(
            "Profitability must be a non-negative number, got: {profitability_per_unit_per_day}"
        )));
    }
    Ok(())
}

/// Validate a commission rate override
///
/// # Errors
/// Returns an error if the rate is outside 0-100 percent
pub fn validate_commission_rate(rate_percent: f64) -> Result<()> {
    if !rate_percent.is_finite() || !(0.0..=100.0).contains(&rate_percent) {
        return Err(HashYieldError::InvalidInput(format!(
            "Commission rate must be between 0 and 100 percent, got: {rate_percent}"
        )));
    }
    Ok(())
}

/// Validate plan parameters against the data model invariants
///
/// # Errors
/// Returns an error if the bounds, rate or term are invalid
pub fn validate_plan(plan: &Plan) -> Result<()> {
    validate_principal(plan.min_amount).map_err(|e| {
        HashYieldError::InvalidInput(format!("Plan '{}' minimum: {e}", plan.id))
    })?;
    if !plan.max_amount.is_finite() || plan.min_amount > plan.max_amount {
        return Err(HashYieldError::InvalidInput(format!(
            "Plan '{}' minimum ({}) cannot exceed maximum ({})",
            plan.id, plan.min_amount, plan.max_amount
        )));
    }
    validate_rate(plan.rate_percent)?;
    validate_term(plan.term_days)?;
    Ok(())
}

/// Validate a mining package against the data model invariants
///
/// # Errors
/// Returns an error if the power, price, duration or fee are invalid
pub fn validate_package(package: &MiningPackage) -> Result<()> {
    validate_power(package.power)?;
    validate_price(package.price)?;
    validate_fee_percent(package.maintenance_fee_percent_per_day)?;
    if package.duration_days == 0 {
        return Err(HashYieldError::InvalidInput(format!(
            "Package '{}' duration must be at least 1 day",
            package.id
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PayoutInterval, ReturnType};

    fn plan(min: f64, max: f64, rate: f64, term: u32) -> Plan {
        Plan {
            id: "test".to_string(),
            name: "Test".to_string(),
            min_amount: min,
            max_amount: max,
            rate_percent: rate,
            term_days: term,
            return_type: ReturnType::Fixed,
            payout_interval: PayoutInterval::Daily,
            reinvest_allowed: false,
        }
    }

    #[test]
    fn test_validate_principal() {
        assert!(validate_principal(100.0).is_ok());
        assert!(validate_principal(0.0).is_err());
        assert!(validate_principal(-5.0).is_err());
        assert!(validate_principal(f64::NAN).is_err());
        assert!(validate_principal(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_term_and_rate() {
        assert!(validate_term(1).is_ok());
        assert!(validate_term(0).is_err());
        assert!(validate_rate(0.5).is_ok());
        assert!(validate_rate(0.0).is_err());
    }

    #[test]
    fn test_validate_fee_percent() {
        assert!(validate_fee_percent(0.0).is_ok());
        assert!(validate_fee_percent(0.05).is_ok());
        assert!(validate_fee_percent(-0.01).is_err());
    }

    #[test]
    fn test_validate_profitability() {
        assert!(validate_profitability(0.0).is_ok());
        assert!(validate_profitability(3.6).is_ok());
        assert!(validate_profitability(-0.1).is_err());
        assert!(validate_profitability(f64::NAN).is_err());
        assert!(validate_profitability(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_commission_rate() {
        assert!(validate_commission_rate(0.0).is_ok());
        assert!(validate_commission_rate(100.0).is_ok());
        assert!(validate_commission_rate(100.5).is_err());
        assert!(validate_commission_rate(-1.0).is_err());
    }

    #[test]
    fn test_validate_plan() {
        assert!(validate_plan(&plan(100.0, 1000.0, 1.5, 30)).is_ok());
        // Equal bounds are allowed
        assert!(validate_plan(&plan(500.0, 500.0, 1.5, 30)).is_ok());
        assert!(validate_plan(&plan(1000.0, 100.0, 1.5, 30)).is_err());
        assert!(validate_plan(&plan(100.0, 1000.0, 0.0, 30)).is_err());
        assert!(validate_plan(&plan(100.0, 1000.0, 1.5, 0)).is_err());
        assert!(validate_plan(&plan(0.0, 1000.0, 1.5, 30)).is_err());
    }

    #[test]
    fn test_validate_package() {
        let mut package = MiningPackage {
            id: "basic".to_string(),
            name: "Basic".to_string(),
            power: 100.0,
            price: 500.0,
            duration_days: 180,
            maintenance_fee_percent_per_day: 0.05,
            available_units: 0,
        };
        assert!(validate_package(&package).is_ok());

        package.duration_days = 0;
        assert!(validate_package(&package).is_err());

        package.duration_days = 30;
        package.power = 0.0;
        assert!(validate_package(&package).is_err());
    }
}
