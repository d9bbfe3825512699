//! Withdrawal request checks
//!
//! A request is validated synchronously and either accepted or rejected. Nothing
//! is recorded; the caller decides what an accepted request leads to.

use crate::{
    address::{address_format, is_valid_address},
    error::{HashYieldError, Result},
    types::WithdrawalRequest,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Platform limits applied to every withdrawal
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WithdrawalPolicy {
    /// Smallest amount that may be withdrawn
    pub min_amount: f64,
}

impl WithdrawalPolicy {
    /// Policy with the given minimum withdrawal
    ///
    /// # Errors
    /// Returns an error if the minimum is non-finite or negative
    pub fn new(min_amount: f64) -> Result<Self> {
        if !min_amount.is_finite() || min_amount < 0.0 {
            return Err(HashYieldError::InvalidInput(format!(
                "Minimum withdrawal must be a non-negative number, got: {min_amount}"
            )));
        }
        Ok(Self { min_amount })
    }
}

impl Default for WithdrawalPolicy {
    fn default() -> Self {
        Self { min_amount: 10.0 }
    }
}

/// Why a withdrawal was refused
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum RejectionReason {
    NonPositiveAmount,
    BelowMinimum { min_amount: f64 },
    InvalidBalance { available: f64 },
    InsufficientBalance { required: f64, available: f64 },
    UnsupportedCurrency { symbol: String },
    InvalidAddress { symbol: String },
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount => write!(f, "Amount must be greater than 0"),
            Self::BelowMinimum { min_amount } => {
                write!(f, "Minimum withdrawal is {min_amount}")
            }
            Self::InvalidBalance { available } => write!(
                f,
                "Available balance must be a non-negative number, got: {available}"
            ),
            Self::InsufficientBalance {
                required,
                available,
            } => write!(
                f,
                "Insufficient balance: required {required}, available {available}"
            ),
            Self::UnsupportedCurrency { symbol } => {
                write!(f, "Withdrawals in {symbol} are not supported")
            }
            Self::InvalidAddress { symbol } => write!(f, "Invalid {symbol} address format"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum WithdrawalDecision {
    Accepted,
    Rejected(RejectionReason),
}

impl WithdrawalDecision {
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }

    /// Convert a rejection into the matching SDK error
    ///
    /// # Errors
    /// Returns the error describing the rejection
    pub fn into_result(self) -> Result<()> {
        match self {
            Self::Accepted => Ok(()),
            Self::Rejected(RejectionReason::InsufficientBalance {
                required,
                available,
            }) => Err(HashYieldError::InsufficientBalance {
                required,
                available,
            }),
            Self::Rejected(RejectionReason::UnsupportedCurrency { symbol }) => {
                Err(HashYieldError::UnsupportedCurrency(symbol))
            }
            Self::Rejected(reason) => Err(HashYieldError::InvalidInput(reason.to_string())),
        }
    }
}

/// Check a withdrawal against the balance, the policy and the address format
///
/// Checks run in order: amount, minimum, balance, currency, address. A minimum
/// that is not a number rejects every request.
#[must_use]
pub fn check_withdrawal(
    request: &WithdrawalRequest,
    available_balance: f64,
    policy: &WithdrawalPolicy,
) -> WithdrawalDecision {
    let reject = WithdrawalDecision::Rejected;

    if !request.amount.is_finite() || request.amount <= 0.0 {
        return reject(RejectionReason::NonPositiveAmount);
    }
    if policy.min_amount.is_nan() || request.amount < policy.min_amount {
        return reject(RejectionReason::BelowMinimum {
            min_amount: policy.min_amount,
        });
    }
    if !available_balance.is_finite() || available_balance < 0.0 {
        return reject(RejectionReason::InvalidBalance {
            available: available_balance,
        });
    }
    if request.amount > available_balance {
        return reject(RejectionReason::InsufficientBalance {
            required: request.amount,
            available: available_balance,
        });
    }
    if address_format(&request.currency_symbol).is_none() {
        return reject(RejectionReason::UnsupportedCurrency {
            symbol: request.currency_symbol.clone(),
        });
    }
    if !is_valid_address(&request.destination_address, &request.currency_symbol) {
        return reject(RejectionReason::InvalidAddress {
            symbol: request.currency_symbol.to_ascii_uppercase(),
        });
    }

    WithdrawalDecision::Accepted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(amount: f64, symbol: &str, address: &str) -> WithdrawalRequest {
        WithdrawalRequest {
            amount,
            currency_symbol: symbol.to_string(),
            destination_address: address.to_string(),
        }
    }

    const ETH_ADDR: &str = "0x71C7656EC7ab88b098defB751B7401B5f6d8976F";

    #[test]
    fn test_accepts_valid_request() {
        let decision = check_withdrawal(
            &request(100.0, "ETH", ETH_ADDR),
            500.0,
            &WithdrawalPolicy::default(),
        );
        assert!(decision.is_accepted());
        assert!(decision.into_result().is_ok());
    }

    #[test]
    fn test_rejection_order() {
        let policy = WithdrawalPolicy::default();

        assert_eq!(
            check_withdrawal(&request(0.0, "ETH", "bad"), 0.0, &policy),
            WithdrawalDecision::Rejected(RejectionReason::NonPositiveAmount)
        );
        assert_eq!(
            check_withdrawal(&request(5.0, "ETH", "bad"), 0.0, &policy),
            WithdrawalDecision::Rejected(RejectionReason::BelowMinimum { min_amount: 10.0 })
        );
        assert!(matches!(
            check_withdrawal(&request(50.0, "ETH", "bad"), 20.0, &policy),
            WithdrawalDecision::Rejected(RejectionReason::InsufficientBalance { .. })
        ));
        assert!(matches!(
            check_withdrawal(&request(50.0, "DOGE", "bad"), 100.0, &policy),
            WithdrawalDecision::Rejected(RejectionReason::UnsupportedCurrency { .. })
        ));
        assert_eq!(
            check_withdrawal(&request(50.0, "eth", "bad"), 100.0, &policy),
            WithdrawalDecision::Rejected(RejectionReason::InvalidAddress {
                symbol: "ETH".to_string()
            })
        );
    }

    #[test]
    fn test_withdrawing_entire_balance() {
        let decision = check_withdrawal(
            &request(100.0, "USDT", ETH_ADDR),
            100.0,
            &WithdrawalPolicy::default(),
        );
        assert!(decision.is_accepted());
    }

    #[test]
    fn test_into_result_maps_errors() {
        let policy = WithdrawalPolicy { min_amount: 1.0 };
        let err = check_withdrawal(&request(50.0, "ETH", ETH_ADDR), 10.0, &policy)
            .into_result()
            .unwrap_err();
        assert!(matches!(err, HashYieldError::InsufficientBalance { .. }));

        let err = check_withdrawal(&request(50.0, "XMR", ETH_ADDR), 100.0, &policy)
            .into_result()
            .unwrap_err();
        assert!(matches!(err, HashYieldError::UnsupportedCurrency(ref s) if s == "XMR"));
    }

    #[test]
    fn test_unusable_balance_rejected() {
        let policy = WithdrawalPolicy::default();
        for balance in [f64::NAN, f64::INFINITY, -5.0] {
            let decision = check_withdrawal(&request(1e6, "ETH", ETH_ADDR), balance, &policy);
            assert!(matches!(
                decision,
                WithdrawalDecision::Rejected(RejectionReason::InvalidBalance { .. })
            ));
            assert!(matches!(
                decision.into_result(),
                Err(HashYieldError::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn test_nan_minimum_rejects() {
        let policy = WithdrawalPolicy {
            min_amount: f64::NAN,
        };
        let decision = check_withdrawal(&request(0.01, "ETH", ETH_ADDR), 100.0, &policy);
        assert!(matches!(
            decision,
            WithdrawalDecision::Rejected(RejectionReason::BelowMinimum { .. })
        ));
    }

    #[test]
    fn test_policy_constructor() {
        assert!(WithdrawalPolicy::new(0.0).is_ok());
        assert!((WithdrawalPolicy::new(25.0).unwrap().min_amount - 25.0).abs() < f64::EPSILON);
        assert!(WithdrawalPolicy::new(f64::NAN).is_err());
        assert!(WithdrawalPolicy::new(f64::INFINITY).is_err());
        assert!(WithdrawalPolicy::new(-1.0).is_err());
    }

    #[test]
    fn test_rejection_messages() {
        assert_eq!(
            RejectionReason::InvalidAddress {
                symbol: "BTC".to_string()
            }
            .to_string(),
            "Invalid BTC address format"
        );
    }
}
