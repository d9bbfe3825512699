//! Withdrawal address format check command

use super::CommandOutput;
use anyhow::Result;
use hashyield_sdk::{address_format, is_valid_address};
use serde_json::json;
use tracing::info;

/// Execute the address validation command
///
/// An invalid or unsupported address is a normal result, not an error.
///
/// # Errors
/// Returns error only if the output cannot be serialized
pub fn execute(address: &str, currency: &str) -> Result<CommandOutput> {
    info!("Validating {currency} address");

    let format = address_format(currency);
    let valid = is_valid_address(address, currency);

    let human = match format {
        None => format!("Currency {currency} is not supported for withdrawals"),
        Some(_) if valid => format!("Valid {} address", currency.to_ascii_uppercase()),
        Some(f) => format!(
            "Invalid {} address (expected {})",
            currency.to_ascii_uppercase(),
            f.description()
        ),
    };

    CommandOutput::new(
        human,
        &json!({
            "address": address,
            "currency": currency.to_ascii_uppercase(),
            "supported": format.is_some(),
            "format": format,
            "valid": valid,
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_bitcoin() {
        let output = execute("bc1qxy2kgdygjrsqtzq2n0yrf2493p83kkfjhx0wlh", "btc").unwrap();
        assert_eq!(output.data["valid"], true);
        assert_eq!(output.data["format"], "bitcoin");
        assert_eq!(output.human, "Valid BTC address");
    }

    #[test]
    fn test_invalid_address_describes_format() {
        let output = execute("not-an-address", "ETH").unwrap();
        assert_eq!(output.data["valid"], false);
        assert!(output.human.contains("0x followed by 40 hex characters"));
    }

    #[test]
    fn test_unsupported_currency() {
        let output = execute("anything", "DOGE").unwrap();
        assert_eq!(output.data["supported"], false);
        assert!(output.data["format"].is_null());
    }
}
