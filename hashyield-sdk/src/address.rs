//! Withdrawal address format checks
//!
//! Format only: no checksum, no network lookup.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

#[allow(clippy::expect_used)]
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("Valid address pattern")
}

static BITCOIN: Lazy<Regex> = Lazy::new(|| compile(r"^(bc1|[13])[a-zA-HJ-NP-Z0-9]{25,39}$"));
static ETHEREUM: Lazy<Regex> = Lazy::new(|| compile(r"^0x[a-fA-F0-9]{40}$"));
static TRON: Lazy<Regex> = Lazy::new(|| compile(r"^T[A-Za-z1-9]{33}$"));

/// Address families recognised by the validator
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AddressFormat {
    /// Legacy `1`/`3` or bech32 `bc1` addresses
    Bitcoin,
    /// `0x` followed by 40 hex characters
    Ethereum,
    /// `T` followed by 33 alphanumerics
    Tron,
    /// Stablecoin accepted on either Ethereum or Tron
    EthereumOrTron,
}

impl AddressFormat {
    #[must_use]
    pub fn matches(self, address: &str) -> bool {
        match self {
            Self::Bitcoin => BITCOIN.is_match(address),
            Self::Ethereum => ETHEREUM.is_match(address),
            Self::Tron => TRON.is_match(address),
            Self::EthereumOrTron => ETHEREUM.is_match(address) || TRON.is_match(address),
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Bitcoin => "bc1, 1 or 3 followed by 25-39 base58 characters",
            Self::Ethereum => "0x followed by 40 hex characters",
            Self::Tron => "T followed by 33 alphanumeric characters",
            Self::EthereumOrTron => "Ethereum (0x...) or Tron (T...) address",
        }
    }
}

/// Symbols with a registered address format
pub const SUPPORTED_SYMBOLS: [&str; 4] = ["BTC", "ETH", "USDT", "TRX"];

/// Registered address format for a currency symbol (case-insensitive)
#[must_use]
pub fn address_format(currency_symbol: &str) -> Option<AddressFormat> {
    match currency_symbol.to_ascii_uppercase().as_str() {
        "BTC" => Some(AddressFormat::Bitcoin),
        "ETH" => Some(AddressFormat::Ethereum),
        "USDT" => Some(AddressFormat::EthereumOrTron),
        "TRX" => Some(AddressFormat::Tron),
        _ => None,
    }
}

/// Check an address against the format registered for `currency_symbol`
///
/// Unknown symbols are always invalid.
#[must_use]
pub fn is_valid_address(address: &str, currency_symbol: &str) -> bool {
    address_format(currency_symbol).is_some_and(|format| format.matches(address))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ETH_ADDR: &str = "0x71C7656EC7ab88b098defB751B7401B5f6d8976F";
    const TRON_ADDR: &str = "TLa2f6VPqDgRE67v1736s7bJ8Ray5wYjU7";

    #[test]
    fn test_bitcoin_addresses() {
        assert!(is_valid_address(
            "bc1qxy2kgdygjrsqtzq2n0yrf2493p83kkfjhx0wlh",
            "BTC"
        ));
        assert!(is_valid_address("1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa", "BTC"));
        assert!(is_valid_address("3J98t1WpEZ73CNmQviecrnyiWrnqRhWNLy", "btc"));
        assert!(!is_valid_address("not-an-address", "BTC"));
        assert!(!is_valid_address("1short", "BTC"));
        // `I` and `O` are excluded from the base58 alphabet
        assert!(!is_valid_address("1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNO", "BTC"));
    }

    #[test]
    fn test_ethereum_addresses() {
        assert!(is_valid_address(ETH_ADDR, "ETH"));
        assert!(!is_valid_address(&ETH_ADDR[..41], "ETH"));
        assert!(!is_valid_address("0xZZC7656EC7ab88b098defB751B7401B5f6d8976F", "ETH"));
        assert!(!is_valid_address(TRON_ADDR, "ETH"));
    }

    #[test]
    fn test_usdt_accepts_both_networks() {
        assert!(is_valid_address(ETH_ADDR, "USDT"));
        assert!(is_valid_address(TRON_ADDR, "USDT"));
        assert!(!is_valid_address("bc1qxy2kgdygjrsqtzq2n0yrf2493p83kkfjhx0wlh", "USDT"));
    }

    #[test]
    fn test_tron_addresses() {
        assert!(is_valid_address(TRON_ADDR, "TRX"));
        assert!(!is_valid_address(&TRON_ADDR[..33], "TRX"));
    }

    #[test]
    fn test_unknown_symbol_is_invalid() {
        assert!(address_format("DOGE").is_none());
        assert!(!is_valid_address(ETH_ADDR, "DOGE"));
        assert!(!is_valid_address("", ""));
    }

    #[test]
    fn test_supported_symbols_have_formats() {
        for symbol in SUPPORTED_SYMBOLS {
            assert!(address_format(symbol).is_some(), "{symbol} has no format");
        }
    }
}
