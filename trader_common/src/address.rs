//! Crypto address format validation.
//!
//! Checks only the textual shape of an address (prefix, alphabet, length).
//! Checksums are not verified.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Errors from address validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// No address format is known for the currency.
    #[error("invalid crypto currency: {0}")]
    InvalidCryptoCurrency(String),
}

static BTC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(bc1|[13])[a-zA-HJ-NP-Z0-9]{25,90}$").expect("static regex")
});
static LTC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[L3M][a-km-zA-HJ-NP-Z1-9]{25,34}$").expect("static regex")
});
static ETH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^0x[0-9a-fA-F]{40}$").expect("static regex"));

/// Check whether `address` is well-formed for `currency`.
///
/// The currency code is case-insensitive (`btc`, `ltc`, `eth`).
///
/// # Errors
///
/// Returns [`AddressError::InvalidCryptoCurrency`] for unsupported currencies.
pub fn is_valid_crypto_address(address: &str, currency: &str) -> Result<bool, AddressError> {
    let pattern = match currency.to_ascii_lowercase().as_str() {
        "btc" => &BTC,
        "ltc" => &LTC,
        "eth" => &ETH,
        _ => return Err(AddressError::InvalidCryptoCurrency(currency.to_string())),
    };
    Ok(pattern.is_match(address))
}
