use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::foundation::error::{WalletQrError, WalletQrResult};

/// Inputs shorter than this (in characters) are rejected before any pattern is tried.
pub const MIN_ADDRESS_LEN: usize = 10;

/// Address shape detected by [`classify`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressFamily {
    /// `bc1`/`1`/`3` prefix followed by base58-like characters.
    Bitcoin,
    /// `0x` followed by exactly 40 hex digits.
    Ethereum,
    /// `L`/`M`/`3` prefix followed by base58 characters.
    Litecoin,
    /// 32 to 44 base58 characters.
    Solana,
    /// Base64 alphabet with optional padding.
    Base64,
    /// Alphanumerics plus `-_+=/.`.
    Generic,
    /// Too short to be an address.
    Invalid,
    /// Long enough but matched no known shape.
    Unknown,
}

impl AddressFamily {
    /// Stable lowercase tag.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bitcoin => "bitcoin",
            Self::Ethereum => "ethereum",
            Self::Litecoin => "litecoin",
            Self::Solana => "solana",
            Self::Base64 => "base64",
            Self::Generic => "generic",
            Self::Invalid => "invalid",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of [`classify`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AddressClassification {
    /// Whether any known shape matched.
    pub valid: bool,
    /// Matched family, or [`AddressFamily::Invalid`] / [`AddressFamily::Unknown`].
    pub family: AddressFamily,
}

impl AddressClassification {
    /// `(valid, tag)` pair.
    pub fn as_tuple(self) -> (bool, &'static str) {
        (self.valid, self.family.as_str())
    }
}

// Priority order matters: the generic patterns at the end accept almost anything.
static PATTERNS: LazyLock<Vec<(AddressFamily, Regex)>> = LazyLock::new(|| {
    [
        (AddressFamily::Bitcoin, r"^(bc1|[13])[a-zA-HJ-NP-Z0-9]{25,39}$"),
        (AddressFamily::Ethereum, r"^0x[a-fA-F0-9]{40}$"),
        (AddressFamily::Litecoin, r"^[LM3][a-km-zA-HJ-NP-Z1-9]{26,33}$"),
        (AddressFamily::Solana, r"^[1-9A-HJ-NP-Za-km-z]{32,44}$"),
        (AddressFamily::Base64, r"^[A-Za-z0-9+/]+={0,2}$"),
        (AddressFamily::Generic, r"^[A-Za-z0-9\-_+=/.]+$"),
    ]
    .into_iter()
    .filter_map(|(family, pat)| Regex::new(pat).ok().map(|re| (family, re)))
    .collect()
});

/// Classify `address` by shape.
///
/// The length check runs on the raw input; pattern matching runs on the trimmed input.
pub fn classify(address: &str) -> AddressClassification {
    if address.chars().count() < MIN_ADDRESS_LEN {
        return AddressClassification {
            valid: false,
            family: AddressFamily::Invalid,
        };
    }

    let trimmed = address.trim();
    PATTERNS
        .iter()
        .find(|(_, re)| re.is_match(trimmed))
        .map(|&(family, _)| AddressClassification {
            valid: true,
            family,
        })
        .unwrap_or(AddressClassification {
            valid: false,
            family: AddressFamily::Unknown,
        })
}

/// Tuple form of [`classify`]: `(is_valid, family_tag)`.
pub fn validate_address(address: &str) -> (bool, &'static str) {
    classify(address).as_tuple()
}

/// Classify and turn a rejection into [`WalletQrError::InvalidAddress`].
pub fn require_valid(address: &str) -> WalletQrResult<AddressFamily> {
    let c = classify(address);
    if c.valid {
        Ok(c.family)
    } else {
        Err(WalletQrError::invalid_address(format!(
            "{address} ({})",
            c.family
        )))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/address/classify.rs"]
mod tests;
