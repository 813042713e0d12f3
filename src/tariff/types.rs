//! Core tariff types.
//!
//! Prefixes and phone numbers are validated at construction so that the
//! rest of the crate never has to re-check digit syntax. The price type is
//! `rust_decimal::Decimal`: rate comparisons must be exact, so binary
//! floating point is off the table.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised when validating tariff data.
#[derive(Debug, Error)]
pub enum TariffError {
    #[error("operator name must not be empty")]
    EmptyName,

    #[error("invalid digit string '{0}': expected one or more ASCII decimal digits")]
    NotDigits(String),

    #[error("negative rate {rate} for prefix '{prefix}'")]
    NegativeRate { prefix: Prefix, rate: Decimal },
}

/// Check that `s` is non-empty and consists of ASCII decimal digits only.
///
/// Single shared validator behind both [`Prefix`] and [`PhoneNumber`].
fn validate_digits(s: &str) -> Result<(), TariffError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TariffError::NotDigits(s.to_string()));
    }
    Ok(())
}

/// A dialing-code prefix: a non-empty string of ASCII decimal digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Prefix(String);

impl Prefix {
    /// Create a prefix, validating digit syntax.
    pub fn new(s: impl Into<String>) -> Result<Self, TariffError> {
        let s = s.into();
        validate_digits(&s)?;
        Ok(Self(s))
    }

    /// The raw digit string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Lets a HashMap keyed by Prefix be probed with &str slices.
impl Borrow<str> for Prefix {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Prefix {
    type Err = TariffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// A phone number to resolve: same digit-only syntax as a prefix, but a
/// query rather than a table key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a phone number, validating digit syntax.
    pub fn new(s: impl Into<String>) -> Result<Self, TariffError> {
        let s = s.into();
        validate_digits(&s)?;
        Ok(Self(s))
    }

    /// The raw digit string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PhoneNumber {
    type Err = TariffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// An operator's published per-minute rates, immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operator {
    name: String,
    rates: HashMap<Prefix, Decimal>,
}

impl Operator {
    /// Create an operator, validating the name and every rate.
    ///
    /// Prefix syntax is already guaranteed by the `Prefix` keys; rates must
    /// be non-negative. Fails before any operator becomes observable.
    pub fn new(
        name: impl Into<String>,
        rates: HashMap<Prefix, Decimal>,
    ) -> Result<Self, TariffError> {
        let name = name.into();
        if name.is_empty() {
            return Err(TariffError::EmptyName);
        }

        for (prefix, rate) in &rates {
            if *rate < Decimal::ZERO {
                return Err(TariffError::NegativeRate {
                    prefix: prefix.clone(),
                    rate: *rate,
                });
            }
        }

        Ok(Self { name, rates })
    }

    /// Operator name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The published rate table.
    pub fn rates(&self) -> &HashMap<Prefix, Decimal> {
        &self.rates
    }

    /// Every prefix this operator prices.
    pub fn prefixes(&self) -> impl Iterator<Item = &Prefix> {
        self.rates.keys()
    }

    /// The price published for exactly `prefix`, or `None` if this operator
    /// does not price it. Absence is not an error and is distinct from a
    /// zero price.
    pub fn price_for_prefix(&self, prefix: &Prefix) -> Option<Decimal> {
        self.rates.get(prefix).copied()
    }

    /// True iff this operator prices `prefix` strictly below `candidate`.
    /// An unpublished prefix never beats a concrete price.
    pub fn has_better_price(&self, prefix: &Prefix, candidate: Decimal) -> bool {
        self.price_for_prefix(prefix)
            .map(|price| price < candidate)
            .unwrap_or(false)
    }
}
