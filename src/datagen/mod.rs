//! Synthetic tariff data.
//!
//! Generates random prefixes, phone numbers and operator rate tables, and
//! renders operators back into the textual ingest format so generated data
//! round-trips through the parser.

use std::collections::HashMap;

use rand::Rng;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::tariff::{Operator, PhoneNumber, Prefix, TariffError};

/// Longest prefix the generator will produce.
pub const MAX_PREFIX_LEN: usize = 5;

/// Longest phone number the generator will produce (E.164 digit limit).
pub const MAX_NUMBER_LEN: usize = 15;

/// Errors raised by the data generator.
#[derive(Debug, Error)]
pub enum DatagenError {
    #[error("prefix length must be between 1 and 5, got {0}")]
    BadPrefixLength(usize),

    #[error("number length must be between 1 and 15, got {0}")]
    BadNumberLength(usize),

    #[error(transparent)]
    Tariff(#[from] TariffError),
}

/// Random digit string of the given length; the first digit is never zero.
fn random_digits<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    let mut digits = String::with_capacity(len);
    for i in 0..len {
        let digit = if i == 0 {
            rng.random_range(1..=9u8)
        } else {
            rng.random_range(0..=9u8)
        };
        digits.push((b'0' + digit) as char);
    }
    digits
}

/// Random dialing prefix of the given length.
pub fn random_prefix<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Result<Prefix, DatagenError> {
    if len == 0 || len > MAX_PREFIX_LEN {
        return Err(DatagenError::BadPrefixLength(len));
    }
    Ok(Prefix::new(random_digits(rng, len))?)
}

/// Random phone number of the given length.
pub fn random_number<R: Rng + ?Sized>(
    rng: &mut R,
    len: usize,
) -> Result<PhoneNumber, DatagenError> {
    if len == 0 || len > MAX_NUMBER_LEN {
        return Err(DatagenError::BadNumberLength(len));
    }
    Ok(PhoneNumber::new(random_digits(rng, len))?)
}

/// Random per-minute price with two decimal places in 0.01..=9.99.
pub fn random_price<R: Rng + ?Sized>(rng: &mut R) -> Decimal {
    Decimal::new(rng.random_range(1..=999), 2)
}

/// Random operator with `prefix_count` distinct prefixes.
pub fn random_operator<R: Rng + ?Sized>(
    rng: &mut R,
    name: &str,
    prefix_count: usize,
) -> Result<Operator, DatagenError> {
    let mut rates = HashMap::with_capacity(prefix_count);
    while rates.len() < prefix_count {
        let len = rng.random_range(1..=MAX_PREFIX_LEN);
        let prefix = random_prefix(rng, len)?;
        rates.entry(prefix).or_insert_with(|| random_price(rng));
    }
    Ok(Operator::new(name, rates)?)
}

/// Render operators into the textual ingest format.
///
/// Rows are sorted by prefix so output is stable for a given input.
pub fn render(operators: &[Operator]) -> String {
    let mut out = String::new();
    for (i, operator) in operators.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!("Operator {}:\n", operator.name()));

        let mut rows: Vec<_> = operator.rates().iter().collect();
        rows.sort_by(|a, b| a.0.cmp(b.0));
        for (prefix, price) in rows {
            out.push_str(&format!("{prefix} {price}\n"));
        }
    }
    out
}
