//! Tariff domain types: validated prefixes, phone numbers and operators.

mod types;

pub use types::{Operator, PhoneNumber, Prefix, TariffError};
