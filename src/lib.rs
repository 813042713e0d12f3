//! Least-cost operator lookup for phone numbers.
//!
//! Operators publish per-minute rates keyed by dialing-code prefix. This
//! crate merges many operators' rate tables into a single best-price-per-
//! prefix table and resolves full phone numbers against it with a
//! longest-prefix match:
//! - Tariff domain types (validated prefixes, operators, exact decimal rates)
//! - Prefix table construction and least-cost merge
//! - Longest-prefix-match resolution
//! - Rate-table ingestion from the textual source format
//! - Synthetic rate-table generation

pub mod config;
pub mod datagen;
pub mod ingest;
pub mod router;
pub mod tariff;
pub mod telemetry;
