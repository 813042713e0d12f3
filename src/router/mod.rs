//! Least-cost routing: the merged best-price-per-prefix table and
//! longest-prefix-match resolution.

mod table;

pub use table::PrefixTable;
