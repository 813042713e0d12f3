//! Best-price-per-prefix lookup table.
//!
//! Merges many operators' rate tables into a single mapping from prefix to
//! the cheapest operator for that prefix, then resolves full phone numbers
//! against it with a longest-prefix match.

use std::collections::HashMap;
use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{debug, trace};

use crate::tariff::{Operator, PhoneNumber, Prefix};

/// Merged best-price-per-prefix lookup table.
///
/// Each prefix maps to the operator with the lowest price seen for it so
/// far; one operator instance is shared by every prefix it wins. Built
/// once, read many times: mutation takes `&mut self`, all queries are
/// `&self` and safe for concurrent readers after construction.
#[derive(Debug, Clone, Default)]
pub struct PrefixTable {
    table: HashMap<Prefix, Arc<Operator>>,
}

impl PrefixTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from operators in order.
    ///
    /// Order matters on exact price ties: the earliest operator with the
    /// minimum price for a prefix is kept.
    pub fn build<I>(operators: I) -> Self
    where
        I: IntoIterator<Item = Operator>,
    {
        let mut table = Self::new();
        for operator in operators {
            table.merge_operator(Arc::new(operator));
        }

        debug!(prefixes = table.len(), "prefix table built");
        table
    }

    /// Number of prefixes in the table.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// True if no prefix has been merged yet.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// The winning operator for exactly `prefix`, if any. O(1) expected.
    pub fn lookup(&self, prefix: &str) -> Option<&Operator> {
        self.table.get(prefix).map(|operator| operator.as_ref())
    }

    /// Merge a single `(prefix, operator)` entry.
    ///
    /// Inserts if the prefix is new; otherwise the incumbent is replaced
    /// only when the incoming operator is strictly cheaper for that prefix,
    /// so on exact ties the earlier operator stays. An incumbent that
    /// publishes no price for its own prefix loses outright.
    pub fn insert_or_merge(&mut self, prefix: Prefix, operator: Arc<Operator>) {
        let replace = match self.table.get(&prefix) {
            None => true,
            Some(current) => match current.price_for_prefix(&prefix) {
                None => true,
                Some(current_price) => operator.has_better_price(&prefix, current_price),
            },
        };

        if replace {
            trace!(prefix = %prefix, operator = operator.name(), "prefix entry updated");
            self.table.insert(prefix, operator);
        }
    }

    /// Merge every prefix the operator prices.
    ///
    /// Prefix entries are independent, so iteration order over the
    /// operator's own rates cannot affect the result.
    pub fn merge_operator(&mut self, operator: Arc<Operator>) {
        for prefix in operator.prefixes() {
            self.insert_or_merge(prefix.clone(), Arc::clone(&operator));
        }
    }

    /// Resolve a phone number to the longest matching prefix in the table.
    ///
    /// Candidate prefixes are scanned in increasing length. A longer hit
    /// supersedes a shorter one, and the scan stops at the first miss after
    /// any hit: matching prefixes are assumed to form a contiguous run of
    /// lengths. With keys `4` and `415` but no `41`, a number starting
    /// `415...` therefore resolves to `4`: the table is taken to be
    /// hierarchical with no gaps.
    pub fn resolve(&self, number: &PhoneNumber) -> Option<&Prefix> {
        let digits = number.as_str();
        let mut best: Option<&Prefix> = None;

        for end in 1..=digits.len() {
            match self.table.get_key_value(&digits[..end]) {
                Some((prefix, _)) => best = Some(prefix),
                None if best.is_some() => break,
                None => continue,
            }
        }

        best
    }

    /// Resolve a number and fetch the winning operator and its price in one
    /// step. Convenience over [`resolve`](Self::resolve) +
    /// [`lookup`](Self::lookup) for callers that want the full answer.
    pub fn best_offer(&self, number: &PhoneNumber) -> Option<(&Prefix, &Operator, Decimal)> {
        let prefix = self.resolve(number)?;
        let operator = self.lookup(prefix.as_str())?;
        let price = operator.price_for_prefix(prefix)?;
        Some((prefix, operator, price))
    }
}
