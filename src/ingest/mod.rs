//! Rate-table ingestion.
//!
//! Operator rate tables arrive as plain text, one block per operator:
//!
//! ```text
//! Operator A:
//! 1 0.9
//! 268 5.1
//! 46 0.17
//! ```
//!
//! Blocks are located by regex and each becomes an [`Operator`] through its
//! validating constructor. The whole file is read into memory; rate tables
//! are small.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use regex::Regex;
use rust_decimal::Decimal;
use tracing::debug;

use crate::tariff::{Operator, Prefix};

/// One operator block: a header line followed by one rate row per line.
const TABLE_PATTERN: &str = r"Operator (?P<name>.+):\n(?P<rows>(?:\d+[ \t]+\d+\.\d+\n?)+)";

/// One rate row: prefix, whitespace, price with a decimal point.
const ROW_PATTERN: &str = r"(?P<prefix>\d+)[ \t]+(?P<price>\d+\.\d+)";

/// Parse every operator block found in `text`.
///
/// Text outside the block format is ignored, as are rows that do not match
/// the row pattern; input with no blocks at all yields an empty list.
pub fn parse(text: &str) -> Result<Vec<Operator>> {
    let table_re = Regex::new(TABLE_PATTERN)?;
    let row_re = Regex::new(ROW_PATTERN)?;

    let mut operators = Vec::new();
    for table in table_re.captures_iter(text) {
        let name = &table["name"];

        let mut rates = std::collections::HashMap::new();
        for row in row_re.captures_iter(&table["rows"]) {
            let prefix = Prefix::new(&row["prefix"])?;
            let price: Decimal = row["price"]
                .parse()
                .with_context(|| format!("invalid price for prefix {}", &row["prefix"]))?;
            rates.insert(prefix, price);
        }

        let operator = Operator::new(name, rates)
            .with_context(|| format!("invalid rate table for operator {name}"))?;
        debug!(
            operator = operator.name(),
            rates = operator.rates().len(),
            "parsed operator table"
        );
        operators.push(operator);
    }

    Ok(operators)
}

/// Load and parse a rate-table file.
pub fn load_path<P: AsRef<Path>>(path: P) -> Result<Vec<Operator>> {
    let path = path.as_ref();

    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read rates file: {}", path.display()))?;

    parse(&contents).with_context(|| format!("failed to parse rates file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const SAMPLE: &str = "\
Operator A:
1 0.9
268 5.1
46 0.17
4620 0.0
468 0.15

Operator B:
1 0.92
44 0.5
46 0.2
467 1.0
48 1.2
";

    #[test]
    fn test_parse_sample() {
        let operators = parse(SAMPLE).unwrap();
        assert_eq!(operators.len(), 2);

        let a = &operators[0];
        assert_eq!(a.name(), "A");
        assert_eq!(a.rates().len(), 5);
        assert_eq!(
            a.price_for_prefix(&Prefix::new("46").unwrap()),
            Some(dec!(0.17))
        );

        let b = &operators[1];
        assert_eq!(b.name(), "B");
        assert_eq!(b.rates().len(), 5);
        assert_eq!(
            b.price_for_prefix(&Prefix::new("467").unwrap()),
            Some(dec!(1.0))
        );
    }

    #[test]
    fn test_parse_preserves_operator_order() {
        let operators = parse(SAMPLE).unwrap();
        let names: Vec<&str> = operators.iter().map(|o| o.name()).collect();
        assert_eq!(names, ["A", "B"]);
    }

    #[test]
    fn test_parse_zero_price() {
        let operators = parse(SAMPLE).unwrap();
        assert_eq!(
            operators[0].price_for_prefix(&Prefix::new("4620").unwrap()),
            Some(dec!(0.0))
        );
    }

    #[test]
    fn test_parse_multiword_operator_name() {
        let text = "Operator Tele 2:\n46 0.5\n";
        let operators = parse(text).unwrap();
        assert_eq!(operators[0].name(), "Tele 2");
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(parse("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_ignores_unstructured_text() {
        let operators = parse("nothing resembling a rate table\n1234\n").unwrap();
        assert!(operators.is_empty());
    }

    #[test]
    fn test_load_path_missing_file() {
        let err = load_path("/nonexistent/rates.txt").unwrap_err();
        assert!(err.to_string().contains("failed to read rates file"));
    }
}
