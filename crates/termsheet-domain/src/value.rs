//! Lexical classification of raw extracted values

use regex::Regex;
use std::sync::LazyLock;

// The service returns untyped strings; the spreadsheet representation is
// inferred from the lexical form alone, in this precedence order.
static CURRENCY: LazyLock<Regex> = LazyLock::new(|| {
    // e.g. "$ 550,462,191", "$123,456.78"
    Regex::new(r"^\$\s*[\d,]+(\.\d+)?$").unwrap()
});
static PERCENT: LazyLock<Regex> = LazyLock::new(|| {
    // e.g. "12%", "12.34%", "1,234.56%"
    Regex::new(r"^[\d,]+(\.\d+)?%$").unwrap()
});
static NUMERIC: LazyLock<Regex> = LazyLock::new(|| {
    // e.g. "1234", "1,234.56"
    Regex::new(r"^[\d,]+(\.\d+)?$").unwrap()
});

/// A raw extracted string classified into its spreadsheet representation.
#[derive(Debug, Clone, PartialEq)]
pub enum TypedValue {
    /// Dollar amount; rendered with a two-decimal currency format.
    Currency(f64),
    /// Percentage, stored as a fraction (12.34% -> 0.1234); rendered with a
    /// two-decimal percent format.
    Percentage(f64),
    /// Plain number; rendered with the default numeric format.
    Number(f64),
    /// Anything else, written verbatim.
    Text(String),
}

impl TypedValue {
    /// Classify a raw string value.
    ///
    /// Precedence is currency, then percentage, then numeric; any value that
    /// matches none of the patterns falls back to verbatim text.
    pub fn classify(raw: &str) -> TypedValue {
        let value = raw.trim();

        if CURRENCY.is_match(value) {
            let cleaned: String = value
                .chars()
                .filter(|c| !matches!(c, '$' | ' ' | ','))
                .collect();
            if let Ok(amount) = cleaned.parse::<f64>() {
                return TypedValue::Currency(amount);
            }
        }

        if PERCENT.is_match(value) {
            let cleaned: String = value
                .chars()
                .filter(|c| !matches!(c, '%' | ','))
                .collect();
            if let Ok(fraction) = cleaned.parse::<f64>() {
                return TypedValue::Percentage(fraction / 100.0);
            }
        }

        if NUMERIC.is_match(value) {
            let cleaned: String = value.chars().filter(|c| *c != ',').collect();
            if let Ok(number) = cleaned.parse::<f64>() {
                return TypedValue::Number(number);
            }
        }

        TypedValue::Text(value.to_string())
    }

    /// The spreadsheet display format code for this value, if it has one.
    pub fn format_code(&self) -> Option<&'static str> {
        match self {
            TypedValue::Currency(_) => Some("$#,##0.00"),
            TypedValue::Percentage(_) => Some("0.00%"),
            TypedValue::Number(_) => Some("General"),
            TypedValue::Text(_) => None,
        }
    }
}
